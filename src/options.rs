//! Parser configuration.

/// Which top-level rule the input must match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Accept any [URI reference], i.e. a URI or a relative reference.
    ///
    /// [URI reference]: https://datatracker.ietf.org/doc/html/rfc3986#section-4.1
    #[default]
    Reference,
    /// Require a [URI], i.e. the scheme must be present.
    ///
    /// [URI]: https://datatracker.ietf.org/doc/html/rfc3986#section-3
    Absolute,
}

/// Which revision of the generic syntax to follow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dialect {
    /// [RFC 3986](https://datatracker.ietf.org/doc/html/rfc3986).
    #[default]
    Rfc3986,
    /// RFC 3986 with the registry-based authority of
    /// [RFC 2396](https://datatracker.ietf.org/doc/html/rfc2396#section-3.2.1).
    ///
    /// When an authority does not fit `[ userinfo "@" ] host [ ":" port ]`,
    /// it is re-read as a single registered name which may contain
    /// `"$" / "," / ";" / ":" / "@" / "&" / "=" / "+"`, and is reported as the host.
    Rfc2396,
}

/// Options of a parse.
///
/// # Examples
///
/// ```
/// use uri_grammar::{Components, Dialect, Mode, Options};
///
/// let options = Options::new().with_mode(Mode::Absolute);
/// assert!(Components::parse("/relative", options).is_err());
///
/// let options = Options::new().with_dialect(Dialect::Rfc2396);
/// let c = Components::parse("news://a@b@c/", options)?;
/// assert_eq!(c.host().unwrap().slice("news://a@b@c/"), "a@b@c");
/// # Ok::<_, uri_grammar::ParseError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Options {
    mode: Mode,
    dialect: Dialect,
}

impl Options {
    /// Creates the default options: any URI reference, RFC 3986.
    #[must_use]
    pub const fn new() -> Self {
        Options {
            mode: Mode::Reference,
            dialect: Dialect::Rfc3986,
        }
    }

    /// Sets the top-level mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the dialect.
    #[must_use]
    pub const fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Returns the top-level mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the dialect.
    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }
}
