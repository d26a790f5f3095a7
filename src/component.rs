//! URI components.

use crate::{error::ParseError, options::Options, parser, table};
use alloc::string::String;
use core::ops::Range;
use ref_cast::{ref_cast_custom, RefCastCustom};

/// A component's position in the parsed input: a byte offset and a length.
///
/// A `Span` does not borrow the input. It is only meaningful together with
/// the exact input it was produced from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    start: usize,
    len: usize,
}

impl Span {
    /// Creates a span from a byte offset and a length.
    #[inline]
    #[must_use]
    pub const fn new(start: usize, len: usize) -> Self {
        Span { start, len }
    }

    #[inline]
    pub(crate) const fn between(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Span {
            start,
            len: end - start,
        }
    }

    /// Returns the byte offset of the first byte.
    #[inline]
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Returns the length in bytes.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the byte offset one past the last byte.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> usize {
        self.start + self.len
    }

    /// Checks whether the span is zero-length.
    ///
    /// A zero-length span still marks a *present* component.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the byte range of the span.
    #[inline]
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// Returns the slice of `input` covered by the span.
    ///
    /// # Panics
    ///
    /// Panics if the span is out of bounds of `input`, which may happen
    /// when `input` is not the string the span was produced from.
    #[inline]
    #[must_use]
    pub fn slice<'a>(&self, input: &'a str) -> &'a str {
        &input[self.range()]
    }
}

/// The syntactic form of a host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HostKind {
    /// An IPv4 address in dotted-decimal form.
    Ipv4,
    /// An IPv6 address enclosed in square brackets.
    Ipv6,
    /// An IP address of future version enclosed in square brackets.
    IpvFuture,
    /// A registered name, possibly empty.
    RegName,
}

/// The authority as captured by the grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub(crate) struct AuthorityParts {
    pub(crate) userinfo: Option<Span>,
    pub(crate) host: Span,
    pub(crate) host_kind: HostKind,
    pub(crate) port: Option<Span>,
}

impl AuthorityParts {
    pub(crate) fn span(&self) -> Span {
        let start = self
            .userinfo
            .map_or(self.host.start(), |userinfo| userinfo.start());
        let end = self.port.map_or(self.host.end(), |port| port.end());
        Span::between(start, end)
    }
}

/// The generic components of a URI reference, as spans into the parsed input.
///
/// Each component other than the path is either absent (`None`) or present
/// as a possibly empty [`Span`]. The two states are distinct: `"//@host"` has
/// an empty userinfo while `"//host"` has none.
///
/// Spans exclude their delimiters and appear in the order of
/// `scheme ":" "//" userinfo "@" host ":" port path "?" query "#" fragment`.
///
/// # Examples
///
/// ```
/// use uri_grammar::{Components, HostKind, Options};
///
/// let s = "http://user@example.com:80/foo/bar?attr=val#frag";
/// let c = Components::parse(s, Options::new())?;
///
/// assert_eq!(c.scheme().unwrap().slice(s), "http");
/// assert_eq!(c.userinfo().unwrap().slice(s), "user");
/// assert_eq!(c.host().unwrap().slice(s), "example.com");
/// assert_eq!(c.host_kind(), Some(HostKind::RegName));
/// assert_eq!(c.port().unwrap().slice(s), "80");
/// assert_eq!(c.path().slice(s), "/foo/bar");
/// assert_eq!(c.query().unwrap().slice(s), "attr=val");
/// assert_eq!(c.fragment().unwrap().slice(s), "frag");
/// assert_eq!(c.recompose(s), s);
/// # Ok::<_, uri_grammar::ParseError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Components {
    pub(crate) scheme: Option<Span>,
    pub(crate) authority: Option<AuthorityParts>,
    pub(crate) path: Span,
    pub(crate) query: Option<Span>,
    pub(crate) fragment: Option<Span>,
}

impl Components {
    /// Parses a URI reference into components.
    ///
    /// The whole input must match; the spans refer to byte offsets into it.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the input does not match the `URI-reference` ABNF rule
    /// from RFC 3986, or the `URI` rule when [`Mode::Absolute`] is set.
    ///
    /// [`Mode::Absolute`]: crate::Mode::Absolute
    pub fn parse<S: AsRef<[u8]> + ?Sized>(
        input: &S,
        options: Options,
    ) -> Result<Components, ParseError> {
        parser::parse(input.as_ref(), options)
    }

    /// Returns the scheme, excluding the trailing colon.
    #[inline]
    #[must_use]
    pub fn scheme(&self) -> Option<Span> {
        self.scheme
    }

    /// Returns the userinfo, excluding the trailing `"@"`.
    #[inline]
    #[must_use]
    pub fn userinfo(&self) -> Option<Span> {
        self.authority.and_then(|auth| auth.userinfo)
    }

    /// Returns the host, including the square brackets of an IP literal.
    ///
    /// The host is present if and only if the authority is.
    #[inline]
    #[must_use]
    pub fn host(&self) -> Option<Span> {
        self.authority.map(|auth| auth.host)
    }

    /// Returns the syntactic form of the host.
    #[inline]
    #[must_use]
    pub fn host_kind(&self) -> Option<HostKind> {
        self.authority.map(|auth| auth.host_kind)
    }

    /// Returns the port, excluding the leading colon.
    #[inline]
    #[must_use]
    pub fn port(&self) -> Option<Span> {
        self.authority.and_then(|auth| auth.port)
    }

    /// Returns the path. It is always present but may be empty.
    #[inline]
    #[must_use]
    pub fn path(&self) -> Span {
        self.path
    }

    /// Returns the query, excluding the leading `"?"`.
    #[inline]
    #[must_use]
    pub fn query(&self) -> Option<Span> {
        self.query
    }

    /// Returns the fragment, excluding the leading `"#"`.
    #[inline]
    #[must_use]
    pub fn fragment(&self) -> Option<Span> {
        self.fragment
    }

    /// Returns the authority, excluding the leading `"//"`.
    #[inline]
    #[must_use]
    pub fn authority(&self) -> Option<Span> {
        self.authority.map(|auth| auth.span())
    }

    /// Returns the part between the scheme's colon and the fragment's `"#"`,
    /// if the scheme is present.
    #[must_use]
    pub fn scheme_specific_part(&self) -> Option<Span> {
        let scheme = self.scheme?;
        let end = self.query.map_or(self.path.end(), |query| query.end());
        Some(Span::between(scheme.end() + 1, end))
    }

    /// Checks whether the components form a URI rather than a relative reference.
    #[inline]
    #[must_use]
    pub fn has_scheme(&self) -> bool {
        self.scheme.is_some()
    }

    /// Reassembles the present components and their delimiters into a string.
    ///
    /// For the input the components were parsed from, this reproduces
    /// the input exactly.
    ///
    /// # Panics
    ///
    /// Panics if any span is out of bounds of `input`.
    #[must_use]
    pub fn recompose(&self, input: &str) -> String {
        let mut buf = String::with_capacity(input.len());
        if let Some(scheme) = self.scheme {
            buf.push_str(scheme.slice(input));
            buf.push(':');
        }
        if let Some(auth) = self.authority {
            buf.push_str("//");
            if let Some(userinfo) = auth.userinfo {
                buf.push_str(userinfo.slice(input));
                buf.push('@');
            }
            buf.push_str(auth.host.slice(input));
            if let Some(port) = auth.port {
                buf.push(':');
                buf.push_str(port.slice(input));
            }
        }
        buf.push_str(self.path.slice(input));
        if let Some(query) = self.query {
            buf.push('?');
            buf.push_str(query.slice(input));
        }
        if let Some(fragment) = self.fragment {
            buf.push('#');
            buf.push_str(fragment.slice(input));
        }
        buf
    }
}

/// A [scheme] component.
///
/// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.1
///
/// # Comparison
///
/// `Scheme`s are compared case-insensitively. Use [`as_str`] for a
/// case-sensitive comparison.
///
/// [`as_str`]: Self::as_str
///
/// # Examples
///
/// ```
/// use uri_grammar::{Scheme, Uri};
///
/// let scheme = Uri::parse("HTTP://EXAMPLE.COM/")?.scheme();
///
/// assert_eq!(scheme, Scheme::new("http").unwrap());
/// assert_eq!(scheme.as_str(), "HTTP");
/// # Ok::<_, uri_grammar::ParseError>(())
/// ```
#[derive(RefCastCustom)]
#[repr(transparent)]
pub struct Scheme {
    inner: str,
}

impl Scheme {
    #[ref_cast_custom]
    #[inline]
    pub(crate) const fn new_validated(scheme: &str) -> &Scheme;

    /// Converts a string slice to `&Scheme`, returning `None` if it is
    /// not a valid scheme name.
    #[inline]
    #[must_use]
    pub const fn new(s: &str) -> Option<&Scheme> {
        if matches!(s.as_bytes(), [first, rem @ ..]
        if first.is_ascii_alphabetic() && table::SCHEME.validate(rem))
        {
            Some(Scheme::new_validated(s))
        } else {
            None
        }
    }

    /// Returns the scheme component as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl PartialEq for Scheme {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner.eq_ignore_ascii_case(&other.inner)
    }
}

impl Eq for Scheme {}
