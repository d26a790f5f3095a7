use crate::{
    component::{Components, HostKind, Scheme},
    error::ParseError,
    internal::{Parse, RiRef},
    options::{Mode, Options},
};
use alloc::{borrow::ToOwned, string::String};
use borrow_or_share::{BorrowOrShare, Bos};
use core::{
    borrow::Borrow,
    cmp::Ordering,
    fmt, hash,
    num::ParseIntError,
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

macro_rules! cond {
    (if true { $($then:tt)* } else { $($else:tt)* }) => { $($then)* };
    (if false { $($then:tt)* } else { $($else:tt)* }) => { $($else)* };
}

macro_rules! ri_maybe_ref {
    (
        Type = $Ty:ident,
        type_name = $ty:literal,
        variable_name = $var:literal,
        name = $name:literal,
        description = $desc:literal,
        mode = $mode:expr,
        must_have_scheme = $must_have_scheme:tt,
        abnf_rule = ($abnf:literal, $abnf_link:literal),
    ) => {
        #[doc = $desc]
        ///
        /// # Variants
        ///
        #[doc = concat!("Two variants of `", $ty, "` are available: ")]
        #[doc = concat!("`", $ty, "<&str>` (borrowed) and `", $ty, "<String>` (owned).")]
        ///
        #[doc = concat!("`", $ty, "<&'a str>`")]
        /// outputs references with lifetime `'a` where possible
        /// (thanks to [`borrow-or-share`](borrow_or_share)):
        ///
        /// ```
        #[doc = concat!("use uri_grammar::", $ty, ";")]
        ///
        #[doc = concat!("// Keep a reference to the path after dropping the `", $ty, "`.")]
        #[doc = concat!("let path = ", $ty, "::parse(\"foo:bar\")?.path();")]
        /// assert_eq!(path, "bar");
        /// # Ok::<_, uri_grammar::ParseError>(())
        /// ```
        ///
        /// # Comparison
        ///
        #[doc = concat!("`", $ty, "`s")]
        /// are compared by their byte values. No normalization is performed.
        ///
        /// # Examples
        ///
        /// ```
        #[doc = concat!("use uri_grammar::{HostKind, Scheme, ", $ty, "};")]
        ///
        /// let s = "foo://user@192.0.2.1:8042/over/there?name=ferret#nose";
        #[doc = concat!("let ", $var, " = ", $ty, "::parse(s)?;")]
        ///
        #[doc = concat!("assert_eq!(", $var, ".scheme()",
            cond!(if $must_have_scheme { "" } else { ".unwrap()" }), ", Scheme::new(\"foo\").unwrap());")]
        #[doc = concat!("assert_eq!(", $var, ".authority(), Some(\"user@192.0.2.1:8042\"));")]
        #[doc = concat!("assert_eq!(", $var, ".userinfo(), Some(\"user\"));")]
        #[doc = concat!("assert_eq!(", $var, ".host(), Some(\"192.0.2.1\"));")]
        #[doc = concat!("assert_eq!(", $var, ".host_kind(), Some(HostKind::Ipv4));")]
        #[doc = concat!("assert_eq!(", $var, ".port_to_u16(), Ok(Some(8042)));")]
        #[doc = concat!("assert_eq!(", $var, ".path(), \"/over/there\");")]
        #[doc = concat!("assert_eq!(", $var, ".query(), Some(\"name=ferret\"));")]
        #[doc = concat!("assert_eq!(", $var, ".fragment(), Some(\"nose\"));")]
        /// # Ok::<_, uri_grammar::ParseError>(())
        /// ```
        #[derive(Clone, Copy)]
        pub struct $Ty<T> {
            val: T,
            /// Should be identical to parser output with `val` as input.
            components: Components,
        }

        impl<T> RiRef for $Ty<T> {
            type Val = T;

            fn new(val: T, components: Components) -> Self {
                Self { val, components }
            }

            fn options() -> Options {
                Options::new().with_mode($mode)
            }
        }

        impl<T> $Ty<T> {
            #[doc = concat!("Parses ", $name, " from a string into a `", $ty, "`.")]
            ///
            /// The return type is
            ///
            #[doc = concat!("- `Result<", $ty, "<&str>, ParseError>` for `I = &str`;")]
            #[doc = concat!("- `Result<", $ty, "<String>, ParseError<String>>` for `I = String`.")]
            ///
            /// # Errors
            ///
            /// Returns `Err` if the string does not match the
            #[doc = concat!("[`", $abnf, "`][abnf] ABNF rule from RFC 3986.")]
            ///
            /// From a [`ParseError<String>`], you may recover the input
            /// by calling [`into_input`] on it.
            ///
            #[doc = concat!("[abnf]: ", $abnf_link)]
            /// [`into_input`]: ParseError::into_input
            pub fn parse<I>(input: I) -> Result<Self, I::Err>
            where
                I: Parse<Val = T>,
            {
                input.parse()
            }

            /// Returns the parsed components.
            ///
            /// Their spans refer to byte offsets into [`as_str`](Self::as_str).
            #[inline]
            #[must_use]
            pub fn components(&self) -> Components {
                self.components
            }

            /// Returns the syntactic form of the host, if any.
            #[inline]
            #[must_use]
            pub fn host_kind(&self) -> Option<HostKind> {
                self.components.host_kind()
            }

            cond!(if $must_have_scheme {} else {
                /// Checks whether a scheme component is present.
                ///
                /// ```
                #[doc = concat!("use uri_grammar::", $ty, ";")]
                ///
                #[doc = concat!("assert!(", $ty, "::parse(\"http://example.com/\")?.has_scheme());")]
                #[doc = concat!("assert!(!", $ty, "::parse(\"/path/to/file\")?.has_scheme());")]
                /// # Ok::<_, uri_grammar::ParseError>(())
                /// ```
                #[inline]
                #[must_use]
                pub fn has_scheme(&self) -> bool {
                    self.components.has_scheme()
                }
            });

            /// Checks whether an authority component is present.
            #[inline]
            #[must_use]
            pub fn has_authority(&self) -> bool {
                self.components.host().is_some()
            }
        }

        impl $Ty<String> {
            #[doc = concat!("Borrows this `", $ty, "<String>` as `", $ty, "<&str>`.")]
            #[allow(clippy::should_implement_trait)]
            #[inline]
            #[must_use]
            pub fn borrow(&self) -> $Ty<&str> {
                $Ty {
                    val: &self.val,
                    components: self.components,
                }
            }

            #[doc = concat!("Consumes this `", $ty, "<String>` and yields the underlying [`String`].")]
            #[inline]
            #[must_use]
            pub fn into_string(self) -> String {
                self.val
            }
        }

        impl $Ty<&str> {
            #[doc = concat!("Creates a new `", $ty, "<String>` by cloning the contents of this `", $ty, "<&str>`.")]
            #[inline]
            #[must_use]
            pub fn to_owned(&self) -> $Ty<String> {
                $Ty {
                    val: self.val.to_owned(),
                    components: self.components,
                }
            }
        }

        impl<'i, 'o, T: BorrowOrShare<'i, 'o, str>> $Ty<T> {
            #[doc = concat!("Returns the `", $ty, "` as a string slice.")]
            #[must_use]
            pub fn as_str(&'i self) -> &'o str {
                self.val.borrow_or_share()
            }

            cond!(if $must_have_scheme {
                /// Returns the [scheme] component.
                ///
                /// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.1
                #[must_use]
                pub fn scheme(&'i self) -> &'o Scheme {
                    let end = self.components.scheme().map_or(0, |s| s.end());
                    Scheme::new_validated(&self.as_str()[..end])
                }
            } else {
                /// Returns the optional [scheme] component.
                ///
                /// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.1
                ///
                /// ```
                #[doc = concat!("use uri_grammar::", $ty, ";")]
                ///
                #[doc = concat!("let ", $var, " = ", $ty, "::parse(\"/path/to/file\")?;")]
                #[doc = concat!("assert_eq!(", $var, ".scheme(), None);")]
                /// # Ok::<_, uri_grammar::ParseError>(())
                /// ```
                #[must_use]
                pub fn scheme(&'i self) -> Option<&'o Scheme> {
                    let s = self.components.scheme()?;
                    Some(Scheme::new_validated(s.slice(self.as_str())))
                }
            });

            /// Returns the optional [authority] component.
            ///
            /// [authority]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2
            ///
            /// ```
            #[doc = concat!("use uri_grammar::", $ty, ";")]
            ///
            #[doc = concat!("let ", $var, " = ", $ty, "::parse(\"http://example.com/\")?;")]
            #[doc = concat!("assert_eq!(", $var, ".authority(), Some(\"example.com\"));")]
            ///
            #[doc = concat!("let ", $var, " = ", $ty, "::parse(\"mailto:user@example.com\")?;")]
            #[doc = concat!("assert_eq!(", $var, ".authority(), None);")]
            /// # Ok::<_, uri_grammar::ParseError>(())
            /// ```
            #[must_use]
            pub fn authority(&'i self) -> Option<&'o str> {
                self.components.authority().map(|s| s.slice(self.as_str()))
            }

            /// Returns the optional [userinfo] subcomponent.
            ///
            /// An empty userinfo followed by `"@"` is `Some("")`.
            ///
            /// [userinfo]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.1
            #[must_use]
            pub fn userinfo(&'i self) -> Option<&'o str> {
                self.components.userinfo().map(|s| s.slice(self.as_str()))
            }

            /// Returns the [host] subcomponent, present if and only if the
            /// authority is.
            ///
            /// [host]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.2
            #[must_use]
            pub fn host(&'i self) -> Option<&'o str> {
                self.components.host().map(|s| s.slice(self.as_str()))
            }

            /// Returns the optional [port] subcomponent, which may be empty.
            ///
            /// [port]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.3
            #[must_use]
            pub fn port(&'i self) -> Option<&'o str> {
                self.components.port().map(|s| s.slice(self.as_str()))
            }

            /// Converts the port subcomponent to `u16`, if present and nonempty.
            ///
            /// Leading zeros are ignored.
            ///
            /// # Errors
            ///
            /// Returns `Err` if the port cannot be parsed into `u16`.
            pub fn port_to_u16(&'i self) -> Result<Option<u16>, ParseIntError> {
                self.port()
                    .filter(|port| !port.is_empty())
                    .map(|port| port.parse())
                    .transpose()
            }

            /// Returns the [path] component.
            ///
            /// The path component is always present, although it may be empty.
            ///
            /// [path]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.3
            #[must_use]
            pub fn path(&'i self) -> &'o str {
                self.components.path().slice(self.as_str())
            }

            /// Returns the optional [query] component.
            ///
            /// [query]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.4
            #[must_use]
            pub fn query(&'i self) -> Option<&'o str> {
                self.components.query().map(|s| s.slice(self.as_str()))
            }

            /// Returns the optional [fragment] component.
            ///
            /// [fragment]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.5
            #[must_use]
            pub fn fragment(&'i self) -> Option<&'o str> {
                self.components.fragment().map(|s| s.slice(self.as_str()))
            }
        }

        impl<T: Bos<str>, U: Bos<str>> PartialEq<$Ty<U>> for $Ty<T> {
            fn eq(&self, other: &$Ty<U>) -> bool {
                self.as_str() == other.as_str()
            }
        }

        impl<T: Bos<str>> PartialEq<str> for $Ty<T> {
            fn eq(&self, other: &str) -> bool {
                self.as_str() == other
            }
        }

        impl<T: Bos<str>> PartialEq<&str> for $Ty<T> {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl<T: Bos<str>> Eq for $Ty<T> {}

        impl<T: Bos<str>> hash::Hash for $Ty<T> {
            fn hash<H: hash::Hasher>(&self, state: &mut H) {
                self.as_str().hash(state);
            }
        }

        impl<T: Bos<str>> PartialOrd for $Ty<T> {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl<T: Bos<str>> Ord for $Ty<T> {
            fn cmp(&self, other: &Self) -> Ordering {
                self.as_str().cmp(other.as_str())
            }
        }

        impl<T: Bos<str>> AsRef<str> for $Ty<T> {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl<T: Bos<str>> Borrow<str> for $Ty<T> {
            fn borrow(&self) -> &str {
                self.as_str()
            }
        }

        impl<'a> TryFrom<&'a str> for $Ty<&'a str> {
            type Error = ParseError;

            #[inline]
            fn try_from(value: &'a str) -> Result<Self, Self::Error> {
                $Ty::parse(value)
            }
        }

        impl TryFrom<String> for $Ty<String> {
            type Error = ParseError<String>;

            #[inline]
            fn try_from(value: String) -> Result<Self, Self::Error> {
                $Ty::parse(value)
            }
        }

        impl<'a> From<$Ty<&'a str>> for &'a str {
            #[doc = concat!("Equivalent to [`as_str`](", $ty, "::as_str).")]
            #[inline]
            fn from(value: $Ty<&'a str>) -> &'a str {
                value.val
            }
        }

        impl From<$Ty<String>> for String {
            #[doc = concat!("Equivalent to [`into_string`](", $ty, "::into_string).")]
            #[inline]
            fn from(value: $Ty<String>) -> String {
                value.val
            }
        }

        impl From<$Ty<&str>> for $Ty<String> {
            #[inline]
            fn from(value: $Ty<&str>) -> Self {
                value.to_owned()
            }
        }

        impl FromStr for $Ty<String> {
            type Err = ParseError;

            #[doc = concat!("Equivalent to `", $ty, "::parse(s).map(|r| r.to_owned())`.")]
            #[inline]
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $Ty::parse(s).map(|r| r.to_owned())
            }
        }

        impl<T: Bos<str>> fmt::Debug for $Ty<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct($ty)
                    .field("scheme", &self.scheme())
                    .field("authority", &self.authority())
                    .field("path", &self.path())
                    .field("query", &self.query())
                    .field("fragment", &self.fragment())
                    .finish()
            }
        }

        impl<T: Bos<str>> fmt::Display for $Ty<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(self.as_str(), f)
            }
        }

        #[cfg(feature = "serde")]
        impl<T: Bos<str>> Serialize for $Ty<T> {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> Deserialize<'de> for $Ty<&'de str> {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = <&str>::deserialize(deserializer)?;
                $Ty::parse(s).map_err(de::Error::custom)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> Deserialize<'de> for $Ty<String> {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                $Ty::parse(s).map_err(de::Error::custom)
            }
        }
    };
}

ri_maybe_ref! {
    Type = Uri,
    type_name = "Uri",
    variable_name = "uri",
    name = "a URI",
    description = "A URI, i.e., a URI reference with a scheme.",
    mode = Mode::Absolute,
    must_have_scheme = true,
    abnf_rule = ("URI", "https://datatracker.ietf.org/doc/html/rfc3986#section-3"),
}

ri_maybe_ref! {
    Type = UriRef,
    type_name = "UriRef",
    variable_name = "uri_ref",
    name = "a URI reference",
    description = "A URI reference, i.e., either a URI or a relative reference.",
    mode = Mode::Reference,
    must_have_scheme = false,
    abnf_rule = ("URI-reference", "https://datatracker.ietf.org/doc/html/rfc3986#section-4.1"),
}
