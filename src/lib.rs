#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![cfg_attr(not(feature = "std"), no_std)]

//! A syntactic URI decomposer that strictly adheres to IETF [RFC 3986].
//!
//! [RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986/
//!
//! The input is matched against the generic syntax and split into its
//! components. Nothing is decoded, normalized or resolved: every component
//! is a [`Span`] into the input, and putting the present components back
//! together with their delimiters gives the input again.
//!
//! # Examples
//!
//! ```
//! use uri_grammar::{Components, Options};
//!
//! let s = "//user@example.com:80/foo/bar?attr=val#frag";
//! let c = Components::parse(s, Options::new())?;
//!
//! assert!(c.scheme().is_none());
//! assert_eq!(c.host().unwrap().slice(s), "example.com");
//! assert_eq!(c.recompose(s), s);
//! # Ok::<_, uri_grammar::ParseError>(())
//! ```
//!
//! For a string that owns or borrows its input and hands out string slices,
//! see [`Uri`] and [`UriRef`].
//!
//! # Terminology
//!
//! A *URI reference* is either a *URI* or a *relative reference*. A URI
//! starts with a scheme, a relative reference does not.
//!
//! # Feature flags
//!
//! - `std` (default): Enables `std` support. This includes the [`Error`]
//!   implementation for [`ParseError`].
//!
//! - `serde`: Enables serialization and deserialization of the public types.
//!
//! - `tracing`: Emits trace events from the grammar engine through
//!   the [`tracing`](https://docs.rs/tracing) crate.
//!
//! [`Error`]: std::error::Error

extern crate alloc;

mod component;
mod error;
mod fmt;
mod internal;
mod options;
mod parser;
mod ri;

pub mod ip;
pub mod table;

pub use component::{Components, HostKind, Scheme, Span};
pub use error::{ParseError, ParseErrorKind};
pub use options::{Dialect, Mode, Options};
pub use ri::{Uri, UriRef};
