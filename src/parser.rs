//! The grammar engine.
//!
//! Every rule is a method taking a start position and returning an
//! [`Outcome`]: either the position just past the match together with what
//! the rule captured, or a [`Failure`]. Rules never mutate shared capture
//! state, so a failed alternative leaves nothing behind; the parent rule
//! assembles the captures of its children into its own.
//!
//! Alternatives are tried in a fixed priority order and the first success
//! wins. Failures are ordinary values; the only side channel is the deepest
//! failure seen so far, which is kept for diagnostics.

mod authority;
mod ip;
mod path;
mod reference;

use crate::{
    component::{Components, Span},
    error::{ParseError, ParseErrorKind},
    options::Options,
    table::{self, Table},
};
use core::cell::Cell;

/// Emits a trace event when the `tracing` feature is enabled.
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}

/// Emits a debug event when the `tracing` feature is enabled.
macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

pub(crate) use {debug, trace};

/// A rule failure: where it happened and why.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Failure {
    pub(crate) index: usize,
    pub(crate) kind: ParseErrorKind,
}

/// The result of applying a rule at some position.
pub(crate) type Outcome<T = ()> = Result<(usize, T), Failure>;

pub(crate) fn parse(bytes: &[u8], options: Options) -> Result<Components, ParseError> {
    let parser = Parser::new(bytes, options);
    parser
        .uri_reference()
        .map_err(|failure| ParseError::new(failure.index, failure.kind))
}

pub(crate) fn is_ipv4(bytes: &[u8]) -> bool {
    Parser::new(bytes, Options::new()).ipv4_address(0) == Some(bytes.len())
}

pub(crate) fn is_ipv6(bytes: &[u8]) -> bool {
    let len = bytes.len();
    Parser::new(bytes, Options::new())
        .ipv6_address(0, |end| end == len)
        .is_some()
}

pub(crate) fn is_ipv_future(bytes: &[u8]) -> bool {
    Parser::new(bytes, Options::new()).ipv_future(0) == Some(bytes.len())
}

/// URI parser.
///
/// # Invariants
///
/// Every position passed to or returned by a rule is `<= len`.
/// `bytes` is never modified.
pub(crate) struct Parser<'a> {
    bytes: &'a [u8],
    options: Options,
    furthest: Cell<Option<Failure>>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(bytes: &'a [u8], options: Options) -> Self {
        Parser {
            bytes,
            options,
            furthest: Cell::new(None),
        }
    }

    fn len(&self) -> usize {
        self.bytes.len()
    }

    fn peek(&self, pos: usize) -> Option<u8> {
        self.bytes.get(pos).copied()
    }

    /// Records a failure, keeping only the deepest one, and returns it.
    fn fail(&self, index: usize, kind: ParseErrorKind) -> Failure {
        let failure = Failure { index, kind };
        let replace = match self.furthest.get() {
            None => true,
            Some(prev) => {
                index > prev.index
                    || (index == prev.index && kind.specificity() > prev.kind.specificity())
            }
        };
        if replace {
            self.furthest.set(Some(failure));
        }
        failure
    }

    /// Fails because something required was not found at `index`.
    fn expected(&self, index: usize) -> Failure {
        let kind = if index >= self.len() {
            ParseErrorKind::Incomplete
        } else {
            ParseErrorKind::InvalidCharacter
        };
        self.fail(index, kind)
    }

    /// Matches a literal byte string.
    fn literal(&self, pos: usize, s: &[u8]) -> Outcome {
        if self.bytes[pos..].starts_with(s) {
            Ok((pos + s.len(), ()))
        } else {
            Err(self.expected(pos))
        }
    }

    /// Checks for a literal byte without recording anything.
    fn at(&self, pos: usize, x: u8) -> bool {
        self.peek(pos) == Some(x)
    }

    /// Reads the longest run of units allowed by `table` and returns its end.
    ///
    /// A unit is an allowed byte or, if the table allows it, a percent-encoded
    /// octet. A `"%"` not followed by two hexadecimal digits ends the run and
    /// is recorded as a failure.
    fn run(&self, pos: usize, table: Table) -> usize {
        let mut i = pos;
        while let Some(x) = self.peek(i) {
            if x == b'%' && table.allows_pct_encoded() {
                if !table::pct_encoded_at(self.bytes, i) {
                    self.fail(i, ParseErrorKind::UnterminatedPercentEncoding);
                    break;
                }
                i += 3;
            } else if table.allows(x) {
                i += 1;
            } else {
                break;
            }
        }
        i
    }

    /// Like [`run`](Self::run), but requires at least one unit.
    fn run1(&self, pos: usize, table: Table) -> Outcome<Span> {
        let end = self.run(pos, table);
        if end > pos {
            Ok((end, Span::between(pos, end)))
        } else {
            Err(self.expected(pos))
        }
    }

    /// Turns the stopping point of the best partial match into a failure.
    fn diagnose(&self, stop: usize) -> Failure {
        match self.furthest.get() {
            Some(failure) if failure.index >= stop => failure,
            _ => {
                let kind = match self.peek(stop) {
                    Some(x) if table::is_uri_char(x) => ParseErrorKind::TrailingData,
                    Some(_) => ParseErrorKind::InvalidCharacter,
                    None => ParseErrorKind::Incomplete,
                };
                Failure { index: stop, kind }
            }
        }
    }
}
