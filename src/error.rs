//! Error types.

/// Detailed cause of a [`ParseError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseErrorKind {
    /// A byte that is not allowed by the production being matched.
    ///
    /// The error index points to the byte.
    InvalidCharacter,
    /// A percent character `"%"` that is not followed by two hexadecimal digits.
    ///
    /// The error index points to the percent character.
    UnterminatedPercentEncoding,
    /// An IP literal that is malformed or not closed by a right square bracket `"]"`,
    /// including IPv6 addresses with bad grouping and IPv4 octets out of range.
    ///
    /// The error index points to the left square bracket `"["`.
    InvalidHostLiteral,
    /// The input ended in the middle of a production.
    ///
    /// The error index equals the length of the input.
    Incomplete,
    /// A prefix of the input matched, but unconsumed input remains.
    ///
    /// The error index points to the first unconsumed byte.
    TrailingData,
}

impl ParseErrorKind {
    /// Ranks kinds reported at the same index; the higher one is kept.
    pub(crate) fn specificity(self) -> u8 {
        match self {
            Self::TrailingData => 0,
            Self::InvalidCharacter | Self::Incomplete => 1,
            Self::UnterminatedPercentEncoding | Self::InvalidHostLiteral => 2,
        }
    }

    pub(crate) fn description(self) -> &'static str {
        match self {
            Self::InvalidCharacter => "invalid character",
            Self::UnterminatedPercentEncoding => "unterminated percent-encoded octet",
            Self::InvalidHostLiteral => "invalid host literal",
            Self::Incomplete => "unexpected end of input",
            Self::TrailingData => "trailing data",
        }
    }
}

/// An error occurred when parsing a URI (reference).
///
/// The error index is the deepest position any attempted alternative
/// of the grammar reached before failing.
///
/// The type parameter `I` carries the rejected input when it was passed
/// by value, so that an owned `String` is not lost on failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseError<I = ()> {
    pub(crate) index: usize,
    pub(crate) kind: ParseErrorKind,
    pub(crate) input: I,
}

impl ParseError {
    pub(crate) fn new(index: usize, kind: ParseErrorKind) -> Self {
        ParseError {
            index,
            kind,
            input: (),
        }
    }

    pub(crate) fn with_input<I>(self, input: I) -> ParseError<I> {
        ParseError {
            index: self.index,
            kind: self.kind,
            input,
        }
    }
}

impl<I> ParseError<I> {
    /// Returns the index at which the error occurred.
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the detailed cause of the error.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Recovers the input that was attempted to parse.
    #[inline]
    pub fn into_input(self) -> I {
        self.input
    }

    /// Returns the error with input erased.
    #[inline]
    #[must_use]
    pub fn plain(&self) -> ParseError {
        ParseError::new(self.index, self.kind)
    }
}

#[cfg(feature = "std")]
impl<I: core::fmt::Debug> std::error::Error for ParseError<I> {}
