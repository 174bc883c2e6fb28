use thiserror::Error;

/// Error produced when inverting a node list.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum InvertError {
    /// Integer overflow
    ///
    /// This occurs when negating the minimum integer value.
    #[error("integer overflow")]
    IntegerOverflow,
}

/// Error produced when parsing notation.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
#[error("{kind} at offset {offset}")]
pub struct ParseError {
    /// Byte offset of the offending text in the input string.
    pub offset: usize,
    /// What went wrong.
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(offset: usize, kind: ParseErrorKind) -> Self {
        Self { offset, kind }
    }
}

/// Kind of [`ParseError`].
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// Character that cannot start or continue a move
    #[error("unexpected {0:?}")]
    UnexpectedChar(char),
    /// Input ended in the middle of a move
    #[error("unexpected end of input")]
    UnexpectedEnd,
    /// Repeat count of zero
    #[error("repeat count must be nonzero")]
    ZeroMultiplier,
    /// Repeat count too large to represent
    #[error("repeat count out of range")]
    MultiplierOutOfRange,
}
