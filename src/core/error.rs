use thiserror::Error;

/// Errors from turning strings into cards.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum CardParseError {
    #[error("Unexpected character '{0}', expected a rank (2-9, T, J, Q, K, A)")]
    UnexpectedRankChar(char),
    #[error("Unexpected character '{0}', expected a suit (s, h, d, c)")]
    UnexpectedSuitChar(char),
    #[error("Unexpected end of input, expected a rank followed by a suit")]
    UnexpectedEnd,
    #[error("Too many characters for a single card")]
    TooManyChars,
}
