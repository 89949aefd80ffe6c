use thiserror::Error;

/// Failure while reading JSON text. Offsets are byte positions in the input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonError {
    #[error("invalid json at byte {0}")]
    Invalid(usize),
    #[error("unexpected end of json input")]
    UnexpectedEnd,
    #[error("invalid utf-8 at byte {0}")]
    InvalidUtf8(usize),
    #[error("invalid number at byte {0}")]
    InvalidNumber(usize),
    #[error("invalid escape sequence at byte {0}")]
    InvalidEscape(usize),
    #[error("unescaped control character at byte {0}")]
    ControlCharacter(usize),
    #[error("trailing data at byte {0}")]
    TrailingData(usize),
    #[error("nesting exceeds {0} levels")]
    DepthLimit(usize),
}

impl JsonError {
    /// Byte offset the error points at, when it has one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::Invalid(x)
            | Self::InvalidUtf8(x)
            | Self::InvalidNumber(x)
            | Self::InvalidEscape(x)
            | Self::ControlCharacter(x)
            | Self::TrailingData(x) => Some(*x),
            Self::UnexpectedEnd | Self::DepthLimit(_) => None,
        }
    }
}
