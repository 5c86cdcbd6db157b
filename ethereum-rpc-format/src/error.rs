use std::result::Result as StdResult;
use thiserror::Error as ThisError;

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    #[error("Unexpected length. Expected {expected} got {got}.")]
    UnexpectedLength { expected: usize, got: usize },
    #[error("Malformed hex string. Value was: \"{0}\"")]
    MalformedHex(String),
    #[error("Integer doesn't fit in {bits} bits. Value was: \"{value}\"")]
    IntegerOverflow { bits: u32, value: String },
    #[error("Negative value can't be a quantity: {0}")]
    NegativeValue(i128),
    #[error("Unknown block label: {0}")]
    UnknownBlockLabel(String),
}

impl Error {
    /// `true` for errors produced by constructing a value type from data of the wrong shape
    /// (as opposed to malformed hex text).
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::UnexpectedLength { .. } | Self::NegativeValue(_))
    }
}

pub type Result<T> = StdResult<T, Error>;
