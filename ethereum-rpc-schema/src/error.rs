use std::fmt;
use std::result::Result as StdResult;

use thiserror::Error as ThisError;

use crate::TypeDesc;

/// One step of the path from the root of a structured value to the place an error occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Record field, by wire name.
    Field(String),
    /// Sequence or tuple element.
    Index(usize),
}

#[derive(Debug, ThisError)]
pub enum ErrorKind {
    #[error(transparent)]
    Format(#[from] ethereum_rpc_format::Error),
    #[error("expected {expected}, got {got}")]
    UnexpectedType { expected: TypeDesc, got: &'static str },
    #[error("missing field `{0}`")]
    MissingField(String),
    #[error("expected {expected} elements, got {got}")]
    ArityMismatch { expected: usize, got: usize },
    #[error("expected at most {max} elements, got {got}")]
    TooManyElements { max: usize, got: usize },
    #[error("{}", fmt_no_match(.union, .attempts))]
    NoMatchingVariant {
        union: &'static str,
        attempts: Vec<Error>,
    },
    #[error("expected transaction type {expected}, got {actual}")]
    VariantMismatch { expected: u64, actual: u64 },
    #[error("value is nested deeper than {limit} levels")]
    TooDeep { limit: usize },
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}

fn fmt_no_match(union: &str, attempts: &[Error]) -> String {
    let reasons = attempts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    format!("no variant of {union} matched ({reasons})")
}

/// A structuring failure together with the path to the offending value, e.g.
/// `transactions[2].value: Malformed hex string`.
#[derive(Debug)]
pub struct Error {
    // innermost segment first, segments are pushed while the error unwinds
    path: Vec<PathSegment>,
    kind: Box<ErrorKind>,
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Path from the root value, outermost segment first.
    pub fn path(&self) -> impl Iterator<Item = &PathSegment> {
        self.path.iter().rev()
    }

    pub fn at_field(mut self, name: impl Into<String>) -> Self {
        self.path.push(PathSegment::Field(name.into()));
        self
    }

    pub fn at_index(mut self, index: usize) -> Self {
        self.path.push(PathSegment::Index(index));
        self
    }

    pub fn is_too_deep(&self) -> bool {
        matches!(*self.kind, ErrorKind::TooDeep { .. })
    }

    pub(crate) fn unexpected_type(expected: TypeDesc, value: &serde_json::Value) -> Self {
        ErrorKind::UnexpectedType {
            expected,
            got: json_kind(value),
        }
        .into()
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self {
            path: Vec::new(),
            kind: Box::new(kind),
        }
    }
}

impl From<ethereum_rpc_format::Error> for Error {
    fn from(err: ethereum_rpc_format::Error) -> Self {
        ErrorKind::from(err).into()
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        ErrorKind::from(err).into()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in self.path() {
            match segment {
                PathSegment::Field(name) if first => write!(f, "{name}")?,
                PathSegment::Field(name) => write!(f, ".{name}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
            first = false;
        }
        if !first {
            f.write_str(": ")?;
        }
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&*self.kind)
    }
}

pub type Result<T> = StdResult<T, Error>;
