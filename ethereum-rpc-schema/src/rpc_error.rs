use std::fmt;

use ethereum_rpc_format::{Data, Hex};
use serde_json::Value;

use crate::{Context, Error, Result, Structure, TypeDesc};

/// Error codes that providers are known to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RpcErrorCode {
    /// Reserved for implementation-defined server errors. See the message for details.
    ServerError,
    /// The json sent is not a valid request object.
    InvalidRequest,
    /// The method does not exist or is not available.
    MethodNotFound,
    /// Invalid method parameters.
    InvalidParameter,
    /// Contract execution failed. See the data for details.
    ExecutionError,
}

impl RpcErrorCode {
    pub const ALL: [RpcErrorCode; 5] = [
        Self::ServerError,
        Self::InvalidRequest,
        Self::MethodNotFound,
        Self::InvalidParameter,
        Self::ExecutionError,
    ];

    pub fn code(self) -> i64 {
        match self {
            Self::ServerError => -32000,
            Self::InvalidRequest => -32600,
            Self::MethodNotFound => -32601,
            Self::InvalidParameter => -32602,
            Self::ExecutionError => 3,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|known| known.code() == code)
    }
}

/// Json-rpc error code. Unlike every other integer on the wire it is a plain json number.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    derive_more::From,
    derive_more::Into,
    derive_more::Deref,
    derive_more::Display,
)]
pub struct ErrorCode(i64);

impl From<RpcErrorCode> for ErrorCode {
    fn from(code: RpcErrorCode) -> Self {
        Self(code.code())
    }
}

impl Structure for ErrorCode {
    fn describe() -> TypeDesc {
        TypeDesc::Leaf("json integer")
    }

    fn structure(_cx: &mut Context, value: &Value) -> Result<Self> {
        value
            .as_i64()
            .map(Self)
            .ok_or_else(|| Error::unexpected_type(Self::describe(), value))
    }

    fn unstructure(&self) -> Value {
        Value::from(self.0)
    }
}

crate::record! {
    /// The `"error": {"code": ..., "message": ..., "data": ...}` object of a json-rpc response.
    pub struct RpcError {
        pub code: ErrorCode,
        pub message: String,
        /// Hex encoded payload, e.g. revert data for execution errors.
        pub data: Option<Data> = None,
    }
}

impl RpcError {
    pub fn new(code: impl Into<ErrorCode>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            data: None,
        }
    }

    pub fn with_code(code: RpcErrorCode, message: impl Into<String>, data: Option<Data>) -> Self {
        Self {
            data,
            ..Self::new(code, message)
        }
    }

    /// `None` when the code is not one of [`RpcErrorCode`].
    pub fn parsed_code(&self) -> Option<RpcErrorCode> {
        RpcErrorCode::from_code(*self.code)
    }
}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RPC error {}: {}", self.code, self.message)?;
        match &self.data {
            Some(data) if !data.is_empty() => write!(f, " ({})", data.encode_hex()),
            _ => Ok(()),
        }
    }
}

impl std::error::Error for RpcError {}
