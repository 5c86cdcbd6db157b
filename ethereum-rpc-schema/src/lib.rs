//! # Ethereum RPC Schema
//!
//! Typed records for Ethereum json-rpc payloads, and the engine that converts them to and from
//! json values.
//!
//! Converting json into a typed value is called structuring, the reverse unstructuring. Both
//! are driven by the [`Structure`] trait: leaf types map to single json scalars, composites
//! (optionals, sequences, tuples, unions, records) recurse into their parts. Record field names
//! are declared in snake_case and translated to camelCase on the wire.
//!
//! Structuring errors carry the path to the value that failed, for example
//! `transactions[2].value: Malformed hex string. Value was: "0xg"`.
//!
//! ## Example
//!
//! ```
//! use ethereum_rpc_schema::{structure, unstructure, BlockRef, FilterParams};
//! use serde_json::json;
//!
//! let filter: FilterParams = structure(&json!({"fromBlock": "0x10", "toBlock": "latest"}))?;
//! assert_eq!(filter.from_block, Some(BlockRef::Number(16)));
//! assert_eq!(unstructure(&filter), json!({"fromBlock": "0x10", "toBlock": "latest"}));
//! # Ok::<(), ethereum_rpc_schema::Error>(())
//! ```

mod compound;
mod config;
mod desc;
mod error;
mod leaf;
mod naming;
pub mod record;
mod rpc_error;
mod structurer;
pub mod typed_tx;
mod types;
mod union;

pub use config::StructurerConfig;
pub use desc::{Primitive, TypeDesc};
pub use error::{Error, ErrorKind, PathSegment, Result};
pub use naming::to_wire_name;
pub use record::Record;
pub use rpc_error::{ErrorCode, RpcError, RpcErrorCode};
pub use structurer::{structure, unstructure, Context, Structure, Structurer, STRUCTURER};
pub use types::{
    AddressFilter, BlockInfo, BlockRef, BlockTransactions, EstimateGasParams, EthCallParams,
    FilterParams, FilterParamsEip234, LogEntry, TopicFilter, TxInfo, TxReceipt, Type2Transaction,
};

pub use ethereum_rpc_format::{
    Address, Amount, BlockHash, BlockLabel, BlockNonce, Data, FixedSizeData, Hash, LogTopic,
    LogsBloom, Quantity, TransactionType, TrieHash, TxHash, UnclesHash,
};
pub use serde_json::{Map, Value};
