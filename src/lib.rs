//! Re-export of the crates we use to talk to Ethereum JSON-RPC providers.
//!
//! Hex encoded leaf values (Quantity, Data, Address, hashes, etc) live in `ethereum-rpc-format`.
//! Records for provider payloads (blocks, transactions, receipts, logs, call and filter
//! parameters, errors) and the machinery that converts them to and from json live in
//! `ethereum-rpc-schema`.
//!
//! ```
//! use ethereum_rpc::schema::{structure, TxReceipt, Value};
//!
//! fn status(json: &Value) -> Option<bool> {
//!     let receipt: TxReceipt = structure(json).ok()?;
//!     Some(receipt.succeeded())
//! }
//!
//! assert_eq!(status(&Value::Null), None);
//! ```

pub use ethereum_rpc_format as format;
pub use ethereum_rpc_schema as schema;
