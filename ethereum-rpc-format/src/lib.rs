//! # Ethereum RPC Format
//!
//! Value types and hex codec for the Ethereum json-rpc wire format.
//!
//! Every integer on the wire is `0x`-prefixed minimal lowercase hex, every byte string is
//! `0x`-prefixed even length hex, and addresses are printed in their EIP-55 checksummed form.
//! The types here validate on construction so that a value that exists is always well formed.
//!
//! ## Key Types
//!
//! - [`FixedSizeData`] - exactly `N` bytes (hashes, topics, nonces, blooms)
//! - [`Address`] - 20 byte address with checksummed formatting
//! - [`Quantity`] - unsigned integer up to 256 bits
//! - [`Data`] - variable length bytes
//! - [`Hex`] - conversion to and from wire hex text
//!
//! ## Example
//!
//! ```
//! use ethereum_rpc_format::{Address, Hex, Quantity};
//!
//! let addr: Address = "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed".parse()?;
//! assert_eq!(addr.to_string(), "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
//!
//! let gas_price = Quantity::decode_hex("0x3b9aca00")?;
//! assert_eq!(gas_price, Quantity::from(1_000_000_000u64));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod types;

pub use alloy_primitives::U256;
pub use error::{Error, Result};
pub use types::hex::{
    bytes_from_hex, bytes_to_hex, int_from_hex, int_to_hex, u64_from_hex, u64_to_hex,
};
pub use types::{
    Address, Amount, BlockHash, BlockLabel, BlockNonce, Data, FixedSizeData, Hash, Hex, LogTopic,
    LogsBloom, Quantity, TransactionType, TrieHash, TxHash, UnclesHash,
};
