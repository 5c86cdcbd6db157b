mod address;
mod block_label;
mod data;
mod fixed_size_data;
pub mod hex;
mod quantity;
mod serde_hex;
mod transaction_type;
mod util;

pub use address::Address;
pub use block_label::BlockLabel;
pub use data::Data;
pub use fixed_size_data::FixedSizeData;
pub use hex::Hex;
pub use quantity::Quantity;
pub use transaction_type::TransactionType;

/// EVM hash is 32 bytes of data
pub type Hash = FixedSizeData<32>;

/// Log topic (32 bytes)
pub type LogTopic = FixedSizeData<32>;

/// Block hash (32 bytes)
pub type BlockHash = FixedSizeData<32>;

/// Transaction hash (32 bytes)
pub type TxHash = FixedSizeData<32>;

/// Trie root hash (32 bytes)
pub type TrieHash = FixedSizeData<32>;

/// Hash of the block uncles (32 bytes)
pub type UnclesHash = FixedSizeData<32>;

/// Block nonce (8 bytes)
pub type BlockNonce = FixedSizeData<8>;

/// Logs bloom filter (256 bytes)
pub type LogsBloom = FixedSizeData<256>;

/// Funds and prices in wei
pub type Amount = Quantity;
