use ethereum_rpc_format::{
    Address, Amount, BlockHash, BlockNonce, Data, LogsBloom, Quantity, TrieHash, TxHash,
    UnclesHash,
};

use super::TxInfo;

crate::one_of! {
    /// Transactions of a block: full objects or hashes, depending on what was requested.
    pub enum BlockTransactions {
        Full(Vec<TxInfo>),
        Hashes(Vec<TxHash>),
    }
}

impl BlockTransactions {
    pub fn len(&self) -> usize {
        match self {
            Self::Full(txs) => txs.len(),
            Self::Hashes(hashes) => hashes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// An empty list is written as `[]` either way, so empty `Full` and `Hashes` are the same value.
impl PartialEq for BlockTransactions {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Full(a), Self::Full(b)) => a == b,
            (Self::Hashes(a), Self::Hashes(b)) => a == b,
            _ => self.is_empty() && other.is_empty(),
        }
    }
}

impl Eq for BlockTransactions {}

crate::record! {
    /// Block info, as returned by `eth_getBlockByNumber` and `eth_getBlockByHash`.
    pub struct BlockInfo {
        pub number: u64,

        /// `None` for pending blocks.
        pub hash_: Option<BlockHash>,

        pub parent_hash: BlockHash,

        /// `None` for pending blocks.
        pub nonce: Option<BlockNonce>,

        /// `None` for pending blocks.
        pub miner: Option<Address>,

        pub difficulty: Quantity,

        /// `None` for pending blocks.
        pub total_difficulty: Option<Quantity>,

        pub size: u64,
        pub gas_limit: u64,
        pub gas_used: u64,
        pub base_fee_per_gas: Amount,
        pub timestamp: u64,
        pub transactions: BlockTransactions,
        pub uncles: Vec<BlockHash>,
        pub sha3_uncles: UnclesHash,
        pub logs_bloom: Option<LogsBloom>,
        pub transactions_root: TrieHash,
        pub state_root: TrieHash,
        pub receipts_root: TrieHash,
        pub extra_data: Data,
    }
}
