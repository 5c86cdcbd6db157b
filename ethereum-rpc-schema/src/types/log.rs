use arrayvec::ArrayVec;
use ethereum_rpc_format::{Address, BlockHash, Data, LogTopic, TxHash};

crate::record! {
    /// Log entry, as returned by `eth_getLogs` and inside receipts.
    pub struct LogEntry {
        /// `true` if the log was removed due to a chain reorganization.
        pub removed: bool,

        /// The contract address the log originated from.
        pub address: Address,

        /// ABI-packed non-indexed arguments of the event.
        pub data: Data,

        /// Indexed event fields. For a named event the first topic is the event selector.
        pub topics: ArrayVec<LogTopic, 4>,

        // Provider docs (Infura, Alchemy, Quicknode) say the fields below can be null for a
        // pending log. That was never observed, so they stay required.

        /// Position of the log in the block.
        pub log_index: u64,

        pub transaction_index: u64,

        pub transaction_hash: TxHash,

        pub block_hash: BlockHash,

        pub block_number: u64,
    }
}
