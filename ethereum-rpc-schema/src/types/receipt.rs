use ethereum_rpc_format::{Address, Amount, BlockHash, LogsBloom, TransactionType, TxHash};

use super::LogEntry;

crate::record! {
    /// Transaction receipt.
    pub struct TxReceipt {
        pub block_hash: BlockHash,
        pub block_number: u64,

        /// Address of the deployed contract, for a successful deployment.
        pub contract_address: Option<Address>,

        /// Gas used by this and all preceding transactions in the block.
        pub cumulative_gas_used: u64,

        /// Price per gas actually deducted from the sender.
        pub effective_gas_price: Amount,

        pub from_: Address,
        pub gas_used: u64,

        /// `None` for contract creation.
        pub to: Option<Address>,

        pub transaction_hash: TxHash,
        pub transaction_index: u64,
        pub type_: TransactionType,

        /// 1 on success, 0 on failure.
        pub status: u64,

        pub logs: Vec<LogEntry>,
        pub logs_bloom: LogsBloom,
    }
}

impl TxReceipt {
    pub fn succeeded(&self) -> bool {
        self.status == 1
    }
}
