use ethereum_rpc_format::{Address, Amount, BlockHash, Data, Quantity, TransactionType, TxHash};

crate::record! {
    /// Transaction info, as returned by `eth_getTransactionByHash` and in full blocks.
    pub struct TxInfo {
        pub chain_id: u64,

        /// 0 for legacy transactions, 2 for EIP-1559 transactions.
        pub type_: TransactionType,

        pub hash_: TxHash,

        /// The data sent along with the transaction.
        pub input_: Option<Data>,

        /// `None` for pending transactions.
        pub block_hash: Option<BlockHash>,

        /// May be a pending block.
        pub block_number: u64,

        /// `None` for pending transactions.
        pub transaction_index: Option<u64>,

        pub from_: Address,

        /// `None` for contract creation.
        pub to: Option<Address>,

        pub value: Amount,

        pub nonce: u64,

        pub gas: u64,

        pub gas_price: Amount,

        /// Only for EIP-1559 transactions.
        pub max_fee_per_gas: Option<Amount>,

        /// Only for EIP-1559 transactions.
        pub max_priority_fee_per_gas: Option<Amount>,

        pub v: u64,
        pub r: Quantity,
        pub s: Quantity,
    }
}

crate::record! {
    #[tag = 2]
    /// EIP-1559 transaction fields, for signing and `eth_sendTransaction`.
    pub struct Type2Transaction {
        pub chain_id: u64,
        pub value: Amount,
        pub gas: u64,
        pub max_fee_per_gas: Amount,
        pub max_priority_fee_per_gas: Amount,
        pub nonce: u64,
        pub to: Option<Address> = None,
        pub data: Option<Data> = None,
    }
}
