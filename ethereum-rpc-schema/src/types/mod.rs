mod block;
mod log;
mod params;
mod receipt;
mod transaction;

pub use block::{BlockInfo, BlockTransactions};
pub use log::LogEntry;
pub use params::{
    AddressFilter, BlockRef, EstimateGasParams, EthCallParams, FilterParams, FilterParamsEip234,
    TopicFilter,
};
pub use receipt::TxReceipt;
pub use transaction::{TxInfo, Type2Transaction};
