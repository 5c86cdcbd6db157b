use ethereum_rpc_format::{Address, Amount, BlockHash, BlockLabel, Data, LogTopic};

crate::one_of! {
    /// Block parameter: a block number or a label.
    #[derive(PartialEq, Eq)]
    pub enum BlockRef {
        Number(u64),
        Label(BlockLabel),
    }
}

impl From<u64> for BlockRef {
    fn from(number: u64) -> Self {
        Self::Number(number)
    }
}

impl From<BlockLabel> for BlockRef {
    fn from(label: BlockLabel) -> Self {
        Self::Label(label)
    }
}

impl Default for BlockRef {
    fn default() -> Self {
        Self::Label(BlockLabel::Latest)
    }
}

crate::one_of! {
    /// Contract address filter: one address, or any of several.
    #[derive(PartialEq, Eq)]
    pub enum AddressFilter {
        One(Address),
        Many(Vec<Address>),
    }
}

crate::one_of! {
    /// Filter for one topic position: one topic, or any of several.
    #[derive(PartialEq, Eq)]
    pub enum TopicFilter {
        One(LogTopic),
        Any(Vec<LogTopic>),
    }
}

crate::record! {
    /// Transaction fields for `eth_call`.
    pub struct EthCallParams {
        pub to: Address,
        pub from_: Option<Address> = None,
        pub gas: Option<u64> = None,
        pub gas_price: u64 = 0,
        pub value: Amount = Amount::ZERO,
        pub data: Option<Data> = None,
    }
}

impl EthCallParams {
    pub fn new(to: Address) -> Self {
        Self {
            to,
            from_: None,
            gas: None,
            gas_price: 0,
            value: Amount::ZERO,
            data: None,
        }
    }
}

crate::record! {
    /// Transaction fields for `eth_estimateGas`.
    pub struct EstimateGasParams {
        pub from_: Address,
        pub to: Option<Address> = None,
        pub gas: Option<u64> = None,
        pub gas_price: u64 = 0,
        pub nonce: Option<u64> = None,
        pub value: Amount = Amount::ZERO,
        pub data: Option<Data> = None,
    }
}

impl EstimateGasParams {
    pub fn new(from_: Address) -> Self {
        Self {
            from_,
            to: None,
            gas: None,
            gas_price: 0,
            nonce: None,
            value: Amount::ZERO,
            data: None,
        }
    }
}

crate::record! {
    /// Filter parameters for `eth_getLogs` or `eth_newFilter`.
    #[derive(Default)]
    pub struct FilterParams {
        pub from_block: Option<BlockRef> = None,
        pub to_block: Option<BlockRef> = None,
        pub address: Option<AddressFilter> = None,
        /// `None` at a position matches any topic there.
        pub topics: Option<Vec<Option<TopicFilter>>> = None,
    }
}

crate::record! {
    /// Filter parameters for `eth_getLogs` pinned to one block (EIP-234).
    pub struct FilterParamsEip234 {
        pub block_hash: BlockHash,
        pub address: Option<AddressFilter> = None,
        pub topics: Option<Vec<Option<TopicFilter>>> = None,
    }
}

#[cfg(test)]
mod tests {
    use ethereum_rpc_format::{Address, BlockLabel, LogTopic};
    use serde_json::json;

    use super::*;
    use crate::{structure, unstructure};

    const ADDR: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

    #[test]
    fn test_call_params_defaults() {
        let params: EthCallParams = structure(&json!({"to": ADDR})).unwrap();
        assert_eq!(params, EthCallParams::new(ADDR.parse().unwrap()));

        // defaulted fields are still written out, absent optionals are not
        assert_eq!(
            unstructure(&params),
            json!({"to": ADDR, "gasPrice": "0x0", "value": "0x0"})
        );
    }

    #[test]
    fn test_estimate_gas_params() {
        let mut params = EstimateGasParams::new(Address::default());
        params.nonce = Some(9);
        params.data = Some(vec![0xa9, 0x05, 0x9c, 0xbb].into());
        let out = unstructure(&params);
        assert_eq!(
            out,
            json!({
                "from": "0x0000000000000000000000000000000000000000",
                "gasPrice": "0x0",
                "nonce": "0x9",
                "value": "0x0",
                "data": "0xa9059cbb",
            })
        );
        assert_eq!(structure::<EstimateGasParams>(&out).unwrap(), params);
    }

    #[test]
    fn test_filter_params() {
        let topic = format!("0x{}", "dd".repeat(32));
        let value = json!({
            "fromBlock": "0x10",
            "toBlock": "latest",
            "address": [ADDR, ADDR],
            "topics": [topic, null, [topic]],
        });
        let params: FilterParams = structure(&value).unwrap();
        let t = LogTopic::from([0xdd; 32]);
        let addr: Address = ADDR.parse().unwrap();
        assert_eq!(
            params,
            FilterParams {
                from_block: Some(BlockRef::Number(16)),
                to_block: Some(BlockRef::Label(BlockLabel::Latest)),
                address: Some(AddressFilter::Many(vec![addr.clone(), addr])),
                topics: Some(vec![
                    Some(TopicFilter::One(t.clone())),
                    None,
                    Some(TopicFilter::Any(vec![t])),
                ]),
            }
        );
        assert_eq!(unstructure(&params), value);
    }

    #[test]
    fn test_empty_filter() {
        assert_eq!(unstructure(&FilterParams::default()), json!({}));
        assert_eq!(
            structure::<FilterParams>(&json!({})).unwrap(),
            FilterParams::default()
        );
    }

    #[test]
    fn test_filter_eip234() {
        let hash = format!("0x{}", "01".repeat(32));
        let params: FilterParamsEip234 =
            structure(&json!({"blockHash": hash, "address": ADDR})).unwrap();
        assert_eq!(
            params.address,
            Some(AddressFilter::One(ADDR.parse().unwrap()))
        );
        assert!(structure::<FilterParamsEip234>(&json!({"address": ADDR})).is_err());
    }

    #[test]
    fn test_block_ref() {
        assert_eq!(BlockRef::default(), BlockRef::from(BlockLabel::Latest));
        assert_eq!(unstructure(&BlockRef::from(255u64)), json!("0xff"));
        assert_eq!(
            structure::<BlockRef>(&json!("finalized")).unwrap(),
            BlockRef::Label(BlockLabel::Finalized)
        );
    }
}
