// The leaf types carry their own serde impls, so they can be dropped into
// any serde-derived struct and keep the json-rpc wire rules.

use ethereum_rpc_format::*;

use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Withdrawal {
    index: Quantity,
    validator_index: Quantity,
    address: Address,
    amount: Quantity,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Header {
    hash: Hash,
    nonce: BlockNonce,
    miner: Address,
    extra_data: Data,
    #[serde(rename = "type")]
    kind: Option<TransactionType>,
    tag: BlockLabel,
}

const WITHDRAWAL: &str = r#"{
    "index": "0x1ad5b2c",
    "validatorIndex": "0x10e3b",
    "address": "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed",
    "amount": "0x11c6b83"
}"#;

#[test]
fn test_withdrawal_deserialize() {
    let w: Withdrawal = serde_json::from_str(WITHDRAWAL).unwrap();
    assert_eq!(w.index, Quantity::from(0x1ad5b2cu64));
    assert_eq!(w.amount, Quantity::from(0x11c6b83u64));

    let out = serde_json::to_value(&w).unwrap();
    assert_eq!(out["index"], "0x1ad5b2c");
    // addresses come back checksummed
    assert_eq!(out["address"], "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");

    let back: Withdrawal = serde_json::from_value(out).unwrap();
    assert_eq!(back, w);
}

#[test]
fn test_header_deserialize() {
    let json = format!(
        r#"{{
            "hash": "0x{}",
            "nonce": "0x0000000000000042",
            "miner": "0x0000000000000000000000000000000000000000",
            "extraData": "0x",
            "type": "0x2",
            "tag": "finalized"
        }}"#,
        "ab".repeat(32)
    );
    let header: Header = serde_json::from_str(&json).unwrap();
    assert_eq!(header.hash, Hash::from([0xab; 32]));
    assert_eq!(header.nonce, BlockNonce::from([0, 0, 0, 0, 0, 0, 0, 0x42]));
    assert_eq!(header.extra_data, Data::default());
    assert_eq!(header.kind, Some(TransactionType::DYNAMIC_FEE));
    assert_eq!(header.tag, BlockLabel::Finalized);
}

#[test]
fn test_bad_hash_length_fails() {
    let json = r#"{
        "hash": "0xabab",
        "nonce": "0x0000000000000042",
        "miner": "0x0000000000000000000000000000000000000000",
        "extraData": "0x",
        "type": null,
        "tag": "latest"
    }"#;
    let err = serde_json::from_str::<Header>(json).unwrap_err();
    assert!(err.to_string().contains("Unexpected length"));
}
