use super::hex::{u64_from_hex, u64_to_hex};
use super::serde_hex::impl_hex_serde;
use super::Hex;
use crate::{Error, Result};

/// EIP-2718 transaction type, a small integer encoded as hex.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::From,
    derive_more::Into,
    derive_more::Deref,
)]
pub struct TransactionType(u8);

impl TransactionType {
    pub const LEGACY: Self = Self(0);
    /// EIP-2930
    pub const ACCESS_LIST: Self = Self(1);
    /// EIP-1559
    pub const DYNAMIC_FEE: Self = Self(2);
    /// EIP-4844
    pub const BLOB: Self = Self(3);
    /// EIP-7702
    pub const SET_CODE: Self = Self(4);
}

impl_hex_serde!(TransactionType, "a transaction type");

impl Hex for TransactionType {
    fn encode_hex(&self) -> String {
        u64_to_hex(self.0.into())
    }

    fn decode_hex(hex: &str) -> Result<Self> {
        let value = u64_from_hex(hex)?;

        u8::try_from(value)
            .map_err(|_| Error::IntegerOverflow {
                bits: 8,
                value: hex.to_owned(),
            })
            .map(Self)
    }
}
