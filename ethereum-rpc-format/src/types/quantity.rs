use crate::{Error, Result};
use alloy_primitives::U256;
use std::fmt;

use super::hex::{int_from_hex, int_to_hex};
use super::serde_hex::impl_hex_serde;
use super::Hex;

/// Non-negative integer of up to 256 bits, written as minimal lowercase hex on the wire.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::From,
    derive_more::Into,
    derive_more::Deref,
)]
pub struct Quantity(U256);

impl Quantity {
    pub const ZERO: Quantity = Quantity(U256::ZERO);
}

impl From<u64> for Quantity {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<u128> for Quantity {
    fn from(value: u128) -> Self {
        Self(U256::from(value))
    }
}

impl TryFrom<i128> for Quantity {
    type Error = Error;

    fn try_from(value: i128) -> Result<Self> {
        let value = u128::try_from(value).map_err(|_| Error::NegativeValue(value))?;
        Ok(Self::from(value))
    }
}

impl TryFrom<i64> for Quantity {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        Self::try_from(i128::from(value))
    }
}

impl_hex_serde!(Quantity, "a quantity");

impl Hex for Quantity {
    fn encode_hex(&self) -> String {
        int_to_hex(self.0)
    }

    fn decode_hex(hex: &str) -> Result<Self> {
        int_from_hex(hex).map(Self)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
