use std::fmt;
use std::result::Result as StdResult;

use super::serde_hex::impl_hex_serde;
use super::{FixedSizeData, Hex};
use crate::{Error, Result};

/// 20 byte account address.
///
/// Parsing accepts hex in any letter case. Output is always the EIP-55 checksummed form, which
/// is derived from the bytes on every call and never stored.
#[derive(
    Default,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::From,
    derive_more::Into,
    derive_more::Deref,
)]
pub struct Address(FixedSizeData<20>);

impl Address {
    pub fn to_checksum(&self) -> String {
        alloy_primitives::Address::new(*self.0.as_array()).to_checksum(None)
    }
}

impl From<[u8; 20]> for Address {
    fn from(buf: [u8; 20]) -> Self {
        Self(buf.into())
    }
}

impl From<alloy_primitives::Address> for Address {
    fn from(addr: alloy_primitives::Address) -> Self {
        Self(addr.0.into())
    }
}

impl From<&'_ Address> for alloy_primitives::Address {
    fn from(addr: &'_ Address) -> Self {
        Self::new(*addr.0.as_array())
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = Error;

    fn try_from(buf: &[u8]) -> Result<Self> {
        FixedSizeData::try_from(buf).map(Self)
    }
}

impl TryFrom<Vec<u8>> for Address {
    type Error = Error;

    fn try_from(buf: Vec<u8>) -> Result<Self> {
        FixedSizeData::try_from(buf).map(Self)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl Hex for Address {
    fn encode_hex(&self) -> String {
        self.to_checksum()
    }

    fn decode_hex(hex: &str) -> Result<Self> {
        FixedSizeData::decode_hex(hex).map(Self)
    }
}

impl std::str::FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> StdResult<Self, Self::Err> {
        Self::decode_hex(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_checksum())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_checksum())
    }
}

impl_hex_serde!(Address, "a 20 byte address");
