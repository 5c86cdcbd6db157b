use super::hex::{bytes_from_hex, bytes_to_hex};
use super::Hex;
use crate::{Error, Result};
use alloy_primitives::FixedBytes;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::result::Result as StdResult;

use super::serde_hex;

/// Exactly `N` bytes. Hashes, topics, nonces and bloom filters are all of this shape.
#[derive(
    Clone,
    PartialEq,
    Eq,
    Hash,
    derive_more::From,
    derive_more::Into,
    derive_more::Deref,
    PartialOrd,
    Ord,
)]
pub struct FixedSizeData<const N: usize>(Box<[u8; N]>);

impl<const N: usize> FixedSizeData<N> {
    pub fn as_array(&self) -> &[u8; N] {
        &self.0
    }
}

impl<const N: usize> Default for FixedSizeData<N> {
    fn default() -> Self {
        Self(Box::new([0; N]))
    }
}

impl<const N: usize> From<&'_ FixedSizeData<N>> for FixedBytes<N> {
    fn from(data: &'_ FixedSizeData<N>) -> Self {
        Self::from(*data.0)
    }
}

impl<const N: usize> From<FixedBytes<N>> for FixedSizeData<N> {
    fn from(bytes: FixedBytes<N>) -> Self {
        Self(Box::new(bytes.0))
    }
}

impl<const N: usize> AsRef<[u8]> for FixedSizeData<N> {
    fn as_ref(&self) -> &[u8] {
        &*self.0
    }
}

impl<const N: usize> From<[u8; N]> for FixedSizeData<N> {
    fn from(buf: [u8; N]) -> Self {
        Self(Box::new(buf))
    }
}

impl<const N: usize> TryFrom<&[u8]> for FixedSizeData<N> {
    type Error = Error;

    fn try_from(buf: &[u8]) -> Result<FixedSizeData<N>> {
        let buf: [u8; N] = buf.try_into().map_err(|_| Error::UnexpectedLength {
            expected: N,
            got: buf.len(),
        })?;

        Ok(FixedSizeData(Box::new(buf)))
    }
}

impl<const N: usize> TryFrom<Vec<u8>> for FixedSizeData<N> {
    type Error = Error;

    fn try_from(buf: Vec<u8>) -> Result<FixedSizeData<N>> {
        let len = buf.len();
        let buf: Box<[u8; N]> = buf
            .into_boxed_slice()
            .try_into()
            .map_err(|_| Error::UnexpectedLength {
                expected: N,
                got: len,
            })?;

        Ok(FixedSizeData(buf))
    }
}

impl<const N: usize> Hex for FixedSizeData<N> {
    fn encode_hex(&self) -> String {
        bytes_to_hex(self.as_slice())
    }

    fn decode_hex(hex: &str) -> Result<Self> {
        let buf = bytes_from_hex(hex)?;
        Self::try_from(buf)
    }
}

impl<const N: usize> std::str::FromStr for FixedSizeData<N> {
    type Err = Error;

    fn from_str(s: &str) -> StdResult<Self, Self::Err> {
        Self::decode_hex(s)
    }
}

impl<const N: usize> fmt::Display for FixedSizeData<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode_hex())
    }
}

impl<'de, const N: usize> Deserialize<'de> for FixedSizeData<N> {
    fn deserialize<D>(deserializer: D) -> StdResult<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_hex::deserialize(deserializer, "fixed size data")
    }
}

impl<const N: usize> Serialize for FixedSizeData<N> {
    fn serialize<S>(&self, serializer: S) -> StdResult<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serde_hex::serialize(self, serializer)
    }
}

impl<const N: usize> fmt::Debug for FixedSizeData<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedSizeData<{}>({})", N, self.encode_hex())
    }
}
