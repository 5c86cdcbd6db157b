use crate::Result;

use super::hex::{bytes_from_hex, bytes_to_hex};
use super::serde_hex::impl_hex_serde;
use super::Hex;

/// Variable length byte string: call data, log data, extra data, error payloads.
#[derive(
    Debug,
    Default,
    Clone,
    PartialEq,
    Eq,
    Hash,
    derive_more::From,
    derive_more::Into,
    derive_more::Deref,
)]
pub struct Data(Box<[u8]>);

impl AsRef<[u8]> for Data {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Data {
    fn from(buf: Vec<u8>) -> Self {
        Self(buf.into())
    }
}

impl From<&[u8]> for Data {
    fn from(buf: &[u8]) -> Self {
        Self(buf.into())
    }
}

impl<const N: usize> From<[u8; N]> for Data {
    fn from(buf: [u8; N]) -> Self {
        Self(buf.into())
    }
}

impl_hex_serde!(Data, "data");

impl Hex for Data {
    fn encode_hex(&self) -> String {
        bytes_to_hex(&self.0)
    }

    fn decode_hex(hex: &str) -> Result<Self> {
        bytes_from_hex(hex).map(Self::from)
    }
}
