use alloy_primitives::U256;

use super::util::{decode_digits, encode_minimal_hex, strip_hex_prefix};
use crate::{Error, Result};

/// Conversion to and from the `0x`-prefixed hex text used on the json-rpc wire.
pub trait Hex: Sized {
    fn encode_hex(&self) -> String;
    fn decode_hex(hex: &str) -> Result<Self>;
}

/// Parses `0x` followed by at least one hex digit, in either case.
pub fn int_from_hex(value: &str) -> Result<U256> {
    let digits = strip_hex_prefix(value)?;

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::MalformedHex(value.to_owned()));
    }

    U256::from_str_radix(digits, 16).map_err(|_| Error::IntegerOverflow {
        bits: 256,
        value: value.to_owned(),
    })
}

pub fn u64_from_hex(value: &str) -> Result<u64> {
    let int = int_from_hex(value)?;

    u64::try_from(int).map_err(|_| Error::IntegerOverflow {
        bits: 64,
        value: value.to_owned(),
    })
}

/// Lowercase hex without leading zeros, `"0x0"` for zero.
pub fn int_to_hex(value: U256) -> String {
    encode_minimal_hex(&value.to_be_bytes::<32>())
}

pub fn u64_to_hex(value: u64) -> String {
    encode_minimal_hex(&value.to_be_bytes())
}

/// Parses `0x` followed by an even number of hex digits. `"0x"` is the empty byte string.
pub fn bytes_from_hex(value: &str) -> Result<Vec<u8>> {
    let digits = strip_hex_prefix(value)?;
    decode_digits(digits, value)
}

pub fn bytes_to_hex(buf: &[u8]) -> String {
    format!("0x{}", faster_hex::hex_string(buf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use hex_literal::hex;

    #[test]
    fn test_int_from_hex() {
        assert_eq!(int_from_hex("0x0").unwrap(), U256::ZERO);
        assert_eq!(int_from_hex("0x1f").unwrap(), U256::from(31));
        assert_eq!(int_from_hex("0xFF").unwrap(), U256::from(255));
        assert_eq!(int_from_hex("0x00ff").unwrap(), U256::from(255));
    }

    #[test]
    fn test_int_from_hex_malformed() {
        assert!(matches!(int_from_hex("0x"), Err(Error::MalformedHex(_))));
        assert!(matches!(int_from_hex("0xg1"), Err(Error::MalformedHex(_))));
        assert!(matches!(int_from_hex("0x-1"), Err(Error::MalformedHex(_))));
        assert_eq!(int_from_hex("12"), Err(Error::MalformedHex("12".into())));
        assert!(matches!(int_from_hex(""), Err(Error::MalformedHex(_))));
        assert!(matches!(int_from_hex("0X12"), Err(Error::MalformedHex(_))));
    }

    #[test]
    fn test_int_from_hex_overflow() {
        let too_big = format!("0x1{}", "0".repeat(64));
        assert!(matches!(
            int_from_hex(&too_big),
            Err(Error::IntegerOverflow { bits: 256, .. })
        ));
        assert!(matches!(
            u64_from_hex("0x10000000000000000"),
            Err(Error::IntegerOverflow { bits: 64, .. })
        ));
        assert_eq!(u64_from_hex("0xffffffffffffffff").unwrap(), u64::MAX);
    }

    #[test]
    fn test_int_to_hex() {
        assert_eq!(int_to_hex(U256::ZERO), "0x0");
        assert_eq!(int_to_hex(U256::from(1)), "0x1");
        assert_eq!(int_to_hex(U256::from(0x4200)), "0x4200");
        assert_eq!(int_to_hex(U256::MAX), format!("0x{}", "f".repeat(64)));
        assert_eq!(u64_to_hex(0), "0x0");
        assert_eq!(u64_to_hex(19), "0x13");
    }

    #[test]
    fn test_int_hex_round_trip() {
        for n in [0u64, 1, 15, 16, 255, 256, 1 << 32, u64::MAX] {
            assert_eq!(u64_from_hex(&u64_to_hex(n)).unwrap(), n);
            assert_eq!(int_from_hex(&int_to_hex(U256::from(n))).unwrap(), U256::from(n));
        }
        let big = U256::from(u64::MAX) * U256::from(u64::MAX);
        assert_eq!(int_from_hex(&int_to_hex(big)).unwrap(), big);
    }

    #[test]
    fn test_bytes_from_hex() {
        assert_eq!(bytes_from_hex("0x").unwrap(), Vec::<u8>::new());
        assert_eq!(bytes_from_hex("0x00ff10").unwrap(), hex!("00ff10").to_vec());
        assert_eq!(bytes_from_hex("0xABcd").unwrap(), hex!("abcd").to_vec());
    }

    #[test]
    fn test_bytes_from_hex_malformed() {
        assert!(matches!(bytes_from_hex("0x123"), Err(Error::MalformedHex(_))));
        assert!(matches!(bytes_from_hex("0xzz"), Err(Error::MalformedHex(_))));
        assert_eq!(bytes_from_hex("abcd"), Err(Error::MalformedHex("abcd".into())));
    }

    #[test]
    fn test_bytes_hex_round_trip() {
        let cases: [&[u8]; 4] = [&[], &[0], &hex!("0000ff"), &hex!("deadbeef00")];
        for buf in cases {
            let encoded = bytes_to_hex(buf);
            assert_eq!(encoded, encoded.to_lowercase());
            assert_eq!(bytes_from_hex(&encoded).unwrap(), buf);
        }
    }
}
