use crate::{Error, Result};

/// Text without the `0x` prefix is malformed like any other bad hex.
pub fn strip_hex_prefix(value: &str) -> Result<&str> {
    value
        .strip_prefix("0x")
        .ok_or_else(|| Error::MalformedHex(value.to_owned()))
}

/// Decodes the digits that follow the `0x` prefix of `original`.
pub fn decode_digits(digits: &str, original: &str) -> Result<Vec<u8>> {
    if digits.len() % 2 != 0 {
        return Err(Error::MalformedHex(original.to_owned()));
    }

    let mut dst = vec![0; digits.len() / 2];

    faster_hex::hex_decode(digits.as_bytes(), &mut dst)
        .map_err(|_| Error::MalformedHex(original.to_owned()))?;

    Ok(dst)
}

/// Big endian bytes to the shortest `0x` hex form, `"0x0"` when all bytes are zero.
pub fn encode_minimal_hex(buf: &[u8]) -> String {
    let hex_val = faster_hex::hex_string(buf);

    match hex_val.find(|c| c != '0') {
        Some(idx) => format!("0x{}", &hex_val[idx..]),
        None => "0x0".into(),
    }
}
