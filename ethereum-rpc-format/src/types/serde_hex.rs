//! Serde glue shared by the hex encoded value types: they serialize as the text produced by
//! their [`Hex`] impl and accept only a string on input.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};

use super::Hex;

struct HexVisitor<T> {
    what: &'static str,
    marker: PhantomData<T>,
}

impl<T: Hex> Visitor<'_> for HexVisitor<T> {
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "hex string for {}", self.what)
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        T::decode_hex(value).map_err(E::custom)
    }
}

pub fn serialize<T: Hex, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.encode_hex())
}

/// `what` names the value in the "expected ..." part of type errors.
pub fn deserialize<'de, T, D>(deserializer: D, what: &'static str) -> Result<T, D::Error>
where
    T: Hex,
    D: Deserializer<'de>,
{
    deserializer.deserialize_str(HexVisitor {
        what,
        marker: PhantomData,
    })
}

macro_rules! impl_hex_serde {
    ($ty:ty, $what:literal) => {
        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                $crate::types::serde_hex::serialize(self, serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                $crate::types::serde_hex::deserialize(deserializer, $what)
            }
        }
    };
}

pub(crate) use impl_hex_serde;

#[cfg(test)]
mod tests {
    use serde_test::{assert_de_tokens_error, assert_tokens, Token};

    use crate::{Data, FixedSizeData, Quantity, TransactionType};

    #[test]
    fn test_expecting_names_the_type() {
        assert_de_tokens_error::<Data>(
            &[Token::U64(1)],
            "invalid type: integer `1`, expected hex string for data",
        );
        assert_de_tokens_error::<Quantity>(
            &[Token::Bool(true)],
            "invalid type: boolean `true`, expected hex string for a quantity",
        );
        assert_de_tokens_error::<FixedSizeData<2>>(
            &[Token::U64(1)],
            "invalid type: integer `1`, expected hex string for fixed size data",
        );
    }

    #[test]
    fn test_codec_error_is_passed_through() {
        assert_de_tokens_error::<TransactionType>(
            &[Token::Str("2")],
            "Malformed hex string. Value was: \"2\"",
        );
        assert_tokens(&TransactionType::DYNAMIC_FEE, &[Token::Str("0x2")]);
    }
}
