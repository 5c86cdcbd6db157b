use crate::{Error, Result};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::result::Result as StdResult;
use std::str::FromStr;

/// Named block accepted wherever a json-rpc method takes a block parameter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockLabel {
    /// Most recent block in the canonical chain.
    #[default]
    Latest,
    /// Block being built on top of `Latest` from the local mempool.
    Pending,
    /// Most recent block considered safe from re-orgs.
    Safe,
    /// Most recent finalized block.
    Finalized,
    /// Lowest numbered block the node has available.
    Earliest,
}

impl BlockLabel {
    pub const ALL: [BlockLabel; 5] = [
        Self::Latest,
        Self::Pending,
        Self::Safe,
        Self::Finalized,
        Self::Earliest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::Pending => "pending",
            Self::Safe => "safe",
            Self::Finalized => "finalized",
            Self::Earliest => "earliest",
        }
    }
}

impl FromStr for BlockLabel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| Error::UnknownBlockLabel(s.to_owned()))
    }
}

impl fmt::Display for BlockLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct BlockLabelVisitor;

impl Visitor<'_> for BlockLabelVisitor {
    type Value = BlockLabel;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("block label string")
    }

    fn visit_str<E>(self, value: &str) -> StdResult<Self::Value, E>
    where
        E: de::Error,
    {
        BlockLabel::from_str(value).map_err(|e| E::custom(e.to_string()))
    }
}

impl<'de> Deserialize<'de> for BlockLabel {
    fn deserialize<D>(deserializer: D) -> StdResult<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(BlockLabelVisitor)
    }
}

impl Serialize for BlockLabel {
    fn serialize<S>(&self, serializer: S) -> StdResult<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::BlockLabel;
    use serde_test::{assert_de_tokens_error, assert_tokens, Token};

    #[test]
    fn test_serde() {
        assert_tokens(&BlockLabel::Latest, &[Token::Str("latest")]);
        assert_tokens(&BlockLabel::Pending, &[Token::Str("pending")]);
        assert_tokens(&BlockLabel::Safe, &[Token::Str("safe")]);
        assert_tokens(&BlockLabel::Finalized, &[Token::Str("finalized")]);
        assert_tokens(&BlockLabel::Earliest, &[Token::Str("earliest")]);
    }

    #[test]
    fn test_de_unknown() {
        assert_de_tokens_error::<BlockLabel>(
            &[Token::Str("Latest")],
            "Unknown block label: Latest",
        );
    }
}
