use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Bool,
    Str,
    /// Hex encoded integer
    Int,
    /// Hex encoded variable length bytes
    Bytes,
}

/// Shape of a structurable type.
///
/// Every [`Structure`](crate::Structure) impl reports one of these. The composite variants are
/// handled by the generic recursion in this crate, the rest by the leaf value types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDesc {
    Primitive(Primitive),
    /// Exactly this many bytes, hex encoded.
    FixedBytes(usize),
    /// A value type with its own wire rules, such as an address or a block label.
    Leaf(&'static str),
    Optional(Box<TypeDesc>),
    /// Closed set of alternatives, tried in order.
    Union {
        name: &'static str,
        variants: Vec<TypeDesc>,
    },
    Sequence(Box<TypeDesc>),
    Tuple(Vec<TypeDesc>),
    Record {
        name: &'static str,
        /// Transaction type the record is bound to, if it is a tagged variant.
        tag: Option<u64>,
    },
}

impl fmt::Display for TypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(Primitive::Bool) => f.write_str("bool"),
            Self::Primitive(Primitive::Str) => f.write_str("string"),
            Self::Primitive(Primitive::Int) => f.write_str("hex integer"),
            Self::Primitive(Primitive::Bytes) => f.write_str("hex bytes"),
            Self::FixedBytes(len) => write!(f, "{len} hex bytes"),
            Self::Leaf(name) => f.write_str(name),
            Self::Optional(inner) => write!(f, "optional {inner}"),
            Self::Union { name, .. } => f.write_str(name),
            Self::Sequence(inner) => write!(f, "sequence of {inner}"),
            Self::Tuple(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(")")
            }
            Self::Record { name, tag: None } => write!(f, "{name} object"),
            Self::Record {
                name,
                tag: Some(tag),
            } => write!(f, "{name} object of type {tag}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Primitive, TypeDesc};

    #[test]
    fn test_display() {
        let desc = TypeDesc::Optional(Box::new(TypeDesc::Sequence(Box::new(TypeDesc::Tuple(
            vec![TypeDesc::Primitive(Primitive::Int), TypeDesc::FixedBytes(32)],
        )))));
        assert_eq!(
            desc.to_string(),
            "optional sequence of (hex integer, 32 hex bytes)"
        );
        assert_eq!(
            TypeDesc::Record {
                name: "Type2Transaction",
                tag: Some(2)
            }
            .to_string(),
            "Type2Transaction object of type 2"
        );
    }
}
