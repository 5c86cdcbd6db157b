//! Closed unions of alternative shapes, such as "a block number or a block label".

/// Declares an enum whose variants each wrap one structurable type.
///
/// Structuring tries the variants in declaration order and keeps the first that succeeds.
/// Unstructuring just follows the variant the value holds.
///
/// Only `Debug` and `Clone` are derived. Variants whose wire forms overlap may need an equality
/// that is looser than the derived one, so `PartialEq` is left to the caller.
#[macro_export]
macro_rules! one_of {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident($ty:ty)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant($ty),
            )+
        }

        impl $crate::Structure for $name {
            fn describe() -> $crate::TypeDesc {
                $crate::TypeDesc::Union {
                    name: stringify!($name),
                    variants: vec![$(<$ty as $crate::Structure>::describe()),+],
                }
            }

            fn structure(cx: &mut $crate::Context, value: &$crate::Value) -> $crate::Result<Self> {
                let mut attempts = Vec::new();
                $(
                    match cx.structure::<$ty>(value) {
                        Ok(inner) => return Ok(Self::$variant(inner)),
                        Err(e) if e.is_too_deep() => return Err(e),
                        Err(e) => attempts.push(e),
                    }
                )+
                Err($crate::ErrorKind::NoMatchingVariant {
                    union: stringify!($name),
                    attempts,
                }
                .into())
            }

            fn unstructure(&self) -> $crate::Value {
                match self {
                    $(Self::$variant(inner) => $crate::Structure::unstructure(inner),)+
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use ethereum_rpc_format::{BlockLabel, Hash};
    use serde_json::json;

    use crate::{structure, unstructure, ErrorKind};

    crate::one_of! {
        #[derive(PartialEq, Eq)]
        enum NumberOrLabel {
            Number(u64),
            Label(BlockLabel),
        }
    }

    crate::one_of! {
        #[derive(PartialEq, Eq)]
        enum Overlapping {
            Wide(Vec<Hash>),
            Narrow(Vec<u64>),
        }
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(
            structure::<NumberOrLabel>(&json!("0x10")).unwrap(),
            NumberOrLabel::Number(16)
        );
        assert_eq!(
            structure::<NumberOrLabel>(&json!("pending")).unwrap(),
            NumberOrLabel::Label(BlockLabel::Pending)
        );
        // both variants accept an empty list, declaration order decides
        assert_eq!(
            structure::<Overlapping>(&json!([])).unwrap(),
            Overlapping::Wide(vec![])
        );
    }

    #[test]
    fn test_unstructure_follows_variant() {
        assert_eq!(unstructure(&NumberOrLabel::Number(16)), json!("0x10"));
        assert_eq!(
            unstructure(&NumberOrLabel::Label(BlockLabel::Safe)),
            json!("safe")
        );
    }

    #[test]
    fn test_no_matching_variant() {
        let err = structure::<NumberOrLabel>(&json!("soon")).unwrap_err();
        match err.kind() {
            ErrorKind::NoMatchingVariant { union, attempts } => {
                assert_eq!(*union, "NumberOrLabel");
                assert_eq!(attempts.len(), 2);
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(err.to_string().starts_with("no variant of NumberOrLabel matched ("));
    }
}
