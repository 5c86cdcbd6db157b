//! Records: json objects with a fixed set of named fields.
//!
//! Field names are declared once, in snake_case, and translated to the wire name with
//! [`to_wire_name`] in both directions.

use serde_json::{Map, Value};

use crate::{to_wire_name, Context, Error, ErrorKind, Result, Structure, TypeDesc};

/// Field level conversion of a record type. Usually generated by [`record!`](crate::record!).
pub trait Record: Sized {
    const NAME: &'static str;

    fn structure_fields(cx: &mut Context, fields: &Map<String, Value>) -> Result<Self>;

    /// Fields in declaration order.
    fn unstructure_fields(&self) -> Map<String, Value>;
}

pub fn expect_object(desc: impl FnOnce() -> TypeDesc, value: &Value) -> Result<&Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| Error::unexpected_type(desc(), value))
}

pub fn structure_record<R: Record + Structure>(cx: &mut Context, value: &Value) -> Result<R> {
    let fields = expect_object(R::describe, value)?;
    R::structure_fields(cx, fields)
}

pub fn unstructure_record<R: Record>(record: &R) -> Value {
    Value::Object(record.unstructure_fields())
}

/// Looks the field up under its wire name. Keys the record does not declare are ignored.
///
/// A missing field takes `default`, or the type's own absent value (`None` for optionals),
/// and fails with [`ErrorKind::MissingField`] otherwise.
pub fn structure_field<T: Structure>(
    cx: &mut Context,
    fields: &Map<String, Value>,
    name: &str,
    default: impl FnOnce() -> Option<T>,
) -> Result<T> {
    let wire = to_wire_name(name);

    match fields.get(wire.as_str()) {
        Some(value) => cx.structure(value).map_err(|e| e.at_field(wire)),
        None => default()
            .or_else(T::absent)
            .ok_or_else(|| ErrorKind::MissingField(wire).into()),
    }
}

/// Writes the field under its wire name.
///
/// An absent value is left out when the field has a declared default, and written as `null`
/// otherwise.
pub fn unstructure_field<T: Structure>(
    fields: &mut Map<String, Value>,
    name: &str,
    value: &T,
    has_default: bool,
) {
    if has_default && value.is_absent() {
        return;
    }
    fields.insert(to_wire_name(name), value.unstructure());
}

/// Declares a record struct and its [`Structure`] impl.
///
/// Fields may carry a default (`pub gas_price: u64 = 0`) used when the field is missing on
/// input. An optional field declared `= None` is left out of the output while it is `None`;
/// an optional field without a default is nullable and written as `null`. A leading `#[tag = N]` makes the record a tagged transaction variant, see
/// [`crate::typed_tx`].
///
/// ```
/// use ethereum_rpc_schema::{record, structure, unstructure, Address};
/// use serde_json::json;
///
/// record! {
///     pub struct Transfer {
///         pub from_: Address,
///         pub gas_limit: u64 = 21000,
///     }
/// }
///
/// let transfer: Transfer =
///     structure(&json!({"from": "0x0000000000000000000000000000000000000000"}))?;
/// assert_eq!(transfer.gas_limit, 21000);
/// assert_eq!(unstructure(&transfer)["gasLimit"], "0x5208");
/// # Ok::<(), ethereum_rpc_schema::Error>(())
/// ```
#[macro_export]
macro_rules! record {
    (
        @define
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $ty:ty $(= $default:expr)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        $vis struct $name {
            $(
                $(#[$fmeta])*
                $fvis $field: $ty,
            )*
        }

        impl $crate::Record for $name {
            const NAME: &'static str = stringify!($name);

            fn structure_fields(
                cx: &mut $crate::Context,
                fields: &$crate::Map<String, $crate::Value>,
            ) -> $crate::Result<Self> {
                Ok(Self {
                    $(
                        $field: $crate::record::structure_field(
                            cx,
                            fields,
                            stringify!($field),
                            || $crate::record!(@default $($default)?),
                        )?,
                    )*
                })
            }

            fn unstructure_fields(&self) -> $crate::Map<String, $crate::Value> {
                #[allow(unused_mut)]
                let mut fields = $crate::Map::new();
                $(
                    $crate::record::unstructure_field(
                        &mut fields,
                        stringify!($field),
                        &self.$field,
                        $crate::record!(@has_default $($default)?),
                    );
                )*
                fields
            }
        }
    };
    (@default) => { None };
    (@default $default:expr) => { Some($default) };
    (@has_default) => { false };
    (@has_default $default:expr) => { true };
    (
        #[tag = $tag:literal]
        $(#[$meta:meta])*
        $vis:vis struct $name:ident $body:tt
    ) => {
        $crate::record!(@define $(#[$meta])* $vis struct $name $body);

        impl $crate::Structure for $name {
            fn describe() -> $crate::TypeDesc {
                $crate::typed_tx::tagged_desc::<Self>($tag)
            }

            fn structure(cx: &mut $crate::Context, value: &$crate::Value) -> $crate::Result<Self> {
                $crate::typed_tx::structure_tagged(cx, value, $tag)
            }

            fn unstructure(&self) -> $crate::Value {
                $crate::typed_tx::unstructure_tagged(self, $tag)
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident $body:tt
    ) => {
        $crate::record!(@define $(#[$meta])* $vis struct $name $body);

        impl $crate::Structure for $name {
            fn describe() -> $crate::TypeDesc {
                $crate::TypeDesc::Record {
                    name: stringify!($name),
                    tag: None,
                }
            }

            fn structure(cx: &mut $crate::Context, value: &$crate::Value) -> $crate::Result<Self> {
                $crate::record::structure_record(cx, value)
            }

            fn unstructure(&self) -> $crate::Value {
                $crate::record::unstructure_record(self)
            }
        }
    };
}
