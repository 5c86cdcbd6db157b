//! Leaf handlers: values that are a single json scalar on the wire.

use ethereum_rpc_format::{
    u64_from_hex, u64_to_hex, Address, BlockLabel, Data, FixedSizeData, Hex, Quantity,
    TransactionType,
};
use serde_json::Value;

use crate::{Context, Error, Primitive, Result, Structure, TypeDesc};

fn expect_str<T: Structure>(value: &Value) -> Result<&str> {
    value
        .as_str()
        .ok_or_else(|| Error::unexpected_type(T::describe(), value))
}

/// Leaf whose wire form is the text produced by its [`Hex`] impl.
macro_rules! impl_hex_leaf {
    ($ty:ty, $desc:expr) => {
        impl Structure for $ty {
            fn describe() -> TypeDesc {
                $desc
            }

            fn structure(_cx: &mut Context, value: &Value) -> Result<Self> {
                let text = expect_str::<Self>(value)?;
                Ok(<$ty as Hex>::decode_hex(text)?)
            }

            fn unstructure(&self) -> Value {
                Value::String(self.encode_hex())
            }
        }
    };
}

impl_hex_leaf!(Quantity, TypeDesc::Primitive(Primitive::Int));
impl_hex_leaf!(Data, TypeDesc::Primitive(Primitive::Bytes));
impl_hex_leaf!(Address, TypeDesc::Leaf("address"));
impl_hex_leaf!(TransactionType, TypeDesc::Leaf("transaction type"));

impl<const N: usize> Structure for FixedSizeData<N> {
    fn describe() -> TypeDesc {
        TypeDesc::FixedBytes(N)
    }

    fn structure(_cx: &mut Context, value: &Value) -> Result<Self> {
        let text = expect_str::<Self>(value)?;
        Ok(Self::decode_hex(text)?)
    }

    fn unstructure(&self) -> Value {
        Value::String(self.encode_hex())
    }
}

impl Structure for u64 {
    fn describe() -> TypeDesc {
        TypeDesc::Primitive(Primitive::Int)
    }

    fn structure(_cx: &mut Context, value: &Value) -> Result<Self> {
        let text = expect_str::<Self>(value)?;
        Ok(u64_from_hex(text)?)
    }

    fn unstructure(&self) -> Value {
        Value::String(u64_to_hex(*self))
    }
}

impl Structure for bool {
    fn describe() -> TypeDesc {
        TypeDesc::Primitive(Primitive::Bool)
    }

    fn structure(_cx: &mut Context, value: &Value) -> Result<Self> {
        value
            .as_bool()
            .ok_or_else(|| Error::unexpected_type(Self::describe(), value))
    }

    fn unstructure(&self) -> Value {
        Value::Bool(*self)
    }
}

impl Structure for String {
    fn describe() -> TypeDesc {
        TypeDesc::Primitive(Primitive::Str)
    }

    fn structure(_cx: &mut Context, value: &Value) -> Result<Self> {
        expect_str::<Self>(value).map(ToOwned::to_owned)
    }

    fn unstructure(&self) -> Value {
        Value::String(self.clone())
    }
}

impl Structure for BlockLabel {
    fn describe() -> TypeDesc {
        TypeDesc::Leaf("block label")
    }

    fn structure(_cx: &mut Context, value: &Value) -> Result<Self> {
        let text = expect_str::<Self>(value)?;
        Ok(text.parse::<BlockLabel>()?)
    }

    fn unstructure(&self) -> Value {
        Value::String(self.as_str().to_owned())
    }
}
