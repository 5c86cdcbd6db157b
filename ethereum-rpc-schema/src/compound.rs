//! Generic composite handlers. They know nothing about the element types and only recurse.

use arrayvec::ArrayVec;
use serde_json::Value;

use crate::{Context, Error, ErrorKind, Result, Structure, TypeDesc};

impl<T: Structure> Structure for Option<T> {
    fn describe() -> TypeDesc {
        TypeDesc::Optional(Box::new(T::describe()))
    }

    fn structure(cx: &mut Context, value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            value => cx.structure(value).map(Some),
        }
    }

    fn unstructure(&self) -> Value {
        match self {
            Some(inner) => inner.unstructure(),
            None => Value::Null,
        }
    }

    fn absent() -> Option<Self> {
        Some(None)
    }

    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

fn expect_array<T: Structure>(value: &Value) -> Result<&[Value]> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| Error::unexpected_type(T::describe(), value))
}

/// Structures every element in order, stopping at the first failure.
fn structure_elements<T, C>(cx: &mut Context, items: &[Value]) -> Result<C>
where
    T: Structure,
    C: FromIterator<T>,
{
    items
        .iter()
        .enumerate()
        .map(|(i, item)| cx.structure(item).map_err(|e| e.at_index(i)))
        .collect()
}

impl<T: Structure> Structure for Vec<T> {
    fn describe() -> TypeDesc {
        TypeDesc::Sequence(Box::new(T::describe()))
    }

    fn structure(cx: &mut Context, value: &Value) -> Result<Self> {
        let items = expect_array::<Self>(value)?;
        structure_elements(cx, items)
    }

    fn unstructure(&self) -> Value {
        Value::Array(self.iter().map(Structure::unstructure).collect())
    }
}

impl<T: Structure, const N: usize> Structure for ArrayVec<T, N> {
    fn describe() -> TypeDesc {
        TypeDesc::Sequence(Box::new(T::describe()))
    }

    fn structure(cx: &mut Context, value: &Value) -> Result<Self> {
        let items = expect_array::<Self>(value)?;
        if items.len() > N {
            return Err(ErrorKind::TooManyElements {
                max: N,
                got: items.len(),
            }
            .into());
        }
        structure_elements(cx, items)
    }

    fn unstructure(&self) -> Value {
        Value::Array(self.iter().map(Structure::unstructure).collect())
    }
}

macro_rules! impl_tuple {
    ($len:literal => $($name:ident $idx:tt),+) => {
        impl<$($name: Structure),+> Structure for ($($name,)+) {
            fn describe() -> TypeDesc {
                TypeDesc::Tuple(vec![$($name::describe()),+])
            }

            fn structure(cx: &mut Context, value: &Value) -> Result<Self> {
                let items = expect_array::<Self>(value)?;
                if items.len() != $len {
                    return Err(ErrorKind::ArityMismatch {
                        expected: $len,
                        got: items.len(),
                    }
                    .into());
                }
                Ok(($(
                    cx.structure::<$name>(&items[$idx]).map_err(|e| e.at_index($idx))?,
                )+))
            }

            fn unstructure(&self) -> Value {
                Value::Array(vec![$(self.$idx.unstructure()),+])
            }
        }
    };
}

impl_tuple!(1 => A 0);
impl_tuple!(2 => A 0, B 1);
impl_tuple!(3 => A 0, B 1, C 2);
impl_tuple!(4 => A 0, B 1, C 2, D 3);
