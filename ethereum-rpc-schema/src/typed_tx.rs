//! Tagged transaction variants.
//!
//! A tagged record is an ordinary record whose json object also carries a `type` field naming
//! the transaction type. The field is not part of the record itself: it is checked before any
//! other field is looked at, and written after the rest of the object has been built.

use serde_json::{Map, Value};

use crate::record::expect_object;
use crate::{Context, ErrorKind, Record, Result, Structure, TypeDesc};

pub const TYPE_FIELD: &str = "type";

pub fn structure_tagged<R: Record + Structure>(
    cx: &mut Context,
    value: &Value,
    tag: u64,
) -> Result<R> {
    let fields = expect_object(R::describe, value)?;

    let raw = fields
        .get(TYPE_FIELD)
        .ok_or_else(|| ErrorKind::MissingField(TYPE_FIELD.to_owned()))?;
    let actual: u64 = cx.structure(raw).map_err(|e| e.at_field(TYPE_FIELD))?;

    if actual != tag {
        return Err(ErrorKind::VariantMismatch {
            expected: tag,
            actual,
        }
        .into());
    }

    R::structure_fields(cx, fields)
}

pub fn unstructure_tagged<R: Record>(record: &R, tag: u64) -> Value {
    let fields = record.unstructure_fields();
    attach_discriminator(fields, tag)
}

fn attach_discriminator(mut fields: Map<String, Value>, tag: u64) -> Value {
    fields.insert(TYPE_FIELD.to_owned(), tag.unstructure());
    Value::Object(fields)
}

/// Descriptor reported by tagged records.
pub fn tagged_desc<R: Record>(tag: u64) -> TypeDesc {
    TypeDesc::Record {
        name: R::NAME,
        tag: Some(tag),
    }
}
