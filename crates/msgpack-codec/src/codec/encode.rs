//! MessagePack encoding.
//!
//! Tags are chosen canonically: the smallest tag whose declared width holds
//! the value or length, and the payload written always matches that width.

use crate::codec::primitives::Writer;
use crate::codec::tags::*;
use crate::error::EncodeError;
use crate::limits::{EncodeOptions, MAX_FIXCONTAINER_LEN, MAX_FIXSTR_LEN, MAX_LEN};
use crate::model::Value;

/// Encodes a value to MessagePack bytes.
pub fn encode(value: &Value) -> Result<Vec<u8>, EncodeError> {
    encode_with_options(value, EncodeOptions::default())
}

/// Encodes a value to MessagePack bytes with the given options.
pub fn encode_with_options(value: &Value, options: EncodeOptions) -> Result<Vec<u8>, EncodeError> {
    let mut writer = Writer::new();
    encode_value(&mut writer, value, 0, &options)?;
    tracing::trace!(kind = value.kind(), len = writer.len(), "encoded value");
    Ok(writer.into_bytes())
}

/// Appends one value to the writer.
///
/// `depth` is the number of containers enclosing this value. On error the
/// writer may hold a partial encoding and should be discarded.
pub fn encode_value(
    writer: &mut Writer,
    value: &Value,
    depth: usize,
    options: &EncodeOptions,
) -> Result<(), EncodeError> {
    match value {
        Value::Nil => writer.write_byte(NIL),
        Value::Bool(false) => writer.write_byte(FALSE),
        Value::Bool(true) => writer.write_byte(TRUE),
        Value::Int(v) => encode_int(writer, *v),
        Value::UInt(v) => encode_uint(writer, *v),
        Value::Float32(v) => writer.write_tag_f32(FLOAT32, *v),
        Value::Float64(v) => writer.write_tag_f64(FLOAT64, *v),
        Value::Str(s) => encode_str(writer, s)?,
        Value::Array(items) => {
            check_depth(depth, options)?;
            encode_container_header(writer, items.len(), "array", FIXARRAY, ARRAY16, ARRAY32)?;
            for item in items {
                encode_value(writer, item, depth + 1, options)?;
            }
        }
        Value::Map(entries) => {
            check_depth(depth, options)?;
            encode_container_header(writer, entries.len(), "map", FIXMAP, MAP16, MAP32)?;
            for (key, value) in entries {
                encode_str(writer, key)?;
                encode_value(writer, value, depth + 1, options)?;
            }
        }
    }
    Ok(())
}

fn check_depth(depth: usize, options: &EncodeOptions) -> Result<(), EncodeError> {
    let max = options.effective_max_depth();
    if depth >= max {
        return Err(EncodeError::DepthExceeded { max });
    }
    Ok(())
}

fn encode_int(writer: &mut Writer, v: i64) {
    if (0..=POSITIVE_FIXINT_MAX as i64).contains(&v) {
        writer.write_byte(v as u8);
    } else if (-32..0).contains(&v) {
        writer.write_byte(NEGATIVE_FIXINT | (v as u8 & 0x1f));
    } else if let Ok(v) = i32::try_from(v) {
        writer.write_tag_i32(INT32, v);
    } else {
        writer.write_tag_i64(INT64, v);
    }
}

fn encode_uint(writer: &mut Writer, v: u64) {
    if let Ok(v) = u8::try_from(v) {
        writer.write_tag_u8(UINT8, v);
    } else if let Ok(v) = u16::try_from(v) {
        writer.write_tag_u16(UINT16, v);
    } else if let Ok(v) = u32::try_from(v) {
        writer.write_tag_u32(UINT32, v);
    } else {
        writer.write_tag_u64(UINT64, v);
    }
}

fn encode_str(writer: &mut Writer, s: &str) -> Result<(), EncodeError> {
    let len = s.len();
    if len <= MAX_FIXSTR_LEN {
        writer.write_byte(FIXSTR | len as u8);
    } else if len <= u8::MAX as usize {
        writer.write_tag_u8(STR8, len as u8);
    } else if len <= u16::MAX as usize {
        writer.write_tag_u16(STR16, len as u16);
    } else if len <= MAX_LEN {
        writer.write_tag_u32(STR32, len as u32);
    } else {
        return Err(EncodeError::RangeViolation {
            field: "str",
            len,
            max: MAX_LEN,
        });
    }
    writer.write_bytes(s.as_bytes());
    Ok(())
}

fn encode_container_header(
    writer: &mut Writer,
    len: usize,
    field: &'static str,
    fix_tag: u8,
    tag16: u8,
    tag32: u8,
) -> Result<(), EncodeError> {
    if len <= MAX_FIXCONTAINER_LEN {
        writer.write_byte(fix_tag | len as u8);
    } else if len <= u16::MAX as usize {
        writer.write_tag_u16(tag16, len as u16);
    } else if len <= MAX_LEN {
        writer.write_tag_u32(tag32, len as u32);
    } else {
        return Err(EncodeError::RangeViolation {
            field,
            len,
            max: MAX_LEN,
        });
    }
    Ok(())
}
