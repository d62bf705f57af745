//! MessagePack decoding.
//!
//! Recursive descent over the format-byte table. Every fixed-width field and
//! every length-prefixed payload is bounds-checked by the [`Reader`] before it
//! is consumed, and container nesting is capped by [`DecodeOptions::max_depth`].

use crate::codec::primitives::Reader;
use crate::codec::tags::*;
use crate::error::DecodeError;
use crate::limits::DecodeOptions;
use crate::model::Value;

/// Decodes the first value in `input`.
///
/// Returns the value and the number of bytes it occupied. Bytes after the
/// first complete value are not an error; compare the count with
/// `input.len()` to detect them, or use [`decode_exact`].
pub fn decode(input: &[u8]) -> Result<(Value, usize), DecodeError> {
    decode_with_options(input, DecodeOptions::default())
}

/// Decodes the first value in `input` with the given options.
pub fn decode_with_options(
    input: &[u8],
    options: DecodeOptions,
) -> Result<(Value, usize), DecodeError> {
    if input.is_empty() {
        return Err(DecodeError::EmptyInput);
    }
    let mut reader = Reader::new(input);
    let value = decode_value(&mut reader, 0, &options)?;
    let consumed = reader.position();
    tracing::trace!(kind = value.kind(), consumed, total = input.len(), "decoded value");
    Ok((value, consumed))
}

/// Decodes `input`, which must contain exactly one value.
pub fn decode_exact(input: &[u8]) -> Result<Value, DecodeError> {
    decode_exact_with_options(input, DecodeOptions::default())
}

/// Decodes `input`, which must contain exactly one value, with the given options.
pub fn decode_exact_with_options(
    input: &[u8],
    options: DecodeOptions,
) -> Result<Value, DecodeError> {
    let (value, consumed) = decode_with_options(input, options)?;
    if consumed != input.len() {
        return Err(DecodeError::TrailingBytes {
            consumed,
            total: input.len(),
        });
    }
    Ok(value)
}

/// Decodes one value at the reader's position.
///
/// `depth` is the number of containers enclosing this value.
pub fn decode_value(
    reader: &mut Reader<'_>,
    depth: usize,
    options: &DecodeOptions,
) -> Result<Value, DecodeError> {
    let byte = reader.read_byte("format byte")?;
    match byte {
        0x00..=POSITIVE_FIXINT_MAX => Ok(Value::Int(byte as i64)),
        NEGATIVE_FIXINT..=0xff => Ok(Value::Int((byte as i8) as i64)),
        FIXMAP..=FIXMAP_MAX => {
            let len = (byte & FIXCONTAINER_LEN_MASK) as usize;
            decode_map(reader, len, depth, options)
        }
        FIXARRAY..=FIXARRAY_MAX => {
            let len = (byte & FIXCONTAINER_LEN_MASK) as usize;
            decode_array(reader, len, depth, options)
        }
        FIXSTR..=FIXSTR_MAX => {
            let len = (byte & FIXSTR_LEN_MASK) as usize;
            reader.read_str(len, "fixstr payload").map(Value::Str)
        }
        NIL => Ok(Value::Nil),
        FALSE => Ok(Value::Bool(false)),
        TRUE => Ok(Value::Bool(true)),
        FLOAT32 => reader.read_f32("float32").map(Value::Float32),
        FLOAT64 => reader.read_f64("float64").map(Value::Float64),
        UINT8 => reader.read_byte("uint8").map(|v| Value::UInt(v.into())),
        UINT16 => reader.read_u16("uint16").map(|v| Value::UInt(v.into())),
        UINT32 => reader.read_u32("uint32").map(|v| Value::UInt(v.into())),
        UINT64 => reader.read_u64("uint64").map(Value::UInt),
        INT8 => reader.read_i8("int8").map(|v| Value::Int(v.into())),
        INT16 => reader.read_i16("int16").map(|v| Value::Int(v.into())),
        INT32 => reader.read_i32("int32").map(|v| Value::Int(v.into())),
        INT64 => reader.read_i64("int64").map(Value::Int),
        STR8 => {
            let len = reader.read_byte("str8 length")? as usize;
            reader.read_str(len, "str8 payload").map(Value::Str)
        }
        STR16 => {
            let len = reader.read_u16("str16 length")? as usize;
            reader.read_str(len, "str16 payload").map(Value::Str)
        }
        STR32 => {
            let len = reader.read_u32("str32 length")? as usize;
            reader.read_str(len, "str32 payload").map(Value::Str)
        }
        ARRAY16 => {
            let len = reader.read_u16("array16 length")? as usize;
            decode_array(reader, len, depth, options)
        }
        ARRAY32 => {
            let len = reader.read_u32("array32 length")? as usize;
            decode_array(reader, len, depth, options)
        }
        MAP16 => {
            let len = reader.read_u16("map16 length")? as usize;
            decode_map(reader, len, depth, options)
        }
        MAP32 => {
            let len = reader.read_u32("map32 length")? as usize;
            decode_map(reader, len, depth, options)
        }
        _ => Err(DecodeError::UnsupportedType { byte }),
    }
}

fn check_depth(depth: usize, options: &DecodeOptions) -> Result<(), DecodeError> {
    let max = options.effective_max_depth();
    if depth >= max {
        return Err(DecodeError::DepthExceeded { max });
    }
    Ok(())
}

fn decode_array(
    reader: &mut Reader<'_>,
    len: usize,
    depth: usize,
    options: &DecodeOptions,
) -> Result<Value, DecodeError> {
    check_depth(depth, options)?;
    // Every element takes at least one byte
    let mut items = Vec::with_capacity(len.min(reader.remaining_len()));
    for _ in 0..len {
        if reader.is_empty() {
            return Err(DecodeError::Truncated {
                context: "array element",
            });
        }
        items.push(decode_value(reader, depth + 1, options)?);
    }
    Ok(Value::Array(items))
}

fn decode_map(
    reader: &mut Reader<'_>,
    len: usize,
    depth: usize,
    options: &DecodeOptions,
) -> Result<Value, DecodeError> {
    check_depth(depth, options)?;
    // Every pair takes at least two bytes
    let mut entries = Vec::with_capacity(len.min(reader.remaining_len() / 2));
    for _ in 0..len {
        if reader.is_empty() {
            return Err(DecodeError::Truncated { context: "map key" });
        }
        let key = match decode_value(reader, depth + 1, options)? {
            Value::Str(key) => key,
            other => return Err(DecodeError::InvalidMapKey { kind: other.kind() }),
        };
        if reader.is_empty() {
            return Err(DecodeError::Truncated {
                context: "map value",
            });
        }
        let value = decode_value(reader, depth + 1, options)?;
        entries.push((key, value));
    }
    Ok(Value::Map(entries))
}
