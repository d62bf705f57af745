//! Bridge between JSON and [`Value`].
//!
//! JSON objects keep document order (`serde_json` is built with
//! `preserve_order`), so encoding JSON text is deterministic.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use thiserror::Error;

use crate::codec::encode_with_options;
use crate::error::EncodeError;
use crate::limits::EncodeOptions;
use crate::model::Value;

/// How JSON numbers map onto [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonNumbers {
    /// Every number becomes `Float64`.
    #[default]
    Float,
    /// Integral numbers become `Int` (or `UInt` above `i64::MAX`); the rest
    /// become `Float64`.
    Integer,
}

/// Error while turning JSON text into MessagePack.
#[derive(Debug, Error)]
pub enum JsonError {
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

impl Value {
    /// Converts a parsed JSON tree into a [`Value`].
    pub fn from_json(json: serde_json::Value, numbers: JsonNumbers) -> Value {
        match json {
            serde_json::Value::Null => Value::Nil,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match (numbers, n.as_i64(), n.as_u64()) {
                (JsonNumbers::Integer, Some(v), _) => Value::Int(v),
                (JsonNumbers::Integer, None, Some(v)) => Value::UInt(v),
                _ => Value::Float64(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => Value::Array(
                items
                    .into_iter()
                    .map(|item| Value::from_json(item, numbers))
                    .collect(),
            ),
            serde_json::Value::Object(obj) => Value::Map(
                obj.into_iter()
                    .map(|(k, v)| (k, Value::from_json(v, numbers)))
                    .collect(),
            ),
        }
    }
}

/// Parses JSON text into a [`Value`].
pub fn parse_json(text: &str, numbers: JsonNumbers) -> Result<Value, JsonError> {
    let json: serde_json::Value = serde_json::from_str(text)?;
    Ok(Value::from_json(json, numbers))
}

/// Parses JSON text and encodes it as MessagePack.
pub fn encode_json(
    text: &str,
    numbers: JsonNumbers,
    options: EncodeOptions,
) -> Result<Vec<u8>, JsonError> {
    let value = parse_json(text, numbers)?;
    Ok(encode_with_options(&value, options)?)
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Nil => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(v) => serializer.serialize_i64(*v),
            Value::UInt(v) => serializer.serialize_u64(*v),
            Value::Float32(v) => serializer.serialize_f32(*v),
            Value::Float64(v) => serializer.serialize_f64(*v),
            Value::Str(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode;

    #[test]
    fn test_numbers_default_to_float64() {
        let value = parse_json(r#"{"a": 1, "b": [2.5, -3]}"#, JsonNumbers::Float).unwrap();
        assert_eq!(
            value,
            Value::Map(vec![
                ("a".to_string(), Value::Float64(1.0)),
                (
                    "b".to_string(),
                    Value::Array(vec![Value::Float64(2.5), Value::Float64(-3.0)])
                ),
            ])
        );
    }

    #[test]
    fn test_integer_mode() {
        let value = parse_json("[1, -3, 18446744073709551615, 0.5]", JsonNumbers::Integer).unwrap();
        assert_eq!(
            value,
            Value::Array(vec![
                Value::Int(1),
                Value::Int(-3),
                Value::UInt(u64::MAX),
                Value::Float64(0.5),
            ])
        );
    }

    #[test]
    fn test_object_keeps_document_order() {
        let value = parse_json(r#"{"z": null, "a": true, "m": "x"}"#, JsonNumbers::Float).unwrap();
        let keys: Vec<&str> = value
            .as_map()
            .unwrap()
            .iter()
            .map(|(k, _)| k.as_str())
            .collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn test_encode_json_bytes() {
        let bytes = encode_json(r#"{"a": true}"#, JsonNumbers::Float, EncodeOptions::default())
            .unwrap();
        assert_eq!(bytes, [0x81, 0xa1, b'a', 0xc3]);

        let bytes = encode_json("1", JsonNumbers::Float, EncodeOptions::default()).unwrap();
        assert_eq!(bytes, [0xcb, 0x3f, 0xf0, 0, 0, 0, 0, 0, 0]);

        let bytes = encode_json("1", JsonNumbers::Integer, EncodeOptions::default()).unwrap();
        assert_eq!(bytes, [0x01]);
    }

    #[test]
    fn test_invalid_json() {
        let err = parse_json("{not json", JsonNumbers::Float).unwrap_err();
        assert!(matches!(err, JsonError::Parse(_)));
        assert!(err.to_string().starts_with("invalid JSON"));
    }

    #[test]
    fn test_encode_error_passes_through() {
        let options = EncodeOptions::new().with_max_depth(1);
        let err = encode_json("[[1]]", JsonNumbers::Float, options).unwrap_err();
        assert!(matches!(
            err,
            JsonError::Encode(EncodeError::DepthExceeded { max: 1 })
        ));
    }

    #[test]
    fn test_serialize_decoded_value() {
        let bytes = [
            0x82, 0xa1, b'b', 0x93, 0xc0, 0xc3, 0xcc, 0xff, 0xa1, b'a', 0xca, 0x3f, 0xc0, 0, 0,
        ];
        let (value, _) = decode(&bytes).unwrap();
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"b":[null,true,255],"a":1.5}"#);
    }

    #[test]
    fn test_serialize_non_finite_floats() {
        let value = Value::Array(vec![Value::Float64(f64::NAN), Value::Float32(f32::INFINITY)]);
        assert_eq!(serde_json::to_string(&value).unwrap(), "[null,null]");
    }

    #[test]
    fn test_integer_mode_number_boundaries() {
        let value = parse_json(
            "[-9223372036854775808, 9223372036854775807, 9223372036854775808, 1e3]",
            JsonNumbers::Integer,
        )
        .unwrap();
        assert_eq!(
            value,
            Value::Array(vec![
                Value::Int(i64::MIN),
                Value::Int(i64::MAX),
                Value::UInt(1 << 63),
                Value::Float64(1000.0),
            ])
        );
    }
}
