//! The dynamic value tree carried by the codec.

use std::fmt;

/// A MessagePack value.
///
/// Maps are ordered sequences of string-keyed pairs. Insertion order is
/// preserved through decoding and encoding; duplicate keys are kept as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The nil value.
    Nil,

    /// Boolean value.
    Bool(bool),

    /// Signed integer. Fixints and the int8-int64 family decode to this.
    Int(i64),

    /// Unsigned integer. The uint8-uint64 family decodes to this.
    UInt(u64),

    /// 32-bit IEEE 754 float.
    Float32(f32),

    /// 64-bit IEEE 754 float.
    Float64(f64),

    /// UTF-8 text.
    Str(String),

    /// Ordered sequence of values.
    Array(Vec<Value>),

    /// Ordered sequence of string-keyed pairs.
    Map(Vec<(String, Value)>),
}

impl Value {
    /// Returns a static name for the variant, used in errors and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::UInt(_) => "uint",
            Value::Float32(_) => "float32",
            Value::Float64(_) => "float64",
            Value::Str(_) => "str",
            Value::Array(_) => "array",
            Value::Map(_) => "map",
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the value as i64 if it is an integer that fits.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            Value::UInt(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Returns the value as u64 if it is a non-negative integer.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Int(v) => u64::try_from(*v).ok(),
            Value::UInt(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as f64 for either float width.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float32(v) => Some(f64::from(*v)),
            Value::Float64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&[(String, Value)]> {
        match self {
            Value::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Looks up a map entry by key.
    ///
    /// Returns the first matching entry in stored order, or `None` if this is
    /// not a map or the key is absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_map()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("nil"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(v) => write!(f, "{}", v),
            Value::UInt(v) => write!(f, "{}", v),
            // Debug keeps the fractional part so floats never read as integers
            Value::Float32(v) => write!(f, "{:?}", v),
            Value::Float64(v) => write!(f, "{:?}", v),
            Value::Str(s) => write!(f, "{:?}", s),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{:?}: {}", key, value)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Value::Int(v.into())
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::Int(v.into())
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Value::UInt(v.into())
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Value::UInt(v.into())
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::UInt(v.into())
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::UInt(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float32(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Array(v)
    }
}

impl From<Vec<(String, Value)>> for Value {
    fn from(v: Vec<(String, Value)>) -> Self {
        Value::Map(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Nil, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_nested() {
        let value = Value::Map(vec![
            ("a".to_string(), Value::Array(vec![Value::Int(1), Value::Nil])),
            ("b".to_string(), Value::Float64(1.0)),
            ("c".to_string(), Value::from("x\"y")),
        ]);
        assert_eq!(
            value.to_string(),
            r#"{"a": [1, nil], "b": 1.0, "c": "x\"y"}"#
        );
    }

    #[test]
    fn test_display_scalars() {
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Int(-5).to_string(), "-5");
        assert_eq!(Value::UInt(u64::MAX).to_string(), "18446744073709551615");
        assert_eq!(Value::Float32(0.5).to_string(), "0.5");
        assert_eq!(Value::Map(vec![]).to_string(), "{}");
        assert_eq!(Value::Array(vec![]).to_string(), "[]");
    }

    #[test]
    fn test_get_returns_first_match() {
        let value = Value::Map(vec![
            ("k".to_string(), Value::Int(1)),
            ("k".to_string(), Value::Int(2)),
        ]);
        assert_eq!(value.get("k"), Some(&Value::Int(1)));
        assert_eq!(value.get("missing"), None);
        assert_eq!(Value::Nil.get("k"), None);
    }

    #[test]
    fn test_integer_accessors() {
        assert_eq!(Value::Int(-1).as_u64(), None);
        assert_eq!(Value::Int(7).as_u64(), Some(7));
        assert_eq!(Value::UInt(u64::MAX).as_i64(), None);
        assert_eq!(Value::UInt(9).as_i64(), Some(9));
        assert_eq!(Value::Str("9".to_string()).as_i64(), None);
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Value::from(3u8), Value::UInt(3));
        assert_eq!(Value::from(-3i32), Value::Int(-3));
        assert_eq!(Value::from(None::<i64>), Value::Nil);
        assert_eq!(Value::from(Some("x")), Value::Str("x".to_string()));
        assert_eq!(Value::from(2.5f64).as_f64(), Some(2.5));
        assert_eq!(Value::from(vec![Value::Nil]).kind(), "array");
    }
}
