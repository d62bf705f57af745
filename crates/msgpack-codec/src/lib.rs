//! MessagePack codec over a closed, dynamically-typed value tree.
//!
//! This crate provides a decoder that parses MessagePack bytes into a
//! [`Value`] and an encoder that serializes a [`Value`] back into
//! MessagePack bytes.
//!
//! # Quick Start
//!
//! ```rust
//! use msgpack_codec::{decode, encode, Value};
//!
//! let value = Value::Map(vec![
//!     ("name".to_string(), Value::from("Alice")),
//!     ("tags".to_string(), Value::Array(vec![Value::Int(1), Value::Int(2)])),
//! ]);
//!
//! // Encode to binary
//! let bytes = encode(&value).unwrap();
//!
//! // Decode back
//! let (decoded, consumed) = decode(&bytes).unwrap();
//! assert_eq!(decoded, value);
//! assert_eq!(consumed, bytes.len());
//! ```
//!
//! # Modules
//!
//! - [`model`]: The [`Value`] tagged union
//! - [`codec`]: Binary encoding/decoding
//! - [`error`]: Error types
//! - [`limits`]: Security limits and codec options
//! - `json`: Bridge between `serde_json` values and [`Value`] (feature `json`)
//!
//! # Security
//!
//! The decoder is designed to safely handle untrusted input:
//! - Every fixed-width and length-prefixed read is bounds-checked
//! - Container nesting is capped by a configurable maximum depth
//! - Declared container lengths never drive allocations past the input size
//!
//! # Wire Format
//!
//! Supported families: nil, bool, fixint/int8-64/uint8-64, float32/64,
//! fixstr/str8-32, fixarray/array16/32 and fixmap/map16/32. The `bin`,
//! `ext` and timestamp families are rejected as unsupported.

pub mod codec;
pub mod error;
#[cfg(feature = "json")]
pub mod json;
pub mod limits;
pub mod model;

// Re-export commonly used types at crate root
pub use codec::{
    decode, decode_exact, decode_exact_with_options, decode_with_options, encode,
    encode_with_options,
};
pub use error::{DecodeError, EncodeError};
#[cfg(feature = "json")]
pub use json::{encode_json, parse_json, JsonError, JsonNumbers};
pub use limits::{DecodeOptions, EncodeOptions};
pub use model::Value;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
