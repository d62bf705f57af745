//! Binary encoding/decoding for MessagePack.
//!
//! Decoding and encoding are independent recursive-descent passes over the
//! same tag table in [`tags`].

pub mod decode;
pub mod encode;
pub mod primitives;
pub mod tags;

pub use decode::{
    decode, decode_exact, decode_exact_with_options, decode_value, decode_with_options,
};
pub use encode::{encode, encode_value, encode_with_options};
pub use primitives::{Reader, Writer};
