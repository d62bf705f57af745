//! Data model types for the codec.
//!
//! A single closed tagged union, [`Value`], carries everything the decoder
//! produces and the encoder consumes.

pub mod value;

pub use value::Value;
