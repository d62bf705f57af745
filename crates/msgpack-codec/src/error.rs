//! Error types for MessagePack encoding and decoding.

use thiserror::Error;

/// Error categories shared by the decoder and encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Declared length or width exceeds the remaining input.
    TruncatedInput,
    /// Unrecognized format byte.
    UnsupportedType,
    /// Decoded map key is not a string.
    InvalidMapKey,
    /// Length or nesting exceeds what any tag (or the configured limit) allows.
    RangeViolation,
    /// Text payload is not valid UTF-8.
    InvalidUtf8,
    /// Bytes remain after the top-level value in strict mode.
    TrailingData,
}

impl ErrorKind {
    /// Returns a short stable name for the category.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::TruncatedInput => "truncated-input",
            ErrorKind::UnsupportedType => "unsupported-type",
            ErrorKind::InvalidMapKey => "invalid-map-key",
            ErrorKind::RangeViolation => "range-violation",
            ErrorKind::InvalidUtf8 => "invalid-utf8",
            ErrorKind::TrailingData => "trailing-data",
        }
    }
}

/// Error during MessagePack decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("empty MessagePack input")]
    EmptyInput,

    #[error("truncated {context}")]
    Truncated { context: &'static str },

    #[error("unsupported MessagePack format byte: {byte:#04x}")]
    UnsupportedType { byte: u8 },

    #[error("map key is not a string: found {kind}")]
    InvalidMapKey { kind: &'static str },

    #[error("invalid UTF-8 in {context}")]
    InvalidUtf8 { context: &'static str },

    #[error("nesting depth exceeds maximum {max}")]
    DepthExceeded { max: usize },

    #[error("{} trailing bytes after value ({consumed} of {total} consumed)", .total - .consumed)]
    TrailingBytes { consumed: usize, total: usize },
}

impl DecodeError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeError::EmptyInput | DecodeError::Truncated { .. } => ErrorKind::TruncatedInput,
            DecodeError::UnsupportedType { .. } => ErrorKind::UnsupportedType,
            DecodeError::InvalidMapKey { .. } => ErrorKind::InvalidMapKey,
            DecodeError::InvalidUtf8 { .. } => ErrorKind::InvalidUtf8,
            DecodeError::DepthExceeded { .. } => ErrorKind::RangeViolation,
            DecodeError::TrailingBytes { .. } => ErrorKind::TrailingData,
        }
    }
}

/// Error during MessagePack encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("{field} length {len} exceeds maximum {max}")]
    RangeViolation {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("nesting depth exceeds maximum {max}")]
    DepthExceeded { max: usize },
}

impl EncodeError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EncodeError::RangeViolation { .. } | EncodeError::DepthExceeded { .. } => {
                ErrorKind::RangeViolation
            }
        }
    }
}
