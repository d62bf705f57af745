//! Primitive encoding/decoding for the MessagePack wire format.
//!
//! All multi-byte fields are big-endian.

use crate::error::DecodeError;

// =============================================================================
// DECODING
// =============================================================================

/// Reader for decoding binary data.
///
/// Wraps a byte slice and provides methods for reading primitives
/// with bounds checking and error handling. The position only moves forward.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader from a byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the current position in the data.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the remaining bytes.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    /// Returns the number of remaining bytes.
    pub fn remaining_len(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns true if all data has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Reads a single byte.
    #[inline]
    pub fn read_byte(&mut self, context: &'static str) -> Result<u8, DecodeError> {
        if self.pos >= self.data.len() {
            return Err(DecodeError::Truncated { context });
        }
        let byte = self.data[self.pos];
        self.pos += 1;
        Ok(byte)
    }

    /// Reads exactly n bytes.
    #[inline]
    pub fn read_bytes(&mut self, n: usize, context: &'static str) -> Result<&'a [u8], DecodeError> {
        if n > self.remaining_len() {
            return Err(DecodeError::Truncated { context });
        }
        let bytes = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    /// Reads exactly N bytes into an array.
    #[inline]
    fn read_array<const N: usize>(
        &mut self,
        context: &'static str,
    ) -> Result<[u8; N], DecodeError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N, context)?);
        Ok(out)
    }

    /// Reads a big-endian u16.
    #[inline]
    pub fn read_u16(&mut self, context: &'static str) -> Result<u16, DecodeError> {
        Ok(u16::from_be_bytes(self.read_array(context)?))
    }

    /// Reads a big-endian u32.
    #[inline]
    pub fn read_u32(&mut self, context: &'static str) -> Result<u32, DecodeError> {
        Ok(u32::from_be_bytes(self.read_array(context)?))
    }

    /// Reads a big-endian u64.
    #[inline]
    pub fn read_u64(&mut self, context: &'static str) -> Result<u64, DecodeError> {
        Ok(u64::from_be_bytes(self.read_array(context)?))
    }

    /// Reads a signed byte.
    #[inline]
    pub fn read_i8(&mut self, context: &'static str) -> Result<i8, DecodeError> {
        Ok(self.read_byte(context)? as i8)
    }

    /// Reads a big-endian i16.
    #[inline]
    pub fn read_i16(&mut self, context: &'static str) -> Result<i16, DecodeError> {
        Ok(i16::from_be_bytes(self.read_array(context)?))
    }

    /// Reads a big-endian i32.
    #[inline]
    pub fn read_i32(&mut self, context: &'static str) -> Result<i32, DecodeError> {
        Ok(i32::from_be_bytes(self.read_array(context)?))
    }

    /// Reads a big-endian i64.
    #[inline]
    pub fn read_i64(&mut self, context: &'static str) -> Result<i64, DecodeError> {
        Ok(i64::from_be_bytes(self.read_array(context)?))
    }

    /// Reads a big-endian f32.
    #[inline]
    pub fn read_f32(&mut self, context: &'static str) -> Result<f32, DecodeError> {
        Ok(f32::from_be_bytes(self.read_array(context)?))
    }

    /// Reads a big-endian f64.
    #[inline]
    pub fn read_f64(&mut self, context: &'static str) -> Result<f64, DecodeError> {
        Ok(f64::from_be_bytes(self.read_array(context)?))
    }

    /// Reads `len` bytes of UTF-8 text.
    #[inline]
    pub fn read_str(&mut self, len: usize, context: &'static str) -> Result<String, DecodeError> {
        let bytes = self.read_bytes(len, context)?;
        // Validate UTF-8 on borrowed slice, then allocate once
        std::str::from_utf8(bytes)
            .map(|s| s.to_string())
            .map_err(|_| DecodeError::InvalidUtf8 { context })
    }
}

// =============================================================================
// ENCODING
// =============================================================================

/// Writer for encoding binary data.
#[derive(Debug, Clone, Default)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    /// Creates a new writer.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Creates a new writer with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Returns the written bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Returns a reference to the written bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Returns the number of bytes written.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if no bytes have been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Writes a single byte.
    #[inline]
    pub fn write_byte(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    /// Writes raw bytes.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Writes a tag followed by a big-endian u8.
    #[inline]
    pub fn write_tag_u8(&mut self, tag: u8, value: u8) {
        self.buf.extend_from_slice(&[tag, value]);
    }

    /// Writes a tag followed by a big-endian u16.
    #[inline]
    pub fn write_tag_u16(&mut self, tag: u8, value: u16) {
        self.buf.push(tag);
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a tag followed by a big-endian u32.
    #[inline]
    pub fn write_tag_u32(&mut self, tag: u8, value: u32) {
        self.buf.push(tag);
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a tag followed by a big-endian u64.
    #[inline]
    pub fn write_tag_u64(&mut self, tag: u8, value: u64) {
        self.buf.push(tag);
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a tag followed by a big-endian i32.
    #[inline]
    pub fn write_tag_i32(&mut self, tag: u8, value: i32) {
        self.buf.push(tag);
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a tag followed by a big-endian i64.
    #[inline]
    pub fn write_tag_i64(&mut self, tag: u8, value: i64) {
        self.buf.push(tag);
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a tag followed by a big-endian f32.
    #[inline]
    pub fn write_tag_f32(&mut self, tag: u8, value: f32) {
        self.buf.push(tag);
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a tag followed by a big-endian f64.
    #[inline]
    pub fn write_tag_f64(&mut self, tag: u8, value: f64) {
        self.buf.push(tag);
        self.buf.extend_from_slice(&value.to_be_bytes());
    }
}
