use anyhow::{Context, Result};

/// Parses contiguous hex digits into bytes. Surrounding whitespace is ignored.
pub fn parse_hex(s: &str) -> Result<Vec<u8>> {
    let s = s.trim();
    hex::decode(s).with_context(|| format!("invalid hex input '{}'", s))
}
