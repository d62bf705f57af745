//! Security limits and codec options.
//!
//! The decoder consumes untrusted input, so container nesting is capped to
//! keep recursion bounded. Lengths are capped by what the wire format can
//! express.

/// Default maximum container nesting depth for decoding and encoding.
pub const MAX_DEPTH: usize = 256;

/// Hard ceiling on the configurable nesting depth.
///
/// Options asking for more are clamped to this value so recursion stays
/// within the default thread stack.
pub const MAX_DEPTH_CEILING: usize = 512;

/// Largest length expressible by a fixstr tag.
pub const MAX_FIXSTR_LEN: usize = 0x1f;

/// Largest length expressible by a fixarray or fixmap tag.
pub const MAX_FIXCONTAINER_LEN: usize = 0x0f;

/// Largest length expressible by any str/array/map tag (32-bit length field).
pub const MAX_LEN: usize = u32::MAX as usize;

/// Options controlling decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Maximum number of nested arrays/maps. Top-level scalars need none.
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
        }
    }
}

impl DecodeOptions {
    /// Creates default decoding options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns these options with a different maximum depth, clamped to
    /// [`MAX_DEPTH_CEILING`].
    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self {
            max_depth: max_depth.min(MAX_DEPTH_CEILING),
        }
    }

    /// Returns the depth limit actually enforced.
    pub fn effective_max_depth(&self) -> usize {
        self.max_depth.min(MAX_DEPTH_CEILING)
    }
}

/// Options controlling encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Maximum number of nested arrays/maps. Top-level scalars need none.
    pub max_depth: usize,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
        }
    }
}

impl EncodeOptions {
    /// Creates default encoding options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns these options with a different maximum depth, clamped to
    /// [`MAX_DEPTH_CEILING`].
    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self {
            max_depth: max_depth.min(MAX_DEPTH_CEILING),
        }
    }

    /// Returns the depth limit actually enforced.
    pub fn effective_max_depth(&self) -> usize {
        self.max_depth.min(MAX_DEPTH_CEILING)
    }
}
