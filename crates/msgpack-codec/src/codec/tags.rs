//! MessagePack format bytes.

pub const POSITIVE_FIXINT_MAX: u8 = 0x7f;
pub const FIXMAP: u8 = 0x80;
pub const FIXMAP_MAX: u8 = 0x8f;
pub const FIXARRAY: u8 = 0x90;
pub const FIXARRAY_MAX: u8 = 0x9f;
pub const FIXSTR: u8 = 0xa0;
pub const FIXSTR_MAX: u8 = 0xbf;
pub const NEGATIVE_FIXINT: u8 = 0xe0;

pub const NIL: u8 = 0xc0;
pub const FALSE: u8 = 0xc2;
pub const TRUE: u8 = 0xc3;

pub const FLOAT32: u8 = 0xca;
pub const FLOAT64: u8 = 0xcb;

pub const UINT8: u8 = 0xcc;
pub const UINT16: u8 = 0xcd;
pub const UINT32: u8 = 0xce;
pub const UINT64: u8 = 0xcf;

pub const INT8: u8 = 0xd0;
pub const INT16: u8 = 0xd1;
pub const INT32: u8 = 0xd2;
pub const INT64: u8 = 0xd3;

pub const STR8: u8 = 0xd9;
pub const STR16: u8 = 0xda;
pub const STR32: u8 = 0xdb;

pub const ARRAY16: u8 = 0xdc;
pub const ARRAY32: u8 = 0xdd;

pub const MAP16: u8 = 0xde;
pub const MAP32: u8 = 0xdf;

/// Low bits of a fixmap/fixarray tag holding the length.
pub const FIXCONTAINER_LEN_MASK: u8 = 0x0f;

/// Low bits of a fixstr tag holding the length.
pub const FIXSTR_LEN_MASK: u8 = 0x1f;
