//! Fixed sizes and offsets of the YSFC container.
//!
//! The live set constants were measured from real files rather than taken
//! from published documentation. Decoders check them against the data and
//! report a mismatch instead of reading misaligned records.

/// Literal prefix of the header's 16-byte magic region.
pub const FILE_MAGIC: &[u8] = b"YAMAHA-YSFC";

pub const FILE_HEADER_LEN: usize = 64;
pub const MAGIC_FIELD_LEN: usize = 16;
pub const VERSION_FIELD_LEN: usize = 16;
pub const FILE_HEADER_RESERVED_LEN: usize = 28;

pub const CATALOG_ENTRY_LEN: usize = 8;

/// Bytes of the 16-byte entry header already counted by the entry length field.
pub const ENTRY_LENGTH_BIAS: u32 = 8;
/// Opaque attribute bytes preceding the entry name.
pub const ENTRY_NAME_OFFSET: usize = 14;

pub const LIVE_SET_DATA_LEN: usize = 0x1C69;
pub const LIVE_SET_FIRST_PAGE: usize = 25;
pub const LIVE_SET_PAGE_STRIDE: usize = 0x1C5;
pub const PAGE_NAME_LEN: usize = 20;
pub const PAGE_RESERVED_LEN: usize = 23;
pub const SLOTS_PER_PAGE: usize = 16;
pub const SLOT_STRIDE: usize = 27;
pub const SLOT_RECORD_LEN: usize = 5;

/// Bytes spanned by a page, from its name to the end of its last slot record.
pub const PAGE_SPAN: usize =
    PAGE_NAME_LEN + PAGE_RESERVED_LEN + (SLOTS_PER_PAGE - 1) * SLOT_STRIDE + SLOT_RECORD_LEN;

const _: () = assert!(PAGE_SPAN <= LIVE_SET_PAGE_STRIDE);
