//! # Block & Entry Parsing
//!
//! A block is an entry list located through the catalog. Entries of block
//! types that need data point into a companion region whose identifier is the
//! block's with the first byte replaced by `D` (`ELST` pairs with `DLST`).
//!
//! ```text
//! Block (at catalog[id]):
//! [4 bytes]  Block id
//! [4 bytes]  Reserved
//! [4 bytes]  Entry count (big-endian u32)
//! Per entry:
//!   [4 bytes]  "Entr"
//!   [4 bytes]  Entry length (covers everything after this field)
//!   [4 bytes]  Reserved
//!   [4 bytes]  Data offset, relative to catalog[companion id]
//!   [length - 8 bytes] 14 attribute bytes, then 0xFF-padded, NUL-terminated name
//!
//! Data (at catalog[companion id] + data offset):
//!   [4 bytes]  "Data"
//!   [4 bytes]  Payload length
//!   [N bytes]  Payload
//! ```

use log::{debug, trace};

use super::layout::{ENTRY_LENGTH_BIAS, ENTRY_NAME_OFFSET};
use crate::montage::cursor::{ascii_until_nul, ByteCursor};
use crate::montage::types::error::{MontageError, Result};
use crate::montage::types::models::{BlockId, Catalog, Entry, RawEntry};
use crate::montage::types::registry::BlockSpec;

/// Reads every entry of `spec`'s block, with companion payloads when the block type needs them.
///
/// Returns `Ok(None)` when the catalog has no entry for the block type.
/// The cursor is left after the last entry.
pub fn read_block<'a>(
    cursor: &mut ByteCursor<'a>,
    catalog: &Catalog,
    spec: &BlockSpec,
) -> Result<Option<Vec<RawEntry<'a>>>> {
    let Some(block_offset) = catalog.get(spec.id) else {
        debug!("Catalog has no {} block ({})", spec.id, spec.name);
        return Ok(None);
    };
    trace!("Seeking to {} block at {:#010x}", spec.id, block_offset);
    cursor.seek(u64::from(block_offset))?;

    // Block header
    expect_id(cursor, spec.id)?;
    cursor.skip(4)?;
    let num_entries = cursor.read_u32_be()?;
    debug!("{} block: {} entries", spec.id, num_entries);

    let mut entries = Vec::new();
    for index in 0..num_entries {
        let entry = read_entry(cursor)?;
        trace!(
            "Entry {}: name={:?}, length={}, data_offset={:#x}",
            index,
            entry.name,
            entry.length,
            entry.data_offset
        );

        let payload = if spec.needs_data {
            Some(read_companion_payload(cursor, catalog, spec.id, entry.data_offset)?)
        } else {
            None
        };
        entries.push(RawEntry { entry, payload });
    }

    Ok(Some(entries))
}

/// Reads one `Entr` header and its trailing name bytes.
pub fn read_entry(cursor: &mut ByteCursor<'_>) -> Result<Entry> {
    expect_id(cursor, BlockId::ENTRY)?;
    let length = cursor.read_u32_be()?;
    cursor.skip(4)?;
    let data_offset = cursor.read_u32_be()?;

    let trailing_len = length
        .checked_sub(ENTRY_LENGTH_BIAS)
        .ok_or(MontageError::MalformedPayload {
            context: "entry length",
            expected: u64::from(ENTRY_LENGTH_BIAS),
            found: u64::from(length),
        })?;
    let trailing_offset = cursor.position();
    let trailing = cursor.read(trailing_len as usize)?;

    // Entries too short for the attribute bytes have no name.
    let name_region = trailing.get(ENTRY_NAME_OFFSET..).unwrap_or(&[]);
    let name = decode_entry_name(name_region, trailing_offset + ENTRY_NAME_OFFSET)?;

    Ok(Entry {
        length,
        data_offset,
        name,
    })
}

/// Decodes an entry name region: leading `0xFF` padding, ASCII text, NUL padding.
///
/// `offset` is only used for error reporting.
pub fn decode_entry_name(region: &[u8], offset: usize) -> Result<String> {
    let padding = region.iter().take_while(|&&b| b == 0xFF).count();
    ascii_until_nul(&region[padding..], offset + padding)
}

/// Follows an entry's data offset into the companion region and reads its payload.
///
/// The cursor position is restored afterwards so the next entry header can be read.
fn read_companion_payload<'a>(
    cursor: &mut ByteCursor<'a>,
    catalog: &Catalog,
    block_id: BlockId,
    data_offset: u32,
) -> Result<&'a [u8]> {
    let data_id = block_id.data_companion();
    let region_offset = catalog.get(data_id).ok_or(MontageError::MissingDataBlock {
        block: block_id,
        data: data_id,
    })?;

    let entry_pos = cursor.position();
    let target = u64::from(region_offset) + u64::from(data_offset);
    trace!("Seeking to {} payload at {:#x}", data_id, target);
    cursor.seek(target)?;

    expect_id(cursor, BlockId::DATA)?;
    let payload_len = cursor.read_u32_be()?;
    let payload = cursor.read(payload_len as usize)?;
    trace!("Read {} payload bytes from {}", payload.len(), data_id);

    cursor.seek(entry_pos as u64)?;
    Ok(payload)
}

/// Reads a 4-byte identifier and checks it against `expected`.
fn expect_id(cursor: &mut ByteCursor<'_>, expected: BlockId) -> Result<()> {
    let offset = cursor.position();
    let found = cursor.read_block_id()?;
    if found != expected {
        return Err(MontageError::BlockIdMismatch {
            offset,
            expected,
            found,
        });
    }
    Ok(())
}
