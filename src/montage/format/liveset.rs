//! Live set payload decoding.
//!
//! ```text
//! [25 bytes]  Live set header (not decoded)
//! 16 pages, one every 0x1C5 bytes:
//!   [20 bytes]  Page name, NUL padded
//!   [23 bytes]  Reserved
//!   16 slots, one every 27 bytes:
//!     [1 byte]  Reserved
//!     [1 byte]  Bank index
//!     [1 byte]  Program index
//!     [1 byte]  Reserved
//!     [1 byte]  Present flag
//! ```

use log::{debug, trace};

use super::layout::{
    LIVE_SET_DATA_LEN, LIVE_SET_FIRST_PAGE, LIVE_SET_PAGE_STRIDE, PAGE_NAME_LEN,
    PAGE_RESERVED_LEN, PAGE_SPAN, SLOTS_PER_PAGE, SLOT_RECORD_LEN, SLOT_STRIDE,
};
use crate::montage::cursor::ByteCursor;
use crate::montage::types::error::{MontageError, Result};
use crate::montage::types::models::{LiveSetPage, PerformanceSlot};

/// Decodes the pages of one live set payload, dropping pages with no present slot.
pub fn decode(payload: &[u8]) -> Result<Vec<LiveSetPage>> {
    if payload.len() != LIVE_SET_DATA_LEN {
        return Err(MontageError::MalformedPayload {
            context: "live set data length",
            expected: LIVE_SET_DATA_LEN as u64,
            found: payload.len() as u64,
        });
    }

    let mut cursor = ByteCursor::new(payload);
    let mut pages = Vec::new();
    let mut page_offset = LIVE_SET_FIRST_PAGE;
    while page_offset < payload.len() {
        if page_offset + PAGE_SPAN > payload.len() {
            return Err(MontageError::MalformedPayload {
                context: "live set page alignment",
                expected: (page_offset + PAGE_SPAN) as u64,
                found: payload.len() as u64,
            });
        }

        let page = decode_page(&mut cursor, page_offset)?;
        if page.slots.iter().any(|slot| slot.present) {
            pages.push(page);
        } else {
            trace!("Dropping empty page at {:#x}", page_offset);
        }
        page_offset += LIVE_SET_PAGE_STRIDE;
    }

    debug!("Live set decoded: {} non-empty pages", pages.len());
    Ok(pages)
}

fn decode_page(cursor: &mut ByteCursor<'_>, page_offset: usize) -> Result<LiveSetPage> {
    cursor.seek(page_offset as u64)?;
    let name = cursor.read_fixed_ascii(PAGE_NAME_LEN)?;
    cursor.skip(PAGE_RESERVED_LEN)?;

    let first_slot = cursor.position();
    let mut slots = Vec::with_capacity(SLOTS_PER_PAGE);
    for index in 0..SLOTS_PER_PAGE {
        cursor.seek((first_slot + index * SLOT_STRIDE) as u64)?;
        slots.push(decode_slot(cursor.read(SLOT_RECORD_LEN)?));
    }

    Ok(LiveSetPage { name, slots })
}

fn decode_slot(record: &[u8]) -> PerformanceSlot {
    PerformanceSlot {
        reserved: [record[0], record[3]],
        bank_index: record[1],
        program_index: record[2],
        present: record[4] != 0,
    }
}
