//! Builders for synthetic YSFC files.
#![allow(dead_code)]

pub const LIVE_SET_DATA_LEN: usize = 0x1C69;
pub const FIRST_PAGE: usize = 25;
pub const PAGE_STRIDE: usize = 0x1C5;
pub const SLOT_BASE: usize = 20 + 23;
pub const SLOT_STRIDE: usize = 27;

/// A 64-byte file header.
pub fn header(magic: &[u8], version: &str, catalog_size: u32) -> Vec<u8> {
    let mut out = vec![0u8; 64];
    out[..magic.len()].copy_from_slice(magic);
    out[16..16 + version.len()].copy_from_slice(version.as_bytes());
    out[32..36].copy_from_slice(&catalog_size.to_be_bytes());
    out
}

/// One `Entr` record: 16-byte header, 14 attribute bytes, 0xFF padding, name, NUL padding.
pub fn entry_record(name: &str, data_offset: u32) -> Vec<u8> {
    let mut trailing = vec![0xAAu8; 14];
    trailing.extend_from_slice(&[0xFF, 0xFF, 0xFF]);
    trailing.extend_from_slice(name.as_bytes());
    trailing.extend_from_slice(&[0u8; 5]);

    let mut out = Vec::new();
    out.extend_from_slice(b"Entr");
    out.extend_from_slice(&(trailing.len() as u32 + 8).to_be_bytes());
    out.extend_from_slice(&[0u8; 4]);
    out.extend_from_slice(&data_offset.to_be_bytes());
    out.extend_from_slice(&trailing);
    out
}

/// An entry block: 12-byte header followed by the given entries.
pub fn entry_block(id: &[u8; 4], entries: &[(&str, u32)]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(id);
    out.extend_from_slice(&[0u8; 4]);
    out.extend_from_slice(&(entries.len() as u32).to_be_bytes());
    for (name, data_offset) in entries {
        out.extend_from_slice(&entry_record(name, *data_offset));
    }
    out
}

/// A data region holding the payloads back to back, plus each payload's relative offset.
pub fn data_region(payloads: &[Vec<u8>]) -> (Vec<u8>, Vec<u32>) {
    let mut out = Vec::new();
    let mut offsets = Vec::new();
    for payload in payloads {
        offsets.push(out.len() as u32);
        out.extend_from_slice(b"Data");
        out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
        out.extend_from_slice(payload);
    }
    (out, offsets)
}

/// Lays out header, catalog and regions; each catalog entry points at its region.
pub fn assemble(version: &str, regions: &[(&[u8; 4], Vec<u8>)]) -> Vec<u8> {
    let catalog_size = (regions.len() * 8) as u32;
    let mut out = header(b"YAMAHA-YSFC", version, catalog_size);

    let mut offset = 64 + catalog_size as usize;
    for (id, bytes) in regions {
        out.extend_from_slice(*id);
        out.extend_from_slice(&(offset as u32).to_be_bytes());
        offset += bytes.len();
    }
    for (_, bytes) in regions {
        out.extend_from_slice(bytes);
    }
    out
}

/// Slot contents: (slot index, bank index, program index).
pub type SlotSpec = (usize, u8, u8);

/// A live set payload; pages not listed keep all slots absent.
pub fn live_set_payload(pages: &[(usize, &str, Vec<SlotSpec>)]) -> Vec<u8> {
    let mut out = vec![0u8; LIVE_SET_DATA_LEN];
    for (page, name, slots) in pages {
        let page_start = FIRST_PAGE + page * PAGE_STRIDE;
        out[page_start..page_start + name.len()].copy_from_slice(name.as_bytes());
        for (slot, bank, program) in slots {
            let at = page_start + SLOT_BASE + slot * SLOT_STRIDE;
            out[at] = 0x11;
            out[at + 1] = *bank;
            out[at + 2] = *program;
            out[at + 3] = 0x22;
            out[at + 4] = 1;
        }
    }
    out
}

/// A file with one live set block whose entries carry the given payloads.
pub fn live_set_file(version: &str, entries: &[(&str, Vec<u8>)]) -> Vec<u8> {
    let payloads: Vec<Vec<u8>> = entries.iter().map(|(_, p)| p.clone()).collect();
    let (data, offsets) = data_region(&payloads);
    let named: Vec<(&str, u32)> = entries
        .iter()
        .zip(&offsets)
        .map(|((name, _), off)| (*name, *off))
        .collect();
    assemble(version, &[(b"ELST", entry_block(b"ELST", &named)), (b"DLST", data)])
}
