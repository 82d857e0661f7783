//! Catalog table parsing.
//!
//! The catalog directly follows the file header. It has no entry count of its
//! own: the header's catalog byte length divided by the entry size is the
//! number of `(block id, offset)` pairs.

use log::{debug, info, trace};

use super::header;
use super::layout::CATALOG_ENTRY_LEN;
use crate::montage::cursor::ByteCursor;
use crate::montage::types::error::{MontageError, Result};
use crate::montage::types::models::{Catalog, FileHeader};

/// Parses the file header and the catalog that follows it.
///
/// Identifiers that appear more than once keep the offset of their last entry.
pub fn parse(cursor: &mut ByteCursor<'_>) -> Result<(FileHeader, Catalog)> {
    let file_header = header::parse(cursor)?;

    let catalog_size = file_header.catalog_size;
    if catalog_size as usize % CATALOG_ENTRY_LEN != 0 {
        return Err(MontageError::BadCatalogSize(catalog_size));
    }

    let num_entries = catalog_size as usize / CATALOG_ENTRY_LEN;
    debug!("Reading {} catalog entries at offset {:#x}", num_entries, cursor.position());

    let mut catalog = Catalog::new();
    for _ in 0..num_entries {
        let id = cursor.read_block_id()?;
        let offset = cursor.read_u32_be()?;
        trace!("Catalog entry: {} -> {:#010x}", id, offset);
        catalog.insert(id, offset);
    }

    info!(
        "Catalog parsed: {} entries ({} distinct identifiers)",
        num_entries,
        catalog.len()
    );
    Ok((file_header, catalog))
}
