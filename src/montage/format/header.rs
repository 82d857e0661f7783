//! YSFC file header parsing.

use byteorder::{BigEndian, ByteOrder};
use log::{debug, info, trace, warn};

use super::layout::{
    FILE_HEADER_LEN, FILE_HEADER_RESERVED_LEN, FILE_MAGIC, MAGIC_FIELD_LEN, VERSION_FIELD_LEN,
};
use crate::montage::cursor::{ascii_until_nul, ByteCursor};
use crate::montage::types::error::{MontageError, Result};
use crate::montage::types::models::{FileHeader, FileVersion};

/// Parses the file header from the cursor's current position.
///
/// # Header Structure
/// ```text
/// [16 bytes] Magic "YAMAHA-YSFC", NUL padded
/// [16 bytes] Version string, e.g. "4.0.0", NUL padded
/// [4 bytes]  Catalog byte length (big-endian u32)
/// [28 bytes] Reserved
/// ```
///
/// The magic is validated before anything else is decoded.
pub fn parse(cursor: &mut ByteCursor<'_>) -> Result<FileHeader> {
    info!("Parsing YSFC file header");
    let start = cursor.position();
    let header = cursor.read(FILE_HEADER_LEN)?;

    // Step 1: Magic
    let magic_bytes = &header[..MAGIC_FIELD_LEN];
    if !magic_bytes.starts_with(FILE_MAGIC) {
        return Err(MontageError::BadMagic {
            found: String::from_utf8_lossy(magic_bytes)
                .trim_end_matches('\0')
                .to_string(),
        });
    }
    let magic = ascii_until_nul(magic_bytes, start)?;
    trace!("File magic: {:?}", magic);

    // Step 2: Version
    let version_bytes = &header[MAGIC_FIELD_LEN..MAGIC_FIELD_LEN + VERSION_FIELD_LEN];
    let version_str = ascii_until_nul(version_bytes, start + MAGIC_FIELD_LEN)
        .map_err(|_| MontageError::BadVersion(String::from_utf8_lossy(version_bytes).into_owned()))?;
    let version = parse_version(&version_str)?;
    debug!("File version: {}", version);
    if version.is_pre_montage() {
        warn!(
            "File version {} predates the Montage format; blocks may not decode",
            version
        );
    }

    // Step 3: Catalog size
    let size_offset = MAGIC_FIELD_LEN + VERSION_FIELD_LEN;
    let catalog_size = BigEndian::read_u32(&header[size_offset..size_offset + 4]);
    trace!(
        "Catalog size: {} bytes ({} reserved header bytes skipped)",
        catalog_size,
        FILE_HEADER_RESERVED_LEN
    );

    Ok(FileHeader {
        magic,
        version,
        catalog_size,
    })
}

/// Parses a dot-separated version string such as `4.1.2`.
pub fn parse_version(text: &str) -> Result<FileVersion> {
    if text.is_empty() {
        return Err(MontageError::BadVersion(text.to_string()));
    }
    text.split('.')
        .map(|part| {
            part.parse::<u32>()
                .map_err(|_| MontageError::BadVersion(text.to_string()))
        })
        .collect::<Result<Vec<_>>>()
        .map(FileVersion)
}
