use std::fs;
use std::path::Path;

use log::{debug, info};

use super::cursor::ByteCursor;
use super::format::{block, catalog, liveset, performance};
use super::types::error::{MontageError, Result};
use super::types::models::*;
use super::types::registry::{self, BlockKind, BlockSpec, BLOCK_SPECS};

/// The main reader for Montage (YSFC) files.
///
/// The whole file is read into memory when the reader is created, and the
/// file handle is closed before any decoding happens. Header and catalog are
/// parsed up front; blocks are decoded on request.
#[derive(Debug)]
pub struct MontageReader {
    data: Vec<u8>,
    header: FileHeader,
    catalog: Catalog,
}

impl MontageReader {
    /// Reads a Montage file from the given path.
    ///
    /// # Errors
    /// Returns an error if:
    /// - File cannot be opened or read (`FileUnavailable`)
    /// - The header magic or version is invalid
    /// - The catalog is truncated or has an invalid size
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening Montage file: {}", path.display());
        let data = fs::read(path).map_err(|source| MontageError::FileUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(data)
    }

    /// Parses a file image that is already in memory.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let mut cursor = ByteCursor::new(&data);
        let (header, catalog) = catalog::parse(&mut cursor)?;
        info!(
            "Montage file parsed: version={}, {} bytes, {} catalog entries",
            header.version,
            data.len(),
            catalog.len()
        );
        Ok(Self {
            data,
            header,
            catalog,
        })
    }

    pub fn header(&self) -> &FileHeader {
        &self.header
    }

    pub fn version(&self) -> &FileVersion {
        &self.header.version
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Decodes the selected block types.
    ///
    /// An empty selection decodes every registered block type in registry
    /// order. Otherwise the abbreviations are processed in the order given.
    /// Unknown abbreviations and block types missing from the catalog become
    /// [`BlockOutcome::Skipped`] and the run continues; any other error ends it.
    pub fn run<S: AsRef<str>>(&self, selection: &[S]) -> Result<Vec<BlockOutcome>> {
        if selection.is_empty() {
            return BLOCK_SPECS.iter().map(|spec| self.outcome(spec)).collect();
        }

        selection
            .iter()
            .map(|abbrev| {
                let abbrev = abbrev.as_ref();
                match registry::find(abbrev) {
                    Some(spec) => self.outcome(spec),
                    None => {
                        debug!("Skipping unknown block abbreviation {:?}", abbrev);
                        Ok(BlockOutcome::Skipped(MontageError::UnknownBlockType(
                            abbrev.to_string(),
                        )))
                    }
                }
            })
            .collect()
    }

    /// Decodes every entry of one block type.
    ///
    /// Fails with `BlockNotPresent` when the catalog has no such block.
    pub fn read_block(&self, spec: &'static BlockSpec) -> Result<DecodedBlock> {
        let mut cursor = ByteCursor::new(&self.data);
        let raw_entries = block::read_block(&mut cursor, &self.catalog, spec)?
            .ok_or(MontageError::BlockNotPresent { name: spec.name })?;

        let entries = raw_entries
            .into_iter()
            .map(|raw| {
                let content = match raw.payload {
                    Some(payload) => decode_payload(spec.kind, payload)?,
                    None => EntryContent::Empty,
                };
                Ok(DecodedEntry {
                    name: raw.entry.name,
                    content,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        info!("{}: {} entries decoded", spec.name, entries.len());
        Ok(DecodedBlock { spec, entries })
    }

    fn outcome(&self, spec: &'static BlockSpec) -> Result<BlockOutcome> {
        match self.read_block(spec) {
            Ok(decoded) => Ok(BlockOutcome::Decoded(decoded)),
            Err(e) if e.is_recoverable() => Ok(BlockOutcome::Skipped(e)),
            Err(e) => Err(e),
        }
    }
}

fn decode_payload(kind: BlockKind, payload: &[u8]) -> Result<EntryContent> {
    match kind {
        BlockKind::LiveSet => liveset::decode(payload).map(EntryContent::LiveSet),
        BlockKind::Performance => Ok(EntryContent::Performance(performance::decode(payload))),
    }
}
