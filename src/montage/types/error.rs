//! Custom error types for the montage-reader crate.

use std::path::PathBuf;
use thiserror::Error;

use super::models::BlockId;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum MontageError {
    /// The input file could not be opened or read.
    #[error("could not open file: {}: {source}", .path.display())]
    FileUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A read asked for more bytes than remain in the buffer.
    #[error("Truncated data at offset {offset:#x}: needed {needed} bytes, {available} available")]
    TruncatedData {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// A seek target lies outside the buffer.
    #[error("Invalid offset {offset:#x} for buffer of {len} bytes")]
    InvalidOffset { offset: u64, len: usize },

    /// A fixed-width text field contained non-ASCII bytes.
    #[error("Non-ASCII text in field at offset {offset:#x}")]
    InvalidText { offset: usize },

    /// The file does not start with the `YAMAHA-YSFC` magic.
    #[error("Bad file magic: {found:?}")]
    BadMagic { found: String },

    /// The version string is not a dot-separated list of integers.
    #[error("Bad file version: {0:?}")]
    BadVersion(String),

    /// The declared catalog byte length is not a multiple of the catalog entry size.
    #[error("Bad catalog size: {0} is not a multiple of 8")]
    BadCatalogSize(u32),

    /// A block, entry or data header carried an unexpected identifier.
    #[error("Identifier mismatch at offset {offset:#x}: expected {expected}, found {found}")]
    BlockIdMismatch {
        offset: usize,
        expected: BlockId,
        found: BlockId,
    },

    /// A payload or record has a size the decoder does not accept.
    #[error("Malformed payload ({context}): expected {expected}, found {found}")]
    MalformedPayload {
        context: &'static str,
        expected: u64,
        found: u64,
    },

    /// An entry needs companion data, but the catalog has no data region for its block.
    #[error("Missing data block {data} for entries of block {block}")]
    MissingDataBlock { block: BlockId, data: BlockId },

    /// The caller asked for a block abbreviation that is not registered.
    #[error("unknown data type: {0}")]
    UnknownBlockType(String),

    /// The catalog has no entry for a registered block type.
    #[error("no data of type: {name}")]
    BlockNotPresent { name: &'static str },
}

impl MontageError {
    /// Returns `true` for conditions that skip one selection without ending the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            MontageError::UnknownBlockType(_) | MontageError::BlockNotPresent { .. }
        )
    }
}

/// A convenience `Result` type alias using the crate's `MontageError` type.
pub type Result<T> = std::result::Result<T, MontageError>;
