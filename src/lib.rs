//! # montage-reader
//!
//! A reader for Yamaha Montage instrument files (the YSFC container).
//! Resolves the file catalog, walks block entry lists, follows entries into
//! their companion data regions and decodes live set pages with their
//! performance slots.
pub mod montage;

// Re-export the main types for convenience
pub use montage::{
    MontageError,
    MontageReader,
    Result,
    types::models::{
        Bank,
        BlockId,
        BlockOutcome,
        Catalog,
        DecodedBlock,
        DecodedEntry,
        EntryContent,
        FileHeader,
        FileVersion,
        LiveSetPage,
        Performance,
        PerformanceSlot,
    },
    types::registry::{BlockKind, BlockSpec, BLOCK_SPECS},
};
