//! Core Montage file reader module.

pub mod cursor;
pub mod format;
pub mod reader;
pub mod types;

pub use reader::MontageReader;
pub use types::error::{MontageError, Result};
pub use types::registry::{BlockKind, BlockSpec, BLOCK_SPECS};
