//! Registry of the block types this reader understands.

use super::models::BlockId;

/// Which decoder handles the payloads of a block type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    LiveSet,
    Performance,
}

/// Static description of a known block type.
#[derive(Debug, PartialEq, Eq)]
pub struct BlockSpec {
    /// Short name used on the command line, e.g. `ls`.
    pub abbrev: &'static str,
    pub id: BlockId,
    /// Human-readable name used in reports.
    pub name: &'static str,
    pub kind: BlockKind,
    /// Entries carry a payload in the companion `D...` region.
    pub needs_data: bool,
}

/// All known block types, in the order a full run processes them.
pub static BLOCK_SPECS: &[BlockSpec] = &[
    BlockSpec {
        abbrev: "ls",
        id: BlockId(*b"ELST"),
        name: "Live Set Blocks",
        kind: BlockKind::LiveSet,
        needs_data: true,
    },
    BlockSpec {
        abbrev: "pf",
        id: BlockId(*b"EPFM"),
        name: "Performances",
        kind: BlockKind::Performance,
        needs_data: true,
    },
];

/// Looks up a block type by its command-line abbreviation.
pub fn find(abbrev: &str) -> Option<&'static BlockSpec> {
    BLOCK_SPECS.iter().find(|spec| spec.abbrev == abbrev)
}
