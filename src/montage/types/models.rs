//! Core data structures for Montage file components.
//!
//! This module defines the fundamental types used throughout the library:
//! - File header, version and catalog
//! - Block entries and their companion payloads
//! - Decoded live set pages and performance slots

use std::collections::HashMap;
use std::fmt;

use super::registry::BlockSpec;

/// A 4-byte block identifier, e.g. `ELST`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockId(pub [u8; 4]);

impl BlockId {
    pub const ENTRY: BlockId = BlockId(*b"Entr");
    pub const DATA: BlockId = BlockId(*b"Data");

    /// The identifier of the paired data region: first byte replaced by `D`.
    ///
    /// `ELST` becomes `DLST`; applying it to `DLST` yields `DLST` again.
    pub fn data_companion(self) -> BlockId {
        let mut bytes = self.0;
        bytes[0] = b'D';
        BlockId(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl From<[u8; 4]> for BlockId {
    fn from(bytes: [u8; 4]) -> Self {
        BlockId(bytes)
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &b in &self.0 {
            if b.is_ascii_graphic() || b == b' ' {
                write!(f, "{}", b as char)?;
            } else {
                write!(f, "\\x{:02x}", b)?;
            }
        }
        Ok(())
    }
}

/// Dot-separated file format version, e.g. `4.1.2`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FileVersion(pub Vec<u32>);

impl FileVersion {
    pub fn major(&self) -> u32 {
        self.0.first().copied().unwrap_or(0)
    }

    /// Motif-era files carry a major version below 4.
    pub fn is_pre_montage(&self) -> bool {
        self.major() < 4
    }
}

impl fmt::Display for FileVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for part in &self.0 {
            if !first {
                f.write_str(".")?;
            }
            write!(f, "{}", part)?;
            first = false;
        }
        Ok(())
    }
}

/// Parsed 64-byte file header.
#[derive(Debug, Clone)]
pub struct FileHeader {
    /// Magic region with NUL padding removed.
    pub magic: String,
    pub version: FileVersion,
    /// Byte length of the catalog table that follows the header.
    pub catalog_size: u32,
}

/// File-level index from block identifier to absolute file offset.
///
/// Inserting an identifier that is already present replaces its offset.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    offsets: HashMap<BlockId, u32>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: BlockId, offset: u32) {
        self.offsets.insert(id, offset);
    }

    pub fn get(&self, id: BlockId) -> Option<u32> {
        self.offsets.get(&id).copied()
    }

    pub fn contains(&self, id: BlockId) -> bool {
        self.offsets.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (BlockId, u32)> + '_ {
        self.offsets.iter().map(|(id, offset)| (*id, *offset))
    }
}

impl FromIterator<(BlockId, u32)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (BlockId, u32)>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for (id, offset) in iter {
            catalog.insert(id, offset);
        }
        catalog
    }
}

/// One `Entr` record inside a block's entry list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Declared length, counted from the reserved field of the entry header.
    pub length: u32,
    /// Offset of the entry's payload relative to the companion data region.
    pub data_offset: u32,
    pub name: String,
}

/// An entry together with its companion payload, borrowed from the file buffer.
#[derive(Debug, Clone)]
pub struct RawEntry<'a> {
    pub entry: Entry,
    /// `None` when the block type carries no companion data.
    pub payload: Option<&'a [u8]>,
}

/// Bank a performance slot refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bank {
    Preset(u16),
    User(u16),
    Library(u16),
    Unknown(u16),
}

impl Bank {
    /// Maps a 1-based bank number to its bank.
    pub fn from_number(number: u16) -> Self {
        match number {
            0..=31 => Bank::Preset(number),
            33..=37 => Bank::User(number - 32),
            47..=54 => Bank::Library(number - 46),
            _ => Bank::Unknown(number),
        }
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Padding applies to the whole label, so build it first.
        let label = match self {
            Bank::Preset(n) => format!("PRE{}", n),
            Bank::User(n) => format!("USR{}", n),
            Bank::Library(n) => format!("LIB{}", n),
            Bank::Unknown(_) => "???".to_string(),
        };
        f.pad(&label)
    }
}

/// One performance reference within a live set page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerformanceSlot {
    /// Bytes 0 and 3 of the record; meaning unknown.
    pub reserved: [u8; 2],
    pub bank_index: u8,
    pub program_index: u8,
    pub present: bool,
}

impl PerformanceSlot {
    pub fn bank(&self) -> Bank {
        Bank::from_number(u16::from(self.bank_index) + 1)
    }

    /// 1-based program number within the bank.
    pub fn program_number(&self) -> u16 {
        u16::from(self.program_index) + 1
    }

    /// The five record bytes in on-disk order.
    pub fn raw(&self) -> [u8; 5] {
        [
            self.reserved[0],
            self.bank_index,
            self.program_index,
            self.reserved[1],
            u8::from(self.present),
        ]
    }
}

/// A named page of a live set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveSetPage {
    pub name: String,
    /// Always 16 slots; absent slots keep their position.
    pub slots: Vec<PerformanceSlot>,
}

impl LiveSetPage {
    /// Slots that reference a performance, with their 0-based position.
    pub fn present_slots(&self) -> impl Iterator<Item = (usize, &PerformanceSlot)> {
        self.slots.iter().enumerate().filter(|(_, slot)| slot.present)
    }
}

/// A performance entry. Only the payload size is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Performance {
    pub data_len: usize,
}

/// Decoded content of one entry, by block type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryContent {
    LiveSet(Vec<LiveSetPage>),
    Performance(Performance),
    /// The block type carries no companion payload.
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedEntry {
    pub name: String,
    pub content: EntryContent,
}

/// All entries of one block, decoded.
#[derive(Debug, Clone)]
pub struct DecodedBlock {
    pub spec: &'static BlockSpec,
    pub entries: Vec<DecodedEntry>,
}

/// Result of processing one selected block type during a run.
#[derive(Debug)]
pub enum BlockOutcome {
    Decoded(DecodedBlock),
    /// A recoverable skip: unknown abbreviation or block absent from the catalog.
    Skipped(super::error::MontageError),
}
