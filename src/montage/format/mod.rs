//! File format parsing layer for YSFC files.
//!
//! # Module Organization
//!
//! - [`layout`]: Fixed sizes and offsets of the container
//! - [`header`]: Parses the 64-byte file header
//! - [`catalog`]: Parses the catalog mapping block ids to offsets
//! - [`block`]: Walks a block's entry list and its companion data region
//! - [`liveset`]: Decodes live set payloads into pages and slots
//! - [`performance`]: Decodes performance payloads
//!
//! # Architecture
//!
//! ```text
//! File Structure:
//! ┌─────────────────┐
//! │  File Header    │ ← header::parse()
//! ├─────────────────┤
//! │  Catalog        │ ← catalog::parse()
//! ├─────────────────┤
//! │  Entry Blocks   │ ← block::read_block()
//! │  (ELST, ...)    │
//! ├─────────────────┤
//! │  Data Blocks    │ ← liveset::decode(), performance::decode()
//! │  (DLST, ...)    │
//! └─────────────────┘
//! ```

pub mod block;
pub mod catalog;
pub mod header;
pub mod layout;
pub mod liveset;
pub mod performance;
