//! Foundational data structures, error types, and the block type registry.

pub mod error;
pub mod models;
pub mod registry;
