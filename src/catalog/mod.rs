//! Catalog access and partitioning — reading the cached group snapshot and
//! splitting it into year buckets.
//!
//! Nothing in this module depends on any TUI or rendering crate.

pub mod partition;
pub mod store;
