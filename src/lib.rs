//! Filigree - in-memory entity-relationship graph engine
//!
//! This crate re-exports all layers of the Filigree system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: filigree_graph      — Schemas, entities, collections, copy-on-write merges
//! Layer 0: filigree_foundation — Core types (Value, Path, TypeTag, Error)
//! ```

pub use filigree_foundation as foundation;
pub use filigree_graph as graph;
