//! Core types for Filigree.
//!
//! This crate provides:
//! - [`Value`] - Plain nested data: seed records, merge patches, serialized graphs
//! - [`Path`] - Structured hierarchical addresses for nodes in an entity graph
//! - [`TypeTag`] - Advisory field type metadata
//! - [`Error`] - Typed errors for configuration and boundary failures

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod path;
pub mod types;
pub mod value;

pub use error::{Error, ErrorKind, Result};
pub use path::{Path, PathSegment};
pub use types::TypeTag;
pub use value::Value;
