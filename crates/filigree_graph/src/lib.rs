//! Schema-driven entity graph engine for Filigree.
//!
//! This crate provides:
//! - [`EntityType`] - Runtime schema descriptors for entity types
//! - [`Attribute`] - One scalar value plus its declared default
//! - [`Entity`] - A schema-bound graph node with lazy associations
//! - [`Collection`] - An ordered, id-indexed store of entities of one type
//! - [`Immutable`] - Copy-on-write construction and targeted merges

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod attribute;
pub mod collection;
pub mod entity;
pub mod immutable;
pub mod schema;

pub use attribute::Attribute;
pub use collection::Collection;
pub use entity::{Association, Entity};
pub use immutable::Immutable;
pub use schema::{AssociationSchema, EntityType, FieldSchema};
