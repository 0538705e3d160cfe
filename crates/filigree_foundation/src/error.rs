//! Error types for the Filigree system.
//!
//! Uses `thiserror` for ergonomic error definition. Configuration errors are
//! the only always-raised failures in the engine; everything else in the
//! graph layer follows a tolerant silent-ignore policy and reports absence
//! through `Option`.

use thiserror::Error;

use crate::path::Path;

/// Result alias for Filigree operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Filigree operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub const fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an empty-schema configuration error.
    #[must_use]
    pub fn empty_schema(entity_type: impl Into<String>) -> Self {
        Self::new(ErrorKind::EmptySchema {
            entity_type: entity_type.into(),
        })
    }

    /// Creates an association/field name clash configuration error.
    #[must_use]
    pub fn association_clash(entity_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(ErrorKind::AssociationClash {
            entity_type: entity_type.into(),
            name: name.into(),
        })
    }

    /// Creates a path parse error.
    #[must_use]
    pub fn path_parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::PathParse {
            input: input.into(),
            reason: reason.into(),
        })
    }

    /// Creates a merge-target-not-found error.
    #[must_use]
    pub fn target_not_found(path: Path) -> Self {
        Self::new(ErrorKind::TargetNotFound { path })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// An entity type declares no scalar fields.
    #[error("entity type {entity_type} declares no fields")]
    EmptySchema {
        /// Name of the offending entity type.
        entity_type: String,
    },

    /// An association name collides with a declared scalar field.
    #[error("association {name} clashes with a field on entity type {entity_type}")]
    AssociationClash {
        /// Name of the offending entity type.
        entity_type: String,
        /// The colliding name.
        name: String,
    },

    /// Malformed textual path.
    #[error("invalid path {input:?}: {reason}")]
    PathParse {
        /// The text that failed to parse.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A merge target path did not resolve in the cloned graph.
    #[error("merge target not found: {path}")]
    TargetNotFound {
        /// The path that failed to resolve.
        path: Path,
    },
}
