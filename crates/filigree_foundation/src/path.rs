//! Structured hierarchical addresses for entity graph nodes.
//!
//! A [`Path`] records how a node was reached from its root entity: one
//! [`PathSegment`] per association hop, with a member position for hops
//! through one-to-many collections. The textual wire format
//! (`relOne/rels$0/relOne`) is parsed and rendered only at this boundary;
//! everything else operates on the structured form.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Separator between path segments in the wire format.
pub const SEGMENT_SEPARATOR: char = '/';

/// Separator between an association name and a member position in the wire format.
pub const INDEX_SEPARATOR: char = '$';

/// One association hop in a path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathSegment {
    /// Association name.
    pub name: String,
    /// Member position for one-to-many hops; `None` for one-to-one hops.
    pub index: Option<usize>,
}

impl PathSegment {
    /// Creates a one-to-one hop.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            index: None,
        }
    }

    /// Creates a one-to-many hop through the member at `index`.
    #[must_use]
    pub fn indexed(name: impl Into<String>, index: usize) -> Self {
        Self {
            name: name.into(),
            index: Some(index),
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(index) => write!(f, "{}{INDEX_SEPARATOR}{index}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// An ordered sequence of association hops from a root entity.
///
/// Root entities carry the empty path. Paths compare structurally, which is
/// what the defensive check in `Entity::find` relies on.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// Returns the empty path of a root entity.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Returns true if this is the root (empty) path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of hops.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if the path has no hops.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the hops in order.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Returns a new path extended with a one-to-one hop.
    #[must_use]
    pub fn child(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::new(name));
        Self { segments }
    }

    /// Returns a new path with a member position attached to the last hop.
    ///
    /// Collections address their members this way: the collection's own path
    /// ends in the association name, and each member gets that path with its
    /// position attached. Attaching a position to the root path has no
    /// effect, since an unattached collection's members are not addressable.
    #[must_use]
    pub fn indexed(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        if let Some(last) = segments.last_mut() {
            last.index = Some(index);
        }
        Self { segments }
    }

    /// Parses the textual wire format.
    ///
    /// A leading segment separator is tolerated (paths recorded by older
    /// producers carry one). Empty segments, malformed positions, and
    /// repeated index separators are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ErrorKind::PathParse`] describing the first
    /// offending segment.
    pub fn parse(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Ok(Self::root());
        }
        let trimmed = input.strip_prefix(SEGMENT_SEPARATOR).unwrap_or(input);
        let mut segments = Vec::new();
        for raw in trimmed.split(SEGMENT_SEPARATOR) {
            segments.push(Self::parse_segment(input, raw)?);
        }
        Ok(Self { segments })
    }

    fn parse_segment(input: &str, raw: &str) -> Result<PathSegment> {
        if raw.is_empty() {
            return Err(Error::path_parse(input, "empty segment"));
        }
        let mut parts = raw.split(INDEX_SEPARATOR);
        let name = parts.next().unwrap_or_default();
        let index = match parts.next() {
            None => None,
            Some(position) => {
                if parts.next().is_some() {
                    return Err(Error::path_parse(input, "segment has multiple positions"));
                }
                match position.parse::<usize>() {
                    Ok(index) => Some(index),
                    Err(_) => {
                        return Err(Error::path_parse(input, "position is not a number"));
                    }
                }
            }
        };
        if name.is_empty() {
            return Err(Error::path_parse(input, "segment has no association name"));
        }
        Ok(PathSegment { name: name.into(), index })
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{SEGMENT_SEPARATOR}")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
