//! Advisory type tags for schema fields.

use std::fmt;
use std::str::FromStr;

/// Advisory type metadata attached to a schema field.
///
/// Tags describe the intended shape of a field's data but are never enforced:
/// setting a string into an `Int`-tagged attribute succeeds. They exist for
/// documentation, tooling, and debugging output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeTag {
    /// No particular shape expected.
    #[default]
    Any,
    /// Boolean.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// String.
    String,
    /// Ordered sequence.
    List,
    /// Record keyed by name.
    Map,
}

impl TypeTag {
    /// Returns the canonical lowercase name of this tag.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::List => "list",
            Self::Map => "map",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TypeTag {
    type Err = ();

    /// Parses a tag name; anything unrecognized is `Any` (tags are advisory).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "bool" => Self::Bool,
            "int" | "number" => Self::Int,
            "float" => Self::Float,
            "string" => Self::String,
            "list" => Self::List,
            "map" => Self::Map,
            _ => Self::Any,
        })
    }
}
