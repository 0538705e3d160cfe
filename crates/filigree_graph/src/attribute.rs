//! Per-entity scalar state.
//!
//! Attributes are never built directly by callers; `Entity` configures one
//! per schema field at construction time.

use filigree_foundation::{TypeTag, Value};

use crate::schema::FieldSchema;

/// One scalar value plus its declared default.
///
/// An attribute belongs to exactly one entity and is never shared. Setting a
/// value replaces it unconditionally; the advisory type tag is not checked.
#[derive(Clone, Debug, PartialEq)]
pub struct Attribute {
    name: String,
    tag: TypeTag,
    value: Value,
    default: Option<Value>,
}

impl Attribute {
    /// Creates an attribute from its field schema, applying the declared
    /// default if one exists.
    ///
    /// A declared falsy default (`false`, `0`, the empty string) is still
    /// applied; only an undeclared default leaves the value nil.
    #[must_use]
    pub fn from_schema(schema: &FieldSchema) -> Self {
        let value = schema.default.clone().unwrap_or(Value::Nil);
        Self {
            name: schema.name.clone(),
            tag: schema.tag,
            value,
            default: schema.default.clone(),
        }
    }

    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the advisory type tag.
    #[must_use]
    pub const fn tag(&self) -> TypeTag {
        self.tag
    }

    /// Returns the declared default, if any.
    #[must_use]
    pub const fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Returns the current value.
    #[must_use]
    pub const fn get(&self) -> &Value {
        &self.value
    }

    /// Replaces the current value.
    pub fn set(&mut self, value: impl Into<Value>) {
        self.value = value.into();
    }
}
