//! Schema definitions for entity types.
//!
//! An [`EntityType`] enumerates the scalar fields and associations of one
//! kind of entity. Types are plain data built once and shared behind `Arc`;
//! entities hold a reference to their type and never copy it.

use std::sync::Arc;

use filigree_foundation::{Error, Result, TypeTag, Value};

/// Schema definition for one scalar field.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSchema {
    /// Field name.
    pub name: String,
    /// Advisory type tag, never enforced at runtime.
    pub tag: TypeTag,
    /// Default value if not provided.
    ///
    /// `None` means no default was declared; `Some(Value::Nil)` and other
    /// falsy defaults are still applied at construction.
    pub default: Option<Value>,
}

impl FieldSchema {
    /// Creates a field with no default.
    #[must_use]
    pub fn new(name: impl Into<String>, tag: TypeTag) -> Self {
        Self {
            name: name.into(),
            tag,
            default: None,
        }
    }

    /// Creates a field with a default value.
    #[must_use]
    pub fn with_default(name: impl Into<String>, tag: TypeTag, default: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            tag,
            default: Some(default.into()),
        }
    }
}

/// Schema definition for one association.
#[derive(Clone, Debug, PartialEq)]
pub struct AssociationSchema {
    /// Association name; must be disjoint from the scalar field names.
    pub name: String,
    /// The entity type on the far side of the association.
    pub target: Arc<EntityType>,
}

impl AssociationSchema {
    /// Creates an association schema.
    #[must_use]
    pub fn new(name: impl Into<String>, target: Arc<EntityType>) -> Self {
        Self {
            name: name.into(),
            target,
        }
    }
}

/// Schema definition for an entity type.
///
/// Built with the `with_*` methods:
///
/// ```
/// use std::sync::Arc;
/// use filigree_foundation::TypeTag;
/// use filigree_graph::{EntityType, FieldSchema};
///
/// let pet = Arc::new(
///     EntityType::new("Pet", "id")
///         .with_field(FieldSchema::new("id", TypeTag::Int))
///         .with_field(FieldSchema::new("name", TypeTag::String)),
/// );
/// let person = EntityType::new("Person", "id")
///     .with_field(FieldSchema::new("id", TypeTag::Int))
///     .with_field(FieldSchema::new("name", TypeTag::String))
///     .with_many("pets", pet);
/// assert!(person.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct EntityType {
    /// Type name, used in diagnostics.
    pub name: String,
    /// Name of the identity attribute.
    pub id_field: String,
    /// Ordered scalar field definitions.
    pub fields: Vec<FieldSchema>,
    /// One-to-one association declarations.
    pub has_one: Vec<AssociationSchema>,
    /// One-to-many association declarations.
    pub has_many: Vec<AssociationSchema>,
}

impl EntityType {
    /// Creates a new entity type with no fields or associations.
    #[must_use]
    pub fn new(name: impl Into<String>, id_field: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id_field: id_field.into(),
            fields: Vec::new(),
            has_one: Vec::new(),
            has_many: Vec::new(),
        }
    }

    /// Adds a scalar field.
    #[must_use]
    pub fn with_field(mut self, field: FieldSchema) -> Self {
        self.fields.push(field);
        self
    }

    /// Adds a one-to-one association.
    #[must_use]
    pub fn with_one(mut self, name: impl Into<String>, target: Arc<EntityType>) -> Self {
        self.has_one.push(AssociationSchema::new(name, target));
        self
    }

    /// Adds a one-to-many association.
    #[must_use]
    pub fn with_many(mut self, name: impl Into<String>, target: Arc<EntityType>) -> Self {
        self.has_many.push(AssociationSchema::new(name, target));
        self
    }

    /// Returns the field schema by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns true if `name` is a declared scalar field.
    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Returns the one-to-one association schema by name.
    #[must_use]
    pub fn one(&self, name: &str) -> Option<&AssociationSchema> {
        self.has_one.iter().find(|a| a.name == name)
    }

    /// Returns the one-to-many association schema by name.
    #[must_use]
    pub fn many(&self, name: &str) -> Option<&AssociationSchema> {
        self.has_many.iter().find(|a| a.name == name)
    }

    /// Returns all association names, one-to-one first.
    pub fn association_names(&self) -> impl Iterator<Item = &str> {
        self.has_one
            .iter()
            .chain(&self.has_many)
            .map(|a| a.name.as_str())
    }

    /// Validates this type's own declarations.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the type declares no fields, or an association
    /// name collides with a scalar field name.
    pub fn validate(&self) -> Result<()> {
        if self.fields.is_empty() {
            return Err(Error::empty_schema(&self.name));
        }
        for assoc in self.has_one.iter().chain(&self.has_many) {
            if self.has_field(&assoc.name) {
                return Err(Error::association_clash(&self.name, &assoc.name));
            }
        }
        Ok(())
    }

    /// Validates this type and every association target reachable from it.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found.
    pub fn validate_deep(&self) -> Result<()> {
        fn walk(ty: &EntityType, seen: &mut Vec<*const EntityType>) -> Result<()> {
            let ptr = std::ptr::from_ref(ty);
            if seen.contains(&ptr) {
                return Ok(());
            }
            seen.push(ptr);
            ty.validate()?;
            for assoc in ty.has_one.iter().chain(&ty.has_many) {
                walk(&assoc.target, seen)?;
            }
            Ok(())
        }
        walk(self, &mut Vec::new())
    }
}
