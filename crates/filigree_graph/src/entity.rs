//! Schema-bound entity graph nodes.
//!
//! An [`Entity`] binds an [`EntityType`](crate::schema::EntityType) to live
//! state: one [`Attribute`] per scalar field and a lazily materialized
//! [`Association`] per declared relation. Associations are created empty the
//! first time they are accessed and memoized; seed data routes into them
//! recursively through [`Entity::set_data`].

use std::collections::HashMap;
use std::sync::Arc;

use filigree_foundation::value::Map;
use filigree_foundation::{Path, PathSegment, Result, Value};

use crate::attribute::Attribute;
use crate::collection::Collection;
use crate::schema::EntityType;

/// A materialized association target.
///
/// Which variant an association materializes to is decided by the schema at
/// construction, not by probing the data at runtime.
#[derive(Clone, Debug)]
pub enum Association {
    /// One-to-one: a single child entity.
    One(Entity),
    /// One-to-many: a collection of child entities.
    Many(Collection),
}

impl Association {
    /// Routes nested data into the target.
    pub fn set_data(&mut self, data: &Value) {
        match self {
            Self::One(entity) => entity.set_data(data),
            Self::Many(collection) => collection.set(data),
        }
    }

    /// Serializes the target to plain nested data.
    #[must_use]
    pub fn to_object(&self) -> Value {
        match self {
            Self::One(entity) => entity.to_object(),
            Self::Many(collection) => collection.to_object(),
        }
    }

    /// Recursively clears the target.
    pub fn reset(&mut self) {
        match self {
            Self::One(entity) => entity.reset(),
            Self::Many(collection) => collection.reset(),
        }
    }
}

/// A schema-bound node in an entity graph.
#[derive(Clone, Debug)]
pub struct Entity {
    ty: Arc<EntityType>,
    attributes: HashMap<String, Attribute>,
    associations: HashMap<String, Association>,
    path: Path,
}

impl Entity {
    /// Creates an empty entity of the given type.
    ///
    /// Defaults declared in the schema are applied to the new attributes.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the type (or any association target
    /// type reachable from it) declares no fields, or declares an
    /// association whose name collides with a scalar field.
    pub fn new(ty: Arc<EntityType>) -> Result<Self> {
        ty.validate_deep()?;
        Ok(Self::from_validated(ty, Path::root()))
    }

    /// Creates an entity of the given type and applies seed data.
    ///
    /// # Errors
    ///
    /// Same configuration errors as [`Entity::new`]; seed data itself never
    /// fails (unknown keys are ignored).
    pub fn with_data(ty: Arc<EntityType>, data: &Value) -> Result<Self> {
        let mut entity = Self::new(ty)?;
        entity.set_data(data);
        Ok(entity)
    }

    /// Builds an entity for a type that has already been validated.
    pub(crate) fn from_validated(ty: Arc<EntityType>, path: Path) -> Self {
        let attributes = ty
            .fields
            .iter()
            .map(|field| (field.name.clone(), Attribute::from_schema(field)))
            .collect();
        Self {
            ty,
            attributes,
            associations: HashMap::new(),
            path,
        }
    }

    /// Returns this entity's type.
    #[must_use]
    pub fn entity_type(&self) -> &Arc<EntityType> {
        &self.ty
    }

    /// Returns this entity's position in its graph.
    ///
    /// Root entities have the empty path; the path is assigned as the entity
    /// is attached into a parent entity or collection.
    #[must_use]
    pub const fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the value of the identity attribute, if declared as a field.
    #[must_use]
    pub fn id(&self) -> Option<&Value> {
        self.get(&self.ty.id_field)
    }

    /// Returns a scalar attribute's value.
    ///
    /// Associations are not reachable through `get`; use
    /// [`Entity::association`] for those.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name).map(Attribute::get)
    }

    /// Returns all scalar field values as a map, in no particular order.
    ///
    /// This is the shallow view: association data is excluded.
    #[must_use]
    pub fn values(&self) -> Value {
        let entries: Map = self
            .ty
            .fields
            .iter()
            .filter_map(|field| {
                self.get(&field.name)
                    .map(|value| (field.name.clone(), value.clone()))
            })
            .collect();
        Value::Map(entries)
    }

    /// Sets a single scalar attribute.
    ///
    /// Applied only when `name` is a declared scalar field; anything else is
    /// silently ignored (tolerant merge policy).
    pub fn set(&mut self, name: &str, value: impl Into<Value>) {
        if let Some(attribute) = self.attributes.get_mut(name) {
            attribute.set(value);
        }
    }

    /// Applies a data map to this entity, key by key.
    ///
    /// Declared scalar fields route to their attributes. A key naming a
    /// one-to-one association with a truthy value routes into the child
    /// entity, materializing it on first use; a one-to-many key routes into
    /// the collection the same way. Unknown keys and non-map data are
    /// silently ignored.
    pub fn set_data(&mut self, data: &Value) {
        let Some(entries) = data.as_map() else { return };
        for (key, value) in entries {
            if self.ty.has_field(key) {
                self.set(key, value.clone());
                continue;
            }
            if !value.is_truthy() {
                continue;
            }
            if let Some(association) = self.association(key) {
                association.set_data(value);
            }
        }
    }

    /// Returns the materialized target of a declared association.
    ///
    /// The target is created empty on first access, with its path assigned,
    /// and memoized for the entity's lifetime. Returns `None` for names that
    /// are not declared associations.
    pub fn association(&mut self, name: &str) -> Option<&mut Association> {
        if !self.associations.contains_key(name) {
            let created = if let Some(schema) = self.ty.one(name) {
                Association::One(Self::from_validated(
                    Arc::clone(&schema.target),
                    self.path.child(name),
                ))
            } else if let Some(schema) = self.ty.many(name) {
                Association::Many(Collection::from_validated(
                    Arc::clone(&schema.target),
                    self.path.child(name),
                ))
            } else {
                return None;
            };
            self.associations.insert(name.to_string(), created);
        }
        self.associations.get_mut(name)
    }

    /// Returns an association target only if it has been materialized.
    #[must_use]
    pub fn association_cached(&self, name: &str) -> Option<&Association> {
        self.associations.get(name)
    }

    /// Returns the child entity of a one-to-one association.
    pub fn one(&mut self, name: &str) -> Option<&mut Entity> {
        match self.association(name)? {
            Association::One(entity) => Some(entity),
            Association::Many(_) => None,
        }
    }

    /// Returns the collection of a one-to-many association.
    pub fn many(&mut self, name: &str) -> Option<&mut Collection> {
        match self.association(name)? {
            Association::Many(collection) => Some(collection),
            Association::One(_) => None,
        }
    }

    /// Serializes the full graph rooted here to plain nested data.
    ///
    /// Scalar fields appear by name; every one-to-one association appears as
    /// a nested map and every one-to-many association as an ordered list.
    /// Unmaterialized associations serialize as a fresh default target
    /// (empty list, or an entity carrying only schema defaults) without
    /// being cached.
    #[must_use]
    pub fn to_object(&self) -> Value {
        let mut entries = Map::new();
        for field in &self.ty.fields {
            if let Some(value) = self.get(&field.name) {
                entries.insert(field.name.clone(), value.clone());
            }
        }
        for schema in &self.ty.has_one {
            let nested = match self.associations.get(&schema.name) {
                Some(association) => association.to_object(),
                None => Self::from_validated(Arc::clone(&schema.target), Path::root()).to_object(),
            };
            entries.insert(schema.name.clone(), nested);
        }
        for schema in &self.ty.has_many {
            let nested = match self.associations.get(&schema.name) {
                Some(association) => association.to_object(),
                None => Value::empty_list(),
            };
            entries.insert(schema.name.clone(), nested);
        }
        Value::Map(entries)
    }

    /// Clears all data in the graph rooted here.
    ///
    /// Every scalar attribute becomes nil, and every materialized
    /// association is recursively reset. Unmaterialized associations are
    /// left untouched; accessing one later still creates it lazily, with no
    /// implicit data.
    pub fn reset(&mut self) {
        for attribute in self.attributes.values_mut() {
            attribute.set(Value::Nil);
        }
        for association in self.associations.values_mut() {
            association.reset();
        }
    }

    /// Shallow equality: scalar field values in schema order.
    ///
    /// The first mismatch short-circuits. Association data is ignored, so
    /// two entities differing only in nested data are still `equals`.
    #[must_use]
    pub fn equals(&self, other: &Entity) -> bool {
        self.ty
            .fields
            .iter()
            .all(|field| self.get(&field.name) == other.get(&field.name))
    }

    /// Deep equality: shallow equality plus every association's graph.
    ///
    /// Recursion is fully deep: each association hop compares the entire
    /// nested graph, not just that level's scalars.
    #[must_use]
    pub fn deep_equals(&self, other: &Entity) -> bool {
        if !self.equals(other) {
            return false;
        }
        self.ty
            .association_names()
            .all(|name| self.association_object(name) == other.association_object(name))
    }

    /// Strict equality: reference identity, else [`Entity::deep_equals`].
    ///
    /// Two referentially distinct but data-identical graphs pass.
    #[must_use]
    pub fn strict_equal(&self, other: &Entity) -> bool {
        std::ptr::eq(self, other) || self.deep_equals(other)
    }

    /// Serializes one declared association without materializing it.
    fn association_object(&self, name: &str) -> Option<Value> {
        if let Some(association) = self.associations.get(name) {
            return Some(association.to_object());
        }
        if let Some(schema) = self.ty.one(name) {
            return Some(
                Self::from_validated(Arc::clone(&schema.target), Path::root()).to_object(),
            );
        }
        if self.ty.many(name).is_some() {
            return Some(Value::empty_list());
        }
        None
    }

    /// Resolves the node addressed by `path`, relative to this entity.
    ///
    /// Each segment names an association to hop through; indexed segments
    /// additionally select a collection member. The resolved node is
    /// returned only if its own recorded path equals the requested one,
    /// which guards against malformed or rebuilt paths; anything that does
    /// not resolve yields `None` rather than an error.
    pub fn find(&mut self, path: &Path) -> Option<&mut Entity> {
        let requested = path.clone();
        let found = self.resolve(path.segments())?;
        if found.path == requested {
            Some(found)
        } else {
            None
        }
    }

    fn resolve(&mut self, segments: &[PathSegment]) -> Option<&mut Entity> {
        let Some((hop, rest)) = segments.split_first() else {
            return Some(self);
        };
        match self.association(&hop.name)? {
            Association::One(child) => match hop.index {
                None => child.resolve(rest),
                Some(_) => None,
            },
            Association::Many(collection) => {
                collection.member_mut(hop.index?)?.resolve(rest)
            }
        }
    }

    /// Depth-first search for entities whose `field` equals `value`.
    ///
    /// Returns the path of each matching entity; resolve them with
    /// [`Entity::find`]. Only materialized associations are visited, which
    /// is equivalent to visiting everything: an unmaterialized association
    /// holds no data. Experimental; excluded from correctness guarantees.
    #[must_use]
    pub fn query(&self, field: &str, value: &Value) -> Vec<Path> {
        let mut matches = Vec::new();
        self.collect_matches(field, value, &mut matches);
        matches
    }

    pub(crate) fn collect_matches(&self, field: &str, value: &Value, matches: &mut Vec<Path>) {
        if self.get(field) == Some(value) {
            matches.push(self.path.clone());
        }
        for name in self.ty.association_names() {
            match self.associations.get(name) {
                Some(Association::One(entity)) => entity.collect_matches(field, value, matches),
                Some(Association::Many(collection)) => {
                    for member in collection.members() {
                        member.collect_matches(field, value, matches);
                    }
                }
                None => {}
            }
        }
    }
}
