//! Copy-on-write construction and targeted merges.
//!
//! [`Immutable`] wraps an entity type and operates on graphs it does not
//! own. A merge clones the whole graph by serializing it to plain data and
//! reconstructing a fresh root, then mutates exactly one addressed node in
//! the clone. The input graph, and every node reachable from it, is
//! observably unchanged afterwards, so callers can safely retain prior
//! snapshots.

use std::sync::Arc;

use filigree_foundation::{Error, Path, Result, Value};

use crate::collection::Collection;
use crate::entity::Entity;
use crate::schema::EntityType;

/// Copy-on-write façade over an entity type.
///
/// Stateless apart from the wrapped type.
#[derive(Clone, Debug)]
pub struct Immutable {
    ty: Arc<EntityType>,
}

impl Immutable {
    /// Creates a façade for the given entity type.
    #[must_use]
    pub const fn new(ty: Arc<EntityType>) -> Self {
        Self { ty }
    }

    /// Returns the wrapped entity type.
    #[must_use]
    pub fn entity_type(&self) -> &Arc<EntityType> {
        &self.ty
    }

    /// Constructs a new root entity of the wrapped type from plain data.
    ///
    /// Pure relative to its input; always yields a fresh instance.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the wrapped type fails validation.
    pub fn from_value(&self, data: &Value) -> Result<Entity> {
        Entity::with_data(Arc::clone(&self.ty), data)
    }

    /// Clones the graph rooted at `model` and applies `data` within the clone.
    ///
    /// With a `target` path, the patch is applied to the clone's
    /// corresponding node alone; without one, it is applied at the root.
    /// `model` itself is never mutated.
    ///
    /// # Errors
    ///
    /// Returns [`Error::target_not_found`] if `target` does not resolve in
    /// the clone, and configuration errors as in [`Immutable::from_value`].
    pub fn merge(&self, model: &Entity, data: &Value, target: Option<&Path>) -> Result<Entity> {
        let mut clone = self.from_value(&model.to_object())?;
        match target {
            None => clone.set_data(data),
            Some(path) => {
                let node = clone
                    .find(path)
                    .ok_or_else(|| Error::target_not_found(path.clone()))?;
                node.set_data(data);
            }
        }
        Ok(clone)
    }

    /// Compares `record` against the collection member sharing its identity key.
    ///
    /// Equal if the member is the same reference as `record` or satisfies
    /// shallow `equals`; false when `record` has no identity value or no
    /// member matches it.
    #[must_use]
    pub fn compare(collection: &Collection, record: &Entity) -> bool {
        let Some(id) = record.id() else {
            return false;
        };
        match collection.get(id) {
            Some(member) => std::ptr::eq(member, record) || member.equals(record),
            None => false,
        }
    }

    /// Serializes a graph to plain nested data.
    #[must_use]
    pub fn to_value(model: &Entity) -> Value {
        model.to_object()
    }
}
