//! Ordered, id-indexed entity collections.
//!
//! A [`Collection`] stores entity instances of one declared type in
//! insertion order, indexed by identity key for upsert-by-id. Collections
//! back every one-to-many association and can also stand alone as a root
//! store.

use std::collections::HashMap;
use std::sync::Arc;

use filigree_foundation::{Path, Result, Value};

use crate::entity::Entity;
use crate::schema::EntityType;

/// An ordered, id-indexed set of entities of one type.
#[derive(Clone, Debug)]
pub struct Collection {
    member_type: Arc<EntityType>,
    members: Vec<Entity>,
    index: HashMap<Value, usize>,
    path: Path,
}

impl Collection {
    /// Creates an empty collection of the given member type.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the member type (or any association
    /// target reachable from it) fails validation.
    pub fn new(member_type: Arc<EntityType>) -> Result<Self> {
        member_type.validate_deep()?;
        Ok(Self::from_validated(member_type, Path::root()))
    }

    /// Creates a collection and applies seed data.
    ///
    /// The seed may be a single record or a list of records.
    ///
    /// # Errors
    ///
    /// Same configuration errors as [`Collection::new`].
    pub fn with_data(member_type: Arc<EntityType>, data: &Value) -> Result<Self> {
        let mut collection = Self::new(member_type)?;
        collection.set(data);
        Ok(collection)
    }

    /// Builds a collection for a type that has already been validated.
    pub(crate) fn from_validated(member_type: Arc<EntityType>, path: Path) -> Self {
        Self {
            member_type,
            members: Vec::new(),
            index: HashMap::new(),
            path,
        }
    }

    /// Returns the declared member type.
    #[must_use]
    pub fn member_type(&self) -> &Arc<EntityType> {
        &self.member_type
    }

    /// Returns this collection's position in its graph.
    #[must_use]
    pub const fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the collection has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Upserts one record or a list of records.
    ///
    /// Each record's identity key is the truthy value of the member type's
    /// id field, or a 1-based positional fallback when that value is absent
    /// or falsy. A record whose key is already indexed updates the existing
    /// member in place; a new key appends a member whose path is assigned
    /// exactly once, at insertion. Non-map records are silently ignored
    /// (tolerant merge policy).
    pub fn set(&mut self, data: &Value) {
        match data {
            Value::List(records) => {
                for record in records {
                    self.upsert(record);
                }
            }
            record => self.upsert(record),
        }
    }

    #[allow(clippy::cast_possible_wrap)]
    fn upsert(&mut self, record: &Value) {
        if record.as_map().is_none() {
            return;
        }
        let key = record
            .entry(&self.member_type.id_field)
            .filter(|id| id.is_truthy())
            .cloned()
            .unwrap_or_else(|| Value::Int(self.members.len() as i64 + 1));

        if let Some(&position) = self.index.get(&key) {
            self.members[position].set_data(record);
        } else {
            let position = self.members.len();
            let mut member =
                Entity::from_validated(Arc::clone(&self.member_type), self.path.indexed(position));
            member.set_data(record);
            self.index.insert(key, position);
            self.members.push(member);
        }
    }

    /// Returns the member whose identity key equals `id`.
    #[must_use]
    pub fn get(&self, id: &Value) -> Option<&Entity> {
        self.index.get(id).and_then(|&position| self.members.get(position))
    }

    /// Returns the member whose identity key equals `id`, mutably.
    pub fn get_mut(&mut self, id: &Value) -> Option<&mut Entity> {
        let position = *self.index.get(id)?;
        self.members.get_mut(position)
    }

    /// Returns the member at `position` in insertion order.
    #[must_use]
    pub fn member(&self, position: usize) -> Option<&Entity> {
        self.members.get(position)
    }

    /// Returns the member at `position` in insertion order, mutably.
    pub fn member_mut(&mut self, position: usize) -> Option<&mut Entity> {
        self.members.get_mut(position)
    }

    /// Returns the full ordered member sequence.
    #[must_use]
    pub fn members(&self) -> &[Entity] {
        &self.members
    }

    /// Serializes all members, in order, to plain nested data.
    #[must_use]
    pub fn to_object(&self) -> Value {
        self.members.iter().map(Entity::to_object).collect()
    }

    /// Clears all members and the identity index.
    pub fn reset(&mut self) {
        self.members.clear();
        self.index.clear();
    }

    /// Shallow equality: same member count, pairwise-`equals` members in order.
    #[must_use]
    pub fn equals(&self, other: &Collection) -> bool {
        self.members.len() == other.members.len()
            && self
                .members
                .iter()
                .zip(&other.members)
                .all(|(a, b)| a.equals(b))
    }

    /// Strict equality: reference identity, else [`Collection::equals`].
    #[must_use]
    pub fn strict_equals(&self, other: &Collection) -> bool {
        std::ptr::eq(self, other) || self.equals(other)
    }

    /// Depth-first search across all members for entities whose `field`
    /// equals `value`. Experimental; same caveats as `Entity::query`.
    #[must_use]
    pub fn query(&self, field: &str, value: &Value) -> Vec<Path> {
        let mut matches = Vec::new();
        for member in &self.members {
            member.collect_matches(field, value, &mut matches);
        }
        matches
    }
}
