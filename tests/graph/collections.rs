//! Integration tests for collections
//!
//! Upsert-by-identity-key, positional fallback, ordering, and store-level
//! equality.

use std::sync::Arc;

use filigree::foundation::{TypeTag, Value};
use filigree::graph::{Collection, EntityType, FieldSchema};

fn pet_type() -> Arc<EntityType> {
    Arc::new(
        EntityType::new("Pet", "id")
            .with_field(FieldSchema::new("id", TypeTag::Int))
            .with_field(FieldSchema::new("name", TypeTag::String)),
    )
}

fn pet(id: i64, name: &str) -> Value {
    Value::record([("id", Value::Int(id)), ("name", Value::from(name))])
}

// =============================================================================
// Upsert
// =============================================================================

#[test]
fn duplicate_keys_in_one_batch_collapse() {
    let collection =
        Collection::with_data(pet_type(), &Value::from(vec![pet(1, "Rex"), pet(1, "Rex II")]))
            .unwrap();

    assert_eq!(collection.len(), 1);
    assert_eq!(
        collection.get(&Value::Int(1)).unwrap().get("name"),
        Some(&Value::from("Rex II"))
    );
}

#[test]
fn upsert_replaces_scalar_data_without_growing() {
    let mut collection =
        Collection::with_data(pet_type(), &Value::from(vec![pet(1, "Rex"), pet(2, "Ivy")]))
            .unwrap();

    let before = collection.len();
    collection.set(&pet(2, "Ivy II"));

    assert_eq!(collection.len(), before);
    assert_eq!(
        collection.member(1).unwrap().get("name"),
        Some(&Value::from("Ivy II"))
    );
}

#[test]
fn insertion_order_is_preserved() {
    let collection = Collection::with_data(
        pet_type(),
        &Value::from(vec![pet(3, "c"), pet(1, "a"), pet(2, "b")]),
    )
    .unwrap();

    let names: Vec<_> = collection
        .members()
        .iter()
        .map(|m| m.get("name").cloned().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![Value::from("c"), Value::from("a"), Value::from("b")]
    );
}

#[test]
fn records_without_ids_use_positional_keys() {
    let mut collection = Collection::new(pet_type()).unwrap();
    collection.set(&Value::record([("name", Value::from("first"))]));
    collection.set(&Value::record([("name", Value::from("second"))]));

    // Positional keys are 1-based; updating through one works like any id
    collection.set(&Value::record([
        ("id", Value::Int(1)),
        ("name", Value::from("first, renamed")),
    ]));

    assert_eq!(collection.len(), 2);
    assert_eq!(
        collection.member(0).unwrap().get("name"),
        Some(&Value::from("first, renamed"))
    );
}

// =============================================================================
// Lookup
// =============================================================================

#[test]
fn get_without_population_is_none() {
    let collection = Collection::new(pet_type()).unwrap();
    assert!(collection.get(&Value::Int(1)).is_none());
    assert!(collection.members().is_empty());
}

#[test]
fn get_distinguishes_value_types() {
    let collection = Collection::with_data(pet_type(), &pet(1, "Rex")).unwrap();
    assert!(collection.get(&Value::Int(1)).is_some());
    // The string "1" is a different identity key than the integer 1
    assert!(collection.get(&Value::from("1")).is_none());
}

// =============================================================================
// Equality and query
// =============================================================================

#[test]
fn store_equality_is_ordered_and_shallow() {
    let a = Collection::with_data(pet_type(), &Value::from(vec![pet(1, "a"), pet(2, "b")]))
        .unwrap();
    let b = Collection::with_data(pet_type(), &Value::from(vec![pet(1, "a"), pet(2, "b")]))
        .unwrap();
    let reversed =
        Collection::with_data(pet_type(), &Value::from(vec![pet(2, "b"), pet(1, "a")])).unwrap();

    assert!(a.equals(&b));
    assert!(a.strict_equals(&b));
    assert!(!a.equals(&reversed));
}

#[test]
fn query_concatenates_member_matches() {
    let collection = Collection::with_data(
        pet_type(),
        &Value::from(vec![pet(1, "Rex"), pet(2, "Rex"), pet(3, "Ivy")]),
    )
    .unwrap();

    let matches = collection.query("name", &Value::from("Rex"));
    assert_eq!(matches.len(), 2);
}
