//! Integration tests for entity lifecycle
//!
//! Construction from seed data, serialization, reset, equality levels, and
//! path-based lookup through multi-level graphs.

use std::sync::Arc;

use filigree::foundation::{Path, TypeTag, Value};
use filigree::graph::{Entity, EntityType, FieldSchema};

fn leaf_type() -> Arc<EntityType> {
    Arc::new(
        EntityType::new("Leaf", "id")
            .with_field(FieldSchema::new("id", TypeTag::Int))
            .with_field(FieldSchema::new("label", TypeTag::String)),
    )
}

fn branch_type() -> Arc<EntityType> {
    Arc::new(
        EntityType::new("Branch", "id")
            .with_field(FieldSchema::new("id", TypeTag::Int))
            .with_many("leaves", leaf_type()),
    )
}

fn tree_type() -> Arc<EntityType> {
    Arc::new(
        EntityType::new("Tree", "id")
            .with_field(FieldSchema::new("id", TypeTag::Int))
            .with_field(FieldSchema::new("species", TypeTag::String))
            .with_one("trunk", branch_type()),
    )
}

fn tree_data() -> Value {
    Value::record([
        ("id", Value::Int(1)),
        ("species", Value::from("oak")),
        (
            "trunk",
            Value::record([
                ("id", Value::Int(2)),
                (
                    "leaves",
                    Value::from(vec![
                        Value::record([("id", Value::Int(31)), ("label", Value::from("north"))]),
                        Value::record([("id", Value::Int(32)), ("label", Value::from("south"))]),
                    ]),
                ),
            ]),
        ),
    ])
}

// =============================================================================
// Construction and serialization
// =============================================================================

#[test]
fn seed_data_round_trips_through_a_two_level_graph() {
    let tree = Entity::with_data(tree_type(), &tree_data()).unwrap();
    assert_eq!(tree.to_object(), tree_data());
}

#[test]
fn incremental_set_data_merges_tolerantly() {
    let mut tree = Entity::new(tree_type()).unwrap();
    tree.set_data(&Value::record([("species", Value::from("elm"))]));
    tree.set_data(&Value::record([
        ("id", Value::Int(9)),
        ("rings", Value::Int(140)), // unknown key, ignored
    ]));

    assert_eq!(tree.get("species"), Some(&Value::from("elm")));
    assert_eq!(tree.get("id"), Some(&Value::Int(9)));
    assert_eq!(tree.get("rings"), None);
}

#[test]
fn associations_materialize_lazily_and_empty() {
    let mut tree = Entity::new(tree_type()).unwrap();
    assert!(tree.association_cached("trunk").is_none());

    let trunk = tree.one("trunk").unwrap();
    assert_eq!(trunk.get("id"), Some(&Value::Nil));
    assert!(tree.association_cached("trunk").is_some());
}

// =============================================================================
// Reset
// =============================================================================

#[test]
fn reset_nulls_scalars_and_empties_collections() {
    let mut tree = Entity::with_data(tree_type(), &tree_data()).unwrap();
    tree.reset();

    let object = tree.to_object();
    assert_eq!(object.entry("species"), Some(&Value::Nil));
    let trunk = object.entry("trunk").unwrap();
    assert_eq!(trunk.entry("id"), Some(&Value::Nil));
    assert_eq!(trunk.entry("leaves"), Some(&Value::empty_list()));
}

#[test]
fn reset_does_not_materialize_associations() {
    let mut tree = Entity::new(tree_type()).unwrap();
    tree.reset();
    assert!(tree.association_cached("trunk").is_none());
}

// =============================================================================
// Equality levels
// =============================================================================

#[test]
fn equality_levels_diverge_on_nested_data() {
    let a = Entity::with_data(tree_type(), &tree_data()).unwrap();
    let b = Entity::with_data(tree_type(), &tree_data()).unwrap();
    assert!(a.equals(&b));
    assert!(a.deep_equals(&b));
    assert!(a.strict_equal(&b));

    let mut c = Entity::with_data(tree_type(), &tree_data()).unwrap();
    c.one("trunk")
        .unwrap()
        .many("leaves")
        .unwrap()
        .get_mut(&Value::Int(31))
        .unwrap()
        .set("label", "east");

    assert!(a.equals(&c));
    assert!(!a.deep_equals(&c));
    assert!(!a.strict_equal(&c));
}

#[test]
fn deep_recursion_reaches_the_bottom_of_the_graph() {
    // The divergence is two association levels down; a shallow-per-hop
    // comparison would miss it.
    let a = Entity::with_data(tree_type(), &tree_data()).unwrap();
    let mut altered = tree_data();
    if let Value::Map(ref mut entries) = altered {
        let trunk = entries.get("trunk").unwrap().clone();
        if let Value::Map(mut trunk_entries) = trunk {
            let leaves = trunk_entries.get("leaves").unwrap().clone();
            if let Value::List(mut items) = leaves {
                items.set(
                    1,
                    Value::record([("id", Value::Int(32)), ("label", Value::from("west"))]),
                );
                trunk_entries.insert("leaves".into(), Value::List(items));
            }
            entries.insert("trunk".into(), Value::Map(trunk_entries));
        }
    }
    let b = Entity::with_data(tree_type(), &altered).unwrap();

    assert!(a.equals(&b));
    assert!(!a.deep_equals(&b));
}

// =============================================================================
// Path lookup
// =============================================================================

#[test]
fn find_walks_mixed_association_chains() {
    let mut tree = Entity::with_data(tree_type(), &tree_data()).unwrap();

    let south = tree.find(&Path::parse("trunk/leaves$1").unwrap()).unwrap();
    assert_eq!(south.get("label"), Some(&Value::from("south")));
    assert_eq!(south.path().to_string(), "trunk/leaves$1");
}

#[test]
fn find_returns_none_for_dead_ends() {
    let mut tree = Entity::with_data(tree_type(), &tree_data()).unwrap();

    assert!(tree.find(&Path::parse("trunk/leaves$9").unwrap()).is_none());
    assert!(tree.find(&Path::parse("roots").unwrap()).is_none());
    assert!(tree.find(&Path::parse("trunk$0").unwrap()).is_none());
}

#[test]
fn find_on_the_root_path_returns_the_root() {
    let mut tree = Entity::with_data(tree_type(), &tree_data()).unwrap();
    let root = tree.find(&Path::root()).unwrap();
    assert_eq!(root.get("species"), Some(&Value::from("oak")));
}

// =============================================================================
// Query (experimental)
// =============================================================================

#[test]
fn query_finds_matches_at_every_depth() {
    let tree = Entity::with_data(tree_type(), &tree_data()).unwrap();

    let labels = tree.query("label", &Value::from("north"));
    assert_eq!(labels, vec![Path::parse("trunk/leaves$0").unwrap()]);

    let ids = tree.query("id", &Value::Int(2));
    assert_eq!(ids, vec![Path::parse("trunk").unwrap()]);

    assert!(tree.query("label", &Value::from("missing")).is_empty());
}
