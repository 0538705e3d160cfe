//! Integration tests for plain data values
//!
//! Exercises the `Value` surface the graph layer depends on: truthiness,
//! map access, and structural equality.

use filigree::foundation::Value;

#[test]
fn falsy_values() {
    for v in [
        Value::Nil,
        Value::Bool(false),
        Value::Int(0),
        Value::Float(0.0),
        Value::from(""),
    ] {
        assert!(!v.is_truthy(), "{v:?} should be falsy");
    }
}

#[test]
fn truthy_values() {
    for v in [
        Value::Bool(true),
        Value::Int(1),
        Value::Int(-1),
        Value::Float(0.5),
        Value::from("0"),
        Value::empty_list(),
        Value::empty_map(),
    ] {
        assert!(v.is_truthy(), "{v:?} should be truthy");
    }
}

#[test]
fn record_construction_and_lookup() {
    let record = Value::record([
        ("id", Value::Int(1)),
        ("tags", Value::from(vec!["a", "b"])),
    ]);

    assert_eq!(record.entry("id"), Some(&Value::Int(1)));
    let tags = record.entry("tags").unwrap().as_list().unwrap();
    assert_eq!(tags.len(), 2);
}

#[test]
fn nested_records_compare_structurally() {
    let a = Value::record([("child", Value::record([("id", Value::Int(1))]))]);
    let b = Value::record([("child", Value::record([("id", Value::Int(1))]))]);
    let c = Value::record([("child", Value::record([("id", Value::Int(2))]))]);

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn cloning_is_cheap_and_independent() {
    let original = Value::record([("items", Value::from(vec![1i32, 2, 3]))]);
    let copy = original.clone();

    // Persistent structures: both views stay equal and valid
    assert_eq!(original, copy);
}

#[test]
fn display_renders_nested_data() {
    let record = Value::record([("id", Value::Int(1))]);
    assert_eq!(record.to_string(), "{id: 1}");
    assert_eq!(Value::from(vec![1i32, 2]).to_string(), "[1, 2]");
    assert_eq!(Value::Nil.to_string(), "nil");
}
