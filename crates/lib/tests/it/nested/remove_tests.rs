//! Removal tests for remove_nested_field

use orderedmap::{OrderedMap, Value, remove_nested_field};

use crate::helpers::{child_map, keys_of, setup_nested_doc, setup_removal_doc};

#[test]
fn test_remove_nested_field() {
    let mut obj = setup_removal_doc();

    remove_nested_field(&mut obj, &["x", "a"]);
    assert_eq!(child_map(&obj, "x").len(), 1);

    remove_nested_field(&mut obj, &["x", "y"]);
    assert!(child_map(&obj, "x").is_zero());

    remove_nested_field(&mut obj, &["x"]);
    assert!(obj.is_zero());

    // Remove of a non-existent field
    remove_nested_field(&mut obj, &["x"]);
    assert!(obj.is_zero());
}

#[test]
fn test_remove_is_idempotent() {
    let mut once = setup_nested_doc();
    remove_nested_field(&mut once, &["a", "b"]);

    let mut twice = setup_nested_doc();
    remove_nested_field(&mut twice, &["a", "b"]);
    remove_nested_field(&mut twice, &["a", "b"]);

    assert_eq!(once, twice);
}

#[test]
fn test_remove_keeps_sibling_order() {
    let mut doc = setup_nested_doc();

    remove_nested_field(&mut doc, &["a", "c"]);

    assert_eq!(keys_of(child_map(&doc, "a")), vec!["b", "d", "e"]);
}

#[test]
fn test_remove_missing_paths_is_noop() {
    let mut doc = setup_nested_doc();

    // Missing intermediate
    remove_nested_field(&mut doc, &["a", "g", "f"]);
    // Null intermediate
    remove_nested_field(&mut doc, &["a", "c", "f"]);
    // List intermediate
    remove_nested_field(&mut doc, &["a", "d", "foo"]);
    // Scalar intermediate
    remove_nested_field(&mut doc, &["a", "b", "foo", "bar"]);
    // Index syntax
    remove_nested_field(&mut doc, &["a", "e[0]"]);
    // Missing final key
    remove_nested_field(&mut doc, &["a", "zzz"]);

    assert_eq!(doc, setup_nested_doc());
}

#[test]
fn test_remove_null_value() {
    let mut doc = OrderedMap::new().with("n", Value::Null).with("k", 1);

    remove_nested_field(&mut doc, &["n"]);

    assert_eq!(doc.entry("n"), None);
    assert_eq!(keys_of(&doc), vec!["k"]);
}
