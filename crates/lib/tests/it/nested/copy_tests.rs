//! Copying lookup tests for nested_field_copy

use orderedmap::{Value, nested_field_copy, nested_field_no_copy_mut};

use crate::helpers::{setup_nested_doc, target_map};

#[test]
fn test_found_map_is_an_independent_copy() {
    let mut doc = setup_nested_doc();

    let res = nested_field_copy(&doc, &["a", "b"]).unwrap();
    assert_eq!(res, Some(Value::Map(target_map())));

    // Mutate the source after copying
    if let Some(Value::Map(target)) = nested_field_no_copy_mut(&mut doc, &["a", "b"]).unwrap() {
        target.set("foo", "baz");
    }

    let copy = res.unwrap();
    let copied_foo = copy.as_map().and_then(|m| m.entry("foo"));
    assert_eq!(copied_foo, Some(&Value::from("bar")), "result should be a copy");
}

#[test]
fn test_mutating_copy_leaves_document_alone() {
    let doc = setup_nested_doc();

    let mut copy = nested_field_copy(&doc, &["a"]).unwrap().unwrap();
    if let Some(a) = copy.as_map_mut() {
        a.remove("b");
        a.set("new", 1);
    }

    assert_eq!(doc, setup_nested_doc());
}

#[test]
fn test_field_exists_and_is_null() {
    let doc = setup_nested_doc();

    assert_eq!(nested_field_copy(&doc, &["a", "c"]), Ok(Some(Value::Null)));
}

#[test]
fn test_error_traversing_obj() {
    let doc = setup_nested_doc();

    let err = nested_field_copy(&doc, &["a", "d", "foo"]).unwrap_err();
    assert!(err.is_traversal_error());
}

#[test]
fn test_field_does_not_exist() {
    let doc = setup_nested_doc();

    assert_eq!(nested_field_copy(&doc, &["a", "g"]), Ok(None));
    assert_eq!(nested_field_copy(&doc, &["a", "c", "f"]), Ok(None));
    assert_eq!(nested_field_copy(&doc, &["a", "e[0]"]), Ok(None));
}

#[test]
fn test_scalar_copy() {
    let doc = setup_nested_doc();

    assert_eq!(
        nested_field_copy(&doc, &["a", "b", "foo"]),
        Ok(Some(Value::from("bar")))
    );
}
