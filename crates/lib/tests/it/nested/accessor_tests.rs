//! Typed accessor tests

use orderedmap::{
    List, OrderedMap, Value, nested_bool, nested_float64, nested_int64, nested_map, nested_slice,
    nested_string, nested_string_slice,
};

fn setup_typed_doc() -> OrderedMap {
    let spec = OrderedMap::new()
        .with("name", "web")
        .with("replicas", 3)
        .with("ratio", 0.5)
        .with("paused", false)
        .with("ports", List::from_iter(["http", "https"]))
        .with("mixed", List::from_iter([Value::from("a"), Value::from(1)]))
        .with("labels", OrderedMap::new().with("tier", "frontend"))
        .with("nothing", Value::Null);

    OrderedMap::new().with("spec", spec)
}

#[test]
fn test_scalar_accessors() {
    let doc = setup_typed_doc();

    assert_eq!(nested_string(&doc, &["spec", "name"]), Ok(Some("web".to_string())));
    assert_eq!(nested_int64(&doc, &["spec", "replicas"]), Ok(Some(3)));
    assert_eq!(nested_float64(&doc, &["spec", "ratio"]), Ok(Some(0.5)));
    assert_eq!(nested_bool(&doc, &["spec", "paused"]), Ok(Some(false)));
}

#[test]
fn test_accessors_return_none_when_missing() {
    let doc = setup_typed_doc();

    assert_eq!(nested_string(&doc, &["spec", "missing"]), Ok(None));
    assert_eq!(nested_int64(&doc, &["spec", "nothing", "x"]), Ok(None));
    assert_eq!(nested_map(&doc, &["status"]), Ok(None));
}

#[test]
fn test_accessors_reject_wrong_type() {
    let doc = setup_typed_doc();

    let err = nested_int64(&doc, &["spec", "name"]).unwrap_err();
    assert!(err.is_type_error());
    assert_eq!(
        err.to_string(),
        "spec.name accessor error: expected int, found text"
    );

    // Integers are not widened to floats
    assert!(nested_float64(&doc, &["spec", "replicas"]).is_err());

    // A stored null is found, and is not a string
    let err = nested_string(&doc, &["spec", "nothing"]).unwrap_err();
    assert_eq!(err.found(), Some("null"));
}

#[test]
fn test_accessors_propagate_traversal_errors() {
    let doc = setup_typed_doc();

    let err = nested_string(&doc, &["spec", "name", "first"]).unwrap_err();
    assert!(err.is_traversal_error());
}

#[test]
fn test_map_and_slice_accessors_copy() {
    let doc = setup_typed_doc();

    let mut labels = nested_map(&doc, &["spec", "labels"]).unwrap().unwrap();
    labels.set("tier", "backend");
    assert_eq!(
        nested_string(&doc, &["spec", "labels", "tier"]),
        Ok(Some("frontend".to_string()))
    );

    let mut ports = nested_slice(&doc, &["spec", "ports"]).unwrap().unwrap();
    ports.push("grpc");
    assert_eq!(ports.len(), 3);
    assert_eq!(
        nested_slice(&doc, &["spec", "ports"]).unwrap().map(|l| l.len()),
        Some(2)
    );
}

#[test]
fn test_string_slice_accessor() {
    let doc = setup_typed_doc();

    assert_eq!(
        nested_string_slice(&doc, &["spec", "ports"]),
        Ok(Some(vec!["http".to_string(), "https".to_string()]))
    );

    let err = nested_string_slice(&doc, &["spec", "mixed"]).unwrap_err();
    assert_eq!(err.path(), Some("spec.mixed[1]"));

    let err = nested_string_slice(&doc, &["spec", "name"]).unwrap_err();
    assert_eq!(err.found(), Some("text"));
}
