//! Nested field access for ordered documents.
//!
//! These functions walk a path (an ordered slice of keys) from a root
//! [`OrderedMap`] down through nested maps. Every lookup distinguishes three
//! outcomes:
//!
//! - `Ok(Some(value))` - the path exists (the value may be [`Value::Null`])
//! - `Ok(None)` - the path is not present: a key is missing, or a null sits
//!   where a map was needed
//! - `Err(NestedFieldError::NotAMap { .. })` - the path is structurally
//!   impossible: a non-final key holds a scalar or a list
//!
//! Keys are opaque strings. Nothing is parsed out of them, so `items[0]` is an
//! ordinary key and indexing into lists is not supported.
//!
//! # Access Modes
//!
//! - [`nested_field_no_copy`] borrows the value inside the document.
//! - [`nested_field_no_copy_mut`] borrows it mutably; writes land in the document.
//! - [`nested_field_copy`] returns an independent deep copy of just that value.
//!
//! ```
//! use orderedmap::{OrderedMap, Value, nested_field_copy, nested_field_no_copy};
//!
//! let mut doc = OrderedMap::new();
//! doc.set("spec", OrderedMap::new().with("replicas", 3).with("paused", Value::Null));
//!
//! assert_eq!(nested_field_no_copy(&doc, &["spec", "replicas"])?, Some(&Value::Int(3)));
//! assert_eq!(nested_field_no_copy(&doc, &["spec", "paused"])?, Some(&Value::Null));
//! assert_eq!(nested_field_no_copy(&doc, &["spec", "missing"])?, None);
//!
//! // Descending through a scalar is an error
//! assert!(nested_field_copy(&doc, &["spec", "replicas", "x"]).is_err());
//! # Ok::<(), orderedmap::NestedFieldError>(())
//! ```

use tracing::{debug, trace};

use crate::map::{List, OrderedMap, Value};

pub mod errors;

pub use errors::NestedFieldError;

/// Result type for nested field operations.
pub type Result<T> = std::result::Result<T, NestedFieldError>;

/// Joins keys with dots for error messages and log fields.
fn field_path<K: AsRef<str>>(keys: &[K]) -> String {
    keys.iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(".")
}

/// Walks `keys` from `map` and returns the map they lead to.
fn descend<'a, K: AsRef<str>>(map: &'a OrderedMap, keys: &[K]) -> Result<Option<&'a OrderedMap>> {
    let mut current = map;
    for (i, key) in keys.iter().enumerate() {
        current = match current.entry(key) {
            Some(Value::Map(child)) => child,
            Some(Value::Null) => {
                trace!(path = %field_path(&keys[..=i]), "null intermediate field");
                return Ok(None);
            }
            Some(other) => {
                return Err(NestedFieldError::NotAMap {
                    path: field_path(&keys[..=i]),
                    found: other.type_name(),
                });
            }
            None => {
                trace!(path = %field_path(&keys[..=i]), "intermediate field not found");
                return Ok(None);
            }
        };
    }
    Ok(Some(current))
}

/// Mutable counterpart of [`descend`]. Never creates anything.
fn descend_mut<'a, K: AsRef<str>>(
    map: &'a mut OrderedMap,
    keys: &[K],
) -> Result<Option<&'a mut OrderedMap>> {
    let mut current = map;
    for (i, key) in keys.iter().enumerate() {
        current = match current.get_mut(key) {
            Some(Value::Map(child)) => child,
            Some(Value::Null) | None => {
                trace!(path = %field_path(&keys[..=i]), "intermediate field not present");
                return Ok(None);
            }
            Some(other) => {
                return Err(NestedFieldError::NotAMap {
                    path: field_path(&keys[..=i]),
                    found: other.type_name(),
                });
            }
        };
    }
    Ok(Some(current))
}

/// Returns a reference to the value at `keys`, without copying it.
///
/// The reference borrows from `map`, so the document cannot change while the
/// result is alive. Use [`nested_field_no_copy_mut`] to write through the
/// result, or [`nested_field_copy`] to keep a value that outlives later edits.
///
/// An empty path has no target and resolves to `Ok(None)`.
pub fn nested_field_no_copy<'a, K: AsRef<str>>(
    map: &'a OrderedMap,
    keys: &[K],
) -> Result<Option<&'a Value>> {
    let Some((last, parents)) = keys.split_last() else {
        return Ok(None);
    };
    Ok(descend(map, parents)?.and_then(|parent| parent.entry(last)))
}

/// Returns a mutable reference to the value at `keys`.
///
/// Changes made through the returned reference are changes to `map` itself.
///
/// ```
/// # use orderedmap::{OrderedMap, nested_field_no_copy_mut};
/// let mut doc = OrderedMap::new().with("a", OrderedMap::new().with("b", 1));
/// if let Some(value) = nested_field_no_copy_mut(&mut doc, &["a", "b"])? {
///     *value = 2.into();
/// }
/// assert_eq!(doc.to_string(), r#"{"a": {"b": 2}}"#);
/// # Ok::<(), orderedmap::NestedFieldError>(())
/// ```
pub fn nested_field_no_copy_mut<'a, K: AsRef<str>>(
    map: &'a mut OrderedMap,
    keys: &[K],
) -> Result<Option<&'a mut Value>> {
    let Some((last, parents)) = keys.split_last() else {
        return Ok(None);
    };
    Ok(descend_mut(map, parents)?.and_then(|parent| parent.get_mut(last)))
}

/// Returns a deep copy of the value at `keys`.
///
/// Only the requested value is cloned. The copy shares nothing with `map`.
pub fn nested_field_copy<K: AsRef<str>>(map: &OrderedMap, keys: &[K]) -> Result<Option<Value>> {
    Ok(nested_field_no_copy(map, keys)?.cloned())
}

/// Removes the value at `keys` if it is there.
///
/// Removal never fails. A missing intermediate key, a null or non-map
/// intermediate value, or an absent final key all leave the document as it
/// was. Keys remaining in the parent map keep their order.
pub fn remove_nested_field<K: AsRef<str>>(map: &mut OrderedMap, keys: &[K]) {
    let Some((last, parents)) = keys.split_last() else {
        return;
    };
    match descend_mut(map, parents) {
        Ok(Some(parent)) => {
            if parent.remove(last).is_none() {
                trace!(path = %field_path(keys), "field to remove not found");
            }
        }
        Ok(None) => {}
        Err(err) => {
            debug!(path = %field_path(keys), error = %err, "skipping removal through non-map value");
        }
    }
}

/// Sets `value` at `keys`, creating intermediate maps as needed.
///
/// A null intermediate is replaced by a new map. A scalar or list intermediate
/// is left alone and reported as [`NestedFieldError::NotAMap`]; in that case
/// the document is unchanged. Returns the previous value at the target.
///
/// ```
/// # use orderedmap::{OrderedMap, set_nested_field};
/// let mut doc = OrderedMap::new();
/// set_nested_field(&mut doc, "nginx", &["spec", "template", "image"])?;
/// assert_eq!(doc.to_string(), r#"{"spec": {"template": {"image": "nginx"}}}"#);
/// # Ok::<(), orderedmap::NestedFieldError>(())
/// ```
pub fn set_nested_field<K: AsRef<str>>(
    map: &mut OrderedMap,
    value: impl Into<Value>,
    keys: &[K],
) -> Result<Option<Value>> {
    let Some((last, parents)) = keys.split_last() else {
        return Err(NestedFieldError::EmptyPath);
    };
    let mut current = map;
    for (i, key) in parents.iter().enumerate() {
        current = current
            .map_or_insert(key.as_ref())
            .map_err(|found| NestedFieldError::NotAMap {
                path: field_path(&parents[..=i]),
                found,
            })?;
    }
    Ok(current.set(last.as_ref(), value))
}

/// Looks up `keys` and converts the found value with `extract`.
fn nested_typed<'a, K, T>(
    map: &'a OrderedMap,
    keys: &[K],
    expected: &'static str,
    extract: impl FnOnce(&'a Value) -> Option<T>,
) -> Result<Option<T>>
where
    K: AsRef<str>,
{
    let Some(value) = nested_field_no_copy(map, keys)? else {
        return Ok(None);
    };
    match extract(value) {
        Some(typed) => Ok(Some(typed)),
        None => Err(NestedFieldError::TypeMismatch {
            path: field_path(keys),
            expected,
            found: value.type_name(),
        }),
    }
}

/// Returns the text at `keys`.
pub fn nested_string<K: AsRef<str>>(map: &OrderedMap, keys: &[K]) -> Result<Option<String>> {
    nested_typed(map, keys, "text", |v| v.as_text().map(str::to_owned))
}

/// Returns the boolean at `keys`.
pub fn nested_bool<K: AsRef<str>>(map: &OrderedMap, keys: &[K]) -> Result<Option<bool>> {
    nested_typed(map, keys, "bool", Value::as_bool)
}

/// Returns the integer at `keys`.
pub fn nested_int64<K: AsRef<str>>(map: &OrderedMap, keys: &[K]) -> Result<Option<i64>> {
    nested_typed(map, keys, "int", Value::as_int)
}

/// Returns the float at `keys`. Integers are not widened.
pub fn nested_float64<K: AsRef<str>>(map: &OrderedMap, keys: &[K]) -> Result<Option<f64>> {
    nested_typed(map, keys, "float", Value::as_float)
}

/// Returns a deep copy of the map at `keys`.
pub fn nested_map<K: AsRef<str>>(map: &OrderedMap, keys: &[K]) -> Result<Option<OrderedMap>> {
    nested_typed(map, keys, "map", |v| v.as_map().cloned())
}

/// Returns a deep copy of the list at `keys`.
pub fn nested_slice<K: AsRef<str>>(map: &OrderedMap, keys: &[K]) -> Result<Option<List>> {
    nested_typed(map, keys, "list", |v| v.as_list().cloned())
}

/// Returns the list of strings at `keys`.
///
/// Fails with [`NestedFieldError::TypeMismatch`] if the value is not a list or
/// any element is not text.
pub fn nested_string_slice<K: AsRef<str>>(
    map: &OrderedMap,
    keys: &[K],
) -> Result<Option<Vec<String>>> {
    let Some(list) = nested_typed(map, keys, "list", Value::as_list)? else {
        return Ok(None);
    };
    list.iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_text()
                .map(str::to_owned)
                .ok_or_else(|| NestedFieldError::TypeMismatch {
                    path: format!("{}[{i}]", field_path(keys)),
                    expected: "text",
                    found: item.type_name(),
                })
        })
        .collect::<Result<Vec<_>>>()
        .map(Some)
}
