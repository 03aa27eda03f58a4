//! Insertion-ordered maps for loosely-typed documents.
//!
//! An [`OrderedMap`] behaves like a hash map from string keys to [`Value`]s,
//! but it also remembers the order in which keys were first inserted. This is
//! what makes documents read from YAML or JSON re-serialize with their keys in
//! the original order.
//!
//! # Core Types
//!
//! - [`OrderedMap`] - The ordered container
//! - [`Value`] - Everything that can be stored in it (null, scalars, lists, maps)
//! - [`List`] - Ordered sequences of values
//!
//! # Ordering Rules
//!
//! - A new key is appended to the end of the order.
//! - Re-setting an existing key replaces its value in place.
//! - Removing a key keeps the relative order of the remaining keys.
//!
//! ```
//! # use orderedmap::OrderedMap;
//! let mut map = OrderedMap::new();
//! map.set("b", 1);
//! map.set("a", 2);
//! map.set("b", 3); // keeps its position
//!
//! let keys: Vec<_> = map.keys().map(String::as_str).collect();
//! assert_eq!(keys, vec!["b", "a"]);
//! ```

use std::fmt;

use indexmap::IndexMap;

pub mod list;
pub mod value;

pub use list::List;
pub use value::Value;

/// A string-keyed map that iterates in first-insertion order.
///
/// Lookups are hashed, so a single [`entry`](OrderedMap::entry) is O(1) on
/// average regardless of where the key sits in the order.
///
/// Equality is order-sensitive: two maps with the same entries in a different
/// order are different documents.
///
/// # Examples
///
/// ```
/// # use orderedmap::{OrderedMap, Value};
/// let mut map = OrderedMap::new();
/// assert!(map.is_zero());
///
/// map.set("name", "Alice");
/// map.set("nothing", Value::Null);
///
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.entry("name"), Some(&Value::Text("Alice".to_string())));
/// assert_eq!(map.entry("nothing"), Some(&Value::Null));
/// assert_eq!(map.entry("missing"), None);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct OrderedMap {
    /// Entries in first-insertion order
    children: IndexMap<String, Value>,
}

impl OrderedMap {
    /// Creates a new empty map
    pub fn new() -> Self {
        Self {
            children: IndexMap::new(),
        }
    }

    /// Creates a new empty map with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            children: IndexMap::with_capacity(capacity),
        }
    }

    /// Sets a value at the given key, returns the old value if present.
    ///
    /// An existing key keeps its position; a new key is appended.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.children.insert(key.into(), value.into())
    }

    /// Gets the value stored at `key`.
    ///
    /// Returns `None` only when the key is absent; a stored null is
    /// `Some(&Value::Null)`.
    pub fn entry(&self, key: impl AsRef<str>) -> Option<&Value> {
        self.children.get(key.as_ref())
    }

    /// Gets a mutable reference to the value stored at `key`
    pub fn get_mut(&mut self, key: impl AsRef<str>) -> Option<&mut Value> {
        self.children.get_mut(key.as_ref())
    }

    /// Returns true if the map contains the given key
    pub fn contains_key(&self, key: impl AsRef<str>) -> bool {
        self.children.contains_key(key.as_ref())
    }

    /// Removes a key, returning its value if it was present.
    ///
    /// The remaining keys keep their relative order.
    pub fn remove(&mut self, key: impl AsRef<str>) -> Option<Value> {
        self.children.shift_remove(key.as_ref())
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if the map has no entries
    pub fn is_zero(&self) -> bool {
        self.children.is_empty()
    }

    /// Alias of [`is_zero`](OrderedMap::is_zero)
    pub fn is_empty(&self) -> bool {
        self.is_zero()
    }

    /// Removes all entries
    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Returns an iterator over all key-value pairs in order
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.children.iter()
    }

    /// Returns an iterator over all key-value pairs with mutable values
    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, String, Value> {
        self.children.iter_mut()
    }

    /// Returns an iterator over the keys in order
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.children.keys()
    }

    /// Returns an iterator over the values in key order
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.children.values()
    }

    /// Returns the map stored at `key`, creating it if the key is absent or null.
    ///
    /// Any other value is left in place and its type name is returned instead.
    pub(crate) fn map_or_insert(&mut self, key: &str) -> Result<&mut OrderedMap, &'static str> {
        let slot = self.children.entry(key.to_string()).or_default();
        if slot.is_null() {
            *slot = Value::Map(OrderedMap::new());
        }
        match slot {
            Value::Map(map) => Ok(map),
            other => Err(other.type_name()),
        }
    }

    /// Builder method to set a value and return self
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }
}

impl PartialEq for OrderedMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

/// JSON-like rendering in insertion order.
impl fmt::Display for OrderedMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.children.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key:?}: {value}")?;
        }
        write!(f, "}}")
    }
}

impl<K, V> FromIterator<(K, V)> for OrderedMap
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = OrderedMap::new();
        map.extend(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for OrderedMap
where
    K: Into<String>,
    V: Into<Value>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl IntoIterator for OrderedMap {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.into_iter()
    }
}

impl<'a> IntoIterator for &'a OrderedMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}
