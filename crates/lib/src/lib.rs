//!
//! orderedmap: insertion-ordered maps for loosely-typed documents.
//!
//! Documents read from YAML or JSON are trees of mappings, sequences, scalars
//! and nulls. Plain hash maps forget the order of a mapping's keys, which makes
//! re-serialized documents churn. This crate keeps that order and provides a
//! small engine for reading and editing fields deep inside such a tree.
//!
//! ## Core Concepts
//!
//! * **Ordered maps (`map::OrderedMap`)**: string-keyed maps that iterate in
//!   first-insertion order.
//! * **Values (`map::Value`)**: null, bool, int, float, text, lists and nested maps.
//! * **Nested fields (`nested`)**: path-based access through nested maps, in
//!   borrowing, mutably borrowing and copying flavours, plus nested removal,
//!   nested set and typed accessors.
//!
//! ```
//! use orderedmap::{OrderedMap, nested_field_copy, nested_field_no_copy, remove_nested_field};
//!
//! let mut obj = OrderedMap::new();
//! obj.set("x", OrderedMap::new().with("y", 1).with("a", "foo"));
//!
//! let copy = nested_field_copy(&obj, &["x"])?;
//! remove_nested_field(&mut obj, &["x", "a"]);
//!
//! assert_eq!(nested_field_no_copy(&obj, &["x", "a"])?, None);
//! assert_eq!(copy.and_then(|x| x.as_map().map(OrderedMap::len)), Some(2));
//! # Ok::<(), orderedmap::Error>(())
//! ```

pub mod map;
pub mod nested;

pub use map::{List, OrderedMap, Value};
pub use nested::{
    NestedFieldError, nested_bool, nested_field_copy, nested_field_no_copy,
    nested_field_no_copy_mut, nested_float64, nested_int64, nested_map, nested_slice,
    nested_string, nested_string_slice, remove_nested_field, set_nested_field,
};

/// Result type used throughout the orderedmap library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the orderedmap library.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured nested field errors from the nested module
    #[error(transparent)]
    Nested(nested::NestedFieldError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Nested(_) => "nested",
        }
    }

    /// Check if this error came from descending through a non-map value.
    pub fn is_traversal_error(&self) -> bool {
        match self {
            Error::Nested(nested_err) => nested_err.is_traversal_error(),
        }
    }

    /// Check if this error is type-related.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Nested(nested_err) => nested_err.is_type_error(),
        }
    }
}
