//! Error types for nested field access.
//!
//! Only structural problems are errors. A path that simply is not present in
//! the document (absent key, null along the way) is reported as `Ok(None)` by
//! the lookup functions and never shows up here.

use thiserror::Error;

/// Structured error types for nested field operations.
#[non_exhaustive]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NestedFieldError {
    /// A non-final path segment resolved to a value that is not a map
    #[error("{path} accessor error: expected a map, found {found}")]
    NotAMap { path: String, found: &'static str },

    /// A typed accessor found a value of the wrong type
    #[error("{path} accessor error: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A write was requested with no keys to locate the target
    #[error("empty field path")]
    EmptyPath,
}

impl NestedFieldError {
    /// Check if this error came from descending through a non-map value
    pub fn is_traversal_error(&self) -> bool {
        matches!(self, NestedFieldError::NotAMap { .. })
    }

    /// Check if this error is a typed accessor mismatch
    pub fn is_type_error(&self) -> bool {
        matches!(self, NestedFieldError::TypeMismatch { .. })
    }

    /// Get the dot-joined path at which the error occurred
    pub fn path(&self) -> Option<&str> {
        match self {
            NestedFieldError::NotAMap { path, .. } | NestedFieldError::TypeMismatch { path, .. } => {
                Some(path)
            }
            NestedFieldError::EmptyPath => None,
        }
    }

    /// Get the type name of the offending value
    pub fn found(&self) -> Option<&'static str> {
        match self {
            NestedFieldError::NotAMap { found, .. }
            | NestedFieldError::TypeMismatch { found, .. } => Some(found),
            NestedFieldError::EmptyPath => None,
        }
    }
}

// Conversion from NestedFieldError to the main Error type
impl From<NestedFieldError> for crate::Error {
    fn from(err: NestedFieldError) -> Self {
        crate::Error::Nested(err)
    }
}
