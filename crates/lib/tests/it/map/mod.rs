//! OrderedMap integration tests
//!
//! This module tests the ordered container and its value types: insertion
//! order, conversions and order-preserving serde support.
