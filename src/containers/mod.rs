//! Ordered container types
//!
//! ## Containers
//!
//! - **`OrderedMap<K, V, C>`** - Sorted key-value map on a left-leaning red-black
//!   tree with a caller-supplied comparator
//!
//! Unordered and array-backed containers are left to the standard library;
//! anything that needs keys kept in sorted order under a custom comparator
//! belongs here.

pub mod ordered_map;

pub use ordered_map::{Iter, MapStats, OrderedMap};
