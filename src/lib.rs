//! # omap: Ordered Maps on Left-Leaning Red-Black Trees
//!
//! This crate provides a sorted key-value container with logarithmic insert,
//! lookup and delete, built on a left-leaning red-black tree (LLRB) and ordered
//! by a comparator chosen at construction time.
//!
//! ## Key Features
//!
//! - **Pluggable ordering**: any `Fn(&K, &K) -> bool` less-than predicate, plus
//!   natural, case-insensitive and floating-point presets
//! - **Guaranteed balance**: height stays below `2 * log2(n + 1)`
//! - **In-order traversal**: visitor callbacks and borrowing iterators
//! - **Self-verification**: structural invariant checker usable from tests or
//!   after every mutation via configuration
//! - **Statistics**: optional counters for lookups, rotations and color flips
//!
//! ## Quick Start
//!
//! ```rust
//! use omap::{OrderedMap, Config, OrderedMapConfig, Natural};
//!
//! let mut map = OrderedMap::new();
//! map.insert(10, "ten");
//! map.insert(5, "five");
//! map.insert(20, "twenty");
//!
//! assert_eq!(map.find(&5), Some(&"five"));
//! assert!(map.delete(&10));
//! assert_eq!(map.len(), 2);
//!
//! map.for_each(|k, v| println!("{k} => {v}"));
//!
//! // Case-insensitive keys
//! let mut words = OrderedMap::case_folded_keyed();
//! words.insert("Hello".to_string(), 1);
//! assert!(words.contains_key(&"HELLO".to_string()));
//!
//! // Configured map with counters and verification
//! let mut checked = OrderedMap::with_config(Natural, OrderedMapConfig::debug_preset()).unwrap();
//! checked.insert(1u32, ());
//! assert_eq!(checked.stats().unwrap().inserts(), 1);
//! # let _ = OrderedMapConfig::performance_preset();
//! ```

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod compare;
pub mod config;
pub mod containers;
pub mod error;

// Re-export core types
pub use compare::{CaseFolded, Comparator, FloatOrder, Natural};
pub use config::{Config, OrderedMapConfig, TraversalStrategy};
pub use containers::{Iter, MapStats, OrderedMap};
pub use error::{InvariantKind, OmapError, Result};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library (currently only logs the version)
pub fn init() {
    log::debug!("Initializing omap v{}", VERSION);
}
