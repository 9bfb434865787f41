//! Ordered map configuration.

use super::{Config, parse_env_bool, parse_env_var};
use crate::error::{OmapError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Largest accepted traversal stack hint; LLRB height stays below
/// `2 * log2(n + 1)`, which is 128 for any addressable entry count.
pub const MAX_STACK_CAPACITY_HINT: usize = 128;

/// How `for_each` walks the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalStrategy {
    /// Recursive in-order walk on the call stack
    Recursive,
    /// Loop over an explicit heap-allocated stack
    Iterative,
}

impl fmt::Display for TraversalStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Recursive => f.write_str("recursive"),
            Self::Iterative => f.write_str("iterative"),
        }
    }
}

impl FromStr for TraversalStrategy {
    type Err = OmapError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recursive" => Ok(Self::Recursive),
            "iterative" => Ok(Self::Iterative),
            other => Err(OmapError::configuration(format!(
                "unknown traversal strategy '{}', expected 'recursive' or 'iterative'",
                other
            ))),
        }
    }
}

/// Configuration for [`OrderedMap`](crate::OrderedMap)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderedMapConfig {
    /// Collect operation counters
    pub enable_statistics: bool,
    /// Check every structural invariant after each mutation and panic on failure
    pub verify_invariants: bool,
    /// Traversal used by `for_each`
    pub traversal: TraversalStrategy,
    /// Initial capacity of the explicit stack used by iterators
    pub stack_capacity_hint: usize,
}

impl Default for OrderedMapConfig {
    fn default() -> Self {
        Self {
            enable_statistics: false,
            verify_invariants: false,
            traversal: TraversalStrategy::Recursive,
            stack_capacity_hint: 32,
        }
    }
}

impl OrderedMapConfig {
    /// Configuration for tests and debugging: counters on, verification on
    pub fn debug_preset() -> Self {
        Self {
            enable_statistics: true,
            verify_invariants: true,
            ..Self::default()
        }
    }
}

impl Config for OrderedMapConfig {
    fn validate(&self) -> Result<()> {
        if self.stack_capacity_hint == 0 || self.stack_capacity_hint > MAX_STACK_CAPACITY_HINT {
            return Err(OmapError::configuration(format!(
                "stack_capacity_hint must be between 1 and {}, got {}",
                MAX_STACK_CAPACITY_HINT, self.stack_capacity_hint
            )));
        }
        Ok(())
    }

    fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        let defaults = Self::default();
        let config = Self {
            enable_statistics: parse_env_bool(
                &format!("{}MAP_STATISTICS", prefix),
                defaults.enable_statistics,
            ),
            verify_invariants: parse_env_bool(
                &format!("{}MAP_VERIFY_INVARIANTS", prefix),
                defaults.verify_invariants,
            ),
            traversal: parse_env_var(&format!("{}MAP_TRAVERSAL", prefix), defaults.traversal),
            stack_capacity_hint: parse_env_var(
                &format!("{}MAP_STACK_HINT", prefix),
                defaults.stack_capacity_hint,
            ),
        };
        config.validate()?;
        Ok(config)
    }

    fn performance_preset() -> Self {
        Self {
            enable_statistics: false,
            verify_invariants: false,
            traversal: TraversalStrategy::Recursive,
            stack_capacity_hint: 64,
        }
    }

    fn memory_preset() -> Self {
        Self {
            enable_statistics: false,
            verify_invariants: false,
            traversal: TraversalStrategy::Iterative,
            stack_capacity_hint: 8,
        }
    }

    fn realtime_preset() -> Self {
        Self {
            enable_statistics: false,
            verify_invariants: false,
            traversal: TraversalStrategy::Iterative,
            stack_capacity_hint: MAX_STACK_CAPACITY_HINT,
        }
    }

    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = serde_json::to_string_pretty(self)
            .map_err(|e| OmapError::configuration(format!("Failed to serialize ordered map config: {}", e)))?;
        std::fs::write(path, serialized)?;
        Ok(())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| OmapError::configuration(format!("Failed to parse ordered map config file: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}
