//! Configuration APIs for omap
//!
//! Containers take their tunables from configuration types implementing the
//! [`Config`] trait, which bundles validation, environment initialization,
//! presets and JSON persistence.
//!
//! # Core Configuration Types
//!
//! - [`OrderedMapConfig`]: statistics, self-verification and traversal strategy
//!   for [`OrderedMap`](crate::OrderedMap)
//!
//! # Preset Configurations
//!
//! ```rust
//! use omap::config::{Config, OrderedMapConfig};
//!
//! // Lowest overhead: no counters, no verification
//! let config = OrderedMapConfig::performance_preset();
//! assert!(!config.enable_statistics);
//!
//! // Explicit-stack traversal with a small preallocated stack
//! let config = OrderedMapConfig::memory_preset();
//! ```
//!
//! # Environment Initialization
//!
//! ```rust
//! use omap::config::{Config, OrderedMapConfig};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Reads OMAP_MAP_STATISTICS, OMAP_MAP_TRAVERSAL, ...
//! let config = OrderedMapConfig::from_env()?;
//!
//! // Same keys under a custom prefix
//! let config = OrderedMapConfig::from_env_with_prefix("MYAPP_")?;
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use std::env;
use std::fmt;
use std::path::Path;

pub mod ordered_map;


pub use ordered_map::{OrderedMapConfig, TraversalStrategy};

/// Common configuration trait providing validation, environment initialization,
/// and preset management functionality.
pub trait Config: Clone + fmt::Debug {
    /// Validate the configuration for correctness and consistency.
    fn validate(&self) -> Result<()>;

    /// Initialize configuration from environment variables.
    ///
    /// Environment variables use the format `OMAP_{COMPONENT}_{FIELD}`, for
    /// example `OMAP_MAP_TRAVERSAL=iterative`.
    fn from_env() -> Result<Self>
    where
        Self: Default,
    {
        Self::from_env_with_prefix("OMAP_")
    }

    /// Initialize configuration from environment variables with a custom prefix.
    ///
    /// Unset or unparsable variables keep their default values; the result is
    /// validated before it is returned.
    fn from_env_with_prefix(prefix: &str) -> Result<Self>
    where
        Self: Default;

    /// Get a performance-optimized preset configuration.
    fn performance_preset() -> Self;

    /// Get a memory-optimized preset configuration.
    fn memory_preset() -> Self;

    /// Get a real-time preset configuration with predictable per-call cost.
    fn realtime_preset() -> Self;

    /// Get a balanced preset configuration.
    fn balanced_preset() -> Self
    where
        Self: Default,
    {
        Self::default()
    }

    /// Save configuration to a file as pretty-printed JSON.
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()>;

    /// Load and validate a configuration from a JSON file.
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self>;
}

/// Utility function to parse environment variable with fallback to default.
pub fn parse_env_var<T>(var_name: &str, default: T) -> T
where
    T: std::str::FromStr + Clone,
{
    env::var(var_name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Utility function to parse boolean environment variable.
///
/// Accepts: "true", "1", "yes", "on" (case-insensitive) as true,
/// everything else as false.
pub fn parse_env_bool(var_name: &str, default: bool) -> bool {
    env::var(var_name)
        .ok()
        .map(|s| {
            let s = s.to_lowercase();
            matches!(s.as_str(), "true" | "1" | "yes" | "on")
        })
        .unwrap_or(default)
}
