//! Configuration for the relay engine.
//!
//! Configuration is passed to [`RelayEngine::new()`](crate::RelayEngine::new)
//! and can be constructed programmatically or deserialized from YAML/JSON.
//!
//! # Quick Start
//!
//! ```rust
//! use relay_engine::config::RelayConfig;
//!
//! let config = RelayConfig { batch_size: 256 };
//! assert!(config.validate().is_ok());
//! ```
//!
//! # YAML Example
//!
//! ```yaml
//! batch_size: 256
//! ```

use crate::error::{RelayError, Result};
use serde::{Deserialize, Serialize};

/// The top-level config object passed to `RelayEngine::new()`.
///
/// # Fields
///
/// - `batch_size`: How many records are pulled before each flush to the
///   destination. Larger batches amortize per-call destination overhead;
///   smaller batches bound how much pulled-but-unstored data is in flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Records per batch. Must be at least 1.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

fn default_batch_size() -> usize {
    100
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
        }
    }
}

impl RelayConfig {
    /// Create a small-batch config for testing.
    pub fn for_testing() -> Self {
        Self { batch_size: 8 }
    }

    /// Check the config is usable.
    ///
    /// A zero batch size would make the fill phase a no-op and the engine
    /// loop forever, so it is rejected here rather than at run time.
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(RelayError::Config(
                "batch_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
