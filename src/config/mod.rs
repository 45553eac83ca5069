//! Configuration for the presentation and sampling layers
//!
//! Container semantics are not configurable. What is configurable is how a
//! histogram is drawn ([`ChartConfig`]) and where sampling randomness comes
//! from ([`SamplingConfig`]).
//!
//! # Environment Initialization
//!
//! ```rust
//! use sparray::config::{ChartConfig, Config};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Reads SPARRAY_CHART_BAR_WIDTH, SPARRAY_CHART_BAR_CHAR, ...
//! let config = ChartConfig::from_env()?;
//!
//! // Custom prefix
//! let config = ChartConfig::from_env_with_prefix("MYAPP_")?;
//! # Ok(())
//! # }
//! ```

use crate::error::{Result, SparrayError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::env;
use std::fmt;
use std::path::Path;

pub mod chart;
pub mod sampling;


pub use chart::ChartConfig;
pub use sampling::SamplingConfig;

/// Common configuration trait providing validation, environment
/// initialization and JSON persistence.
pub trait Config: Clone + fmt::Debug + Serialize + DeserializeOwned {
    /// Short name used in log and error messages
    const NAME: &'static str;

    /// Validate the configuration for correctness and consistency.
    fn validate(&self) -> Result<()>;

    /// Initialize configuration from environment variables with the
    /// `SPARRAY_` prefix.
    fn from_env() -> Result<Self>
    where
        Self: Default,
    {
        Self::from_env_with_prefix("SPARRAY_")
    }

    /// Initialize configuration from environment variables with a custom prefix.
    ///
    /// Unset or unparsable variables keep their default value.
    fn from_env_with_prefix(prefix: &str) -> Result<Self>
    where
        Self: Default;

    /// Save configuration to a file as pretty-printed JSON.
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = serde_json::to_string_pretty(self).map_err(|e| {
            SparrayError::configuration(format!("Failed to serialize {} config: {}", Self::NAME, e))
        })?;
        std::fs::write(path, serialized)?;
        Ok(())
    }

    /// Load and validate configuration from a JSON file.
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            SparrayError::configuration(format!("Failed to parse {} config file: {}", Self::NAME, e))
        })?;
        config.validate()?;
        log::debug!("loaded {} config from {}", Self::NAME, path.display());
        Ok(config)
    }
}

/// Parse environment variable with fallback to default.
pub fn parse_env_var<T>(var_name: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    env::var(var_name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Parse boolean environment variable.
///
/// Accepts "true", "1", "yes", "on" (case-insensitive) as true,
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
