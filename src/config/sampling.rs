//! Randomness source for sampling.

use super::Config;
use crate::error::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Where [`Sparray::sample_with`](crate::Sparray::sample_with) and friends
/// draw from when the caller wants reproducible runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Fixed seed; entropy-seeded when `None`
    pub seed: Option<u64>,
}

impl SamplingConfig {
    /// Reproducible configuration
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Build a generator for this configuration
    ///
    /// ```rust
    /// use sparray::{range, SamplingConfig};
    ///
    /// let data = range(100);
    /// let config = SamplingConfig::seeded(9);
    /// let a = data.sample_n_with(&mut config.rng(), 5, false)?;
    /// let b = data.sample_n_with(&mut config.rng(), 5, false)?;
    /// assert_eq!(a, b);
    /// # Ok::<(), sparray::SparrayError>(())
    /// ```
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Config for SamplingConfig {
    const NAME: &'static str = "sampling";

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        let seed = std::env::var(format!("{}SAMPLING_SEED", prefix))
            .ok()
            .and_then(|s| s.trim().parse().ok());
        Ok(Self { seed })
    }
}
