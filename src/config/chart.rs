//! Histogram chart rendering configuration.

use super::{parse_env_bool, parse_env_var, Config};
use crate::error::{Result, SparrayError};
use serde::{Deserialize, Serialize};

/// How [`Histogram::render`](crate::Histogram::render) draws bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Length of the longest bar in characters
    pub bar_width: usize,
    /// Character repeated to draw a bar
    pub bar_char: char,
    /// Decimal places for bucket edges
    pub precision: usize,
    /// Append the bucket count after each bar
    pub show_counts: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            bar_width: 40,
            bar_char: '#',
            precision: 2,
            show_counts: true,
        }
    }
}

impl ChartConfig {
    /// Compact preset for narrow terminals
    pub fn compact() -> Self {
        Self {
            bar_width: 20,
            precision: 1,
            ..Self::default()
        }
    }
}

impl Config for ChartConfig {
    const NAME: &'static str = "chart";

    fn validate(&self) -> Result<()> {
        if self.bar_width == 0 {
            return Err(SparrayError::configuration("bar_width must be greater than 0"));
        }
        if self.bar_char.is_control() {
            return Err(SparrayError::configuration("bar_char must be printable"));
        }
        if self.precision > 17 {
            return Err(SparrayError::configuration("precision must be at most 17"));
        }
        Ok(())
    }

    fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        let mut config = Self::default();
        config.bar_width = parse_env_var(&format!("{}CHART_BAR_WIDTH", prefix), config.bar_width);
        config.bar_char = parse_env_var(&format!("{}CHART_BAR_CHAR", prefix), config.bar_char);
        config.precision = parse_env_var(&format!("{}CHART_PRECISION", prefix), config.precision);
        config.show_counts = parse_env_bool(&format!("{}CHART_SHOW_COUNTS", prefix), config.show_counts);
        config.validate()?;
        Ok(config)
    }
}
