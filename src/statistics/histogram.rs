//! Equal-width histograms over numeric containers

use crate::config::ChartConfig;
use crate::containers::Sparray;
use crate::element::Element;
use crate::error::{Result, SparrayError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Optional bounds overriding the data's own extrema
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HistogramRange {
    /// Lower bound; the data minimum when `None`
    pub min: Option<f64>,
    /// Upper bound; the data maximum when `None`
    pub max: Option<f64>,
}

impl HistogramRange {
    /// Both bounds fixed
    pub fn between(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Override the lower bound
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Override the upper bound
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

/// One histogram bucket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    /// Inclusive lower edge
    pub start: f64,
    /// Upper edge; exclusive except for the last bucket
    pub end: f64,
    /// Number of values attributed to this bucket
    pub count: usize,
}

impl Element for Bin {
    fn render(&self) -> String {
        format!("{}..{}: {}", self.start, self.end, self.count)
    }
}

/// Equal-width histogram with buckets in ascending order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    bins: Vec<Bin>,
    min: f64,
    max: f64,
}

impl Histogram {
    /// Bin `values` into `bins` buckets over the resolved range
    ///
    /// Bounds come from `range` first, then from the non-NaN extrema of
    /// `values`, and default to `0.0` when neither exists.
    pub(crate) fn build(values: &[f64], bins: usize, range: HistogramRange) -> Result<Self> {
        if bins == 0 {
            return Err(SparrayError::invalid_bin_count(bins));
        }

        let extrema = values
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
                None => Some((v, v)),
            });
        let min = range.min.or(extrema.map(|(lo, _)| lo)).unwrap_or(0.0);
        let max = range.max.or(extrema.map(|(_, hi)| hi)).unwrap_or(0.0);
        if !(min <= max) {
            return Err(SparrayError::invalid_histogram_range(min, max));
        }
        log::trace!("histogram bounds resolved to [{}, {}] over {} bins", min, max, bins);

        // Halved so that spans wider than f64::MAX stay finite
        let half_span = max / 2.0 - min / 2.0;
        let last = bins - 1;
        let edge = |i: usize| -> f64 {
            if i == bins {
                return max;
            }
            let step = half_span * (i as f64 / bins as f64);
            (min + step + step).min(max)
        };

        let mut counts = vec![0usize; bins];
        for &v in values {
            if !(v >= min && v <= max) {
                continue;
            }
            let idx = if v < max && half_span > 0.0 {
                let frac = (v / 2.0 - min / 2.0) / half_span;
                ((frac * bins as f64).floor() as usize).min(last)
            } else {
                last
            };
            counts[idx] += 1;
        }

        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| Bin {
                start: edge(i),
                end: edge(i + 1),
                count,
            })
            .collect();
        Ok(Self { bins, min, max })
    }

    /// Buckets in ascending order
    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    /// Per-bucket counts in ascending bucket order
    pub fn counts(&self) -> Vec<usize> {
        self.bins.iter().map(|b| b.count).collect()
    }

    /// Number of values that fell inside the range
    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }

    /// Resolved lower bound
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Resolved upper bound
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Number of buckets
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Always false; a histogram has at least one bucket
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Buckets as a container
    pub fn to_sparray(&self) -> Sparray<Bin> {
        Sparray::from_slice(&self.bins)
    }

    /// Text bar chart, one line per bucket
    ///
    /// Bar lengths are `round(count * bar_width / max_count)`, so the same
    /// counts always render the same chart.
    ///
    /// ```rust
    /// use sparray::{sparray, ChartConfig, HistogramRange};
    ///
    /// let hist = sparray![1, 2, 2, 3, 4, 5].histogram(2, HistogramRange::default())?;
    /// let chart = hist.render(&ChartConfig { bar_width: 6, bar_char: '*', precision: 1, show_counts: true });
    /// assert_eq!(chart, "1.0 - 3.0 | ****** 3\n3.0 - 5.0 | ****** 3");
    /// # Ok::<(), sparray::SparrayError>(())
    /// ```
    pub fn render(&self, config: &ChartConfig) -> String {
        let peak = self.bins.iter().map(|b| b.count).max().unwrap_or(0);
        let precision = config.precision;
        self.bins
            .iter()
            .map(|bin| {
                let length = if peak == 0 {
                    0
                } else {
                    ((bin.count * config.bar_width) as f64 / peak as f64).round() as usize
                };
                let bar: String = std::iter::repeat(config.bar_char).take(length).collect();
                let mut line = format!(
                    "{:.*} - {:.*} | {}",
                    precision, bin.start, precision, bin.end, bar
                );
                if config.show_counts {
                    line.push_str(&format!(" {}", bin.count));
                }
                line
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&ChartConfig::default()))
    }
}
