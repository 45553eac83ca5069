//! # Sparray: Immutable Sequences with a Functional Toolkit
//!
//! This crate provides an immutable, ordered, index-addressable sequence
//! container with a rich set of non-mutating operations. Every operation
//! returns a fresh container, so a value handed to one consumer is never
//! changed behind another consumer's back.
//!
//! ## Key Features
//!
//! - **Flexible Construction**: `from` accepts vectors, slices, sets and existing containers
//! - **Negative Indexing**: `at(-1)` is the last element
//! - **Numeric Specialization**: containers whose elements are all numeric gain `sum`, `avg` and `histogram`
//! - **Functional Toolkit**: map, flat_map, folds, grouping, sliding windows, zip, cross product
//! - **Multi-key Sorting**: stable `sort_by_key` over key tuples
//! - **Sampling**: with or without replacement, from any `rand::Rng`
//!
//! ## Quick Start
//!
//! ```rust
//! use sparray::{range_between, sparray, values, HistogramRange};
//!
//! let s = sparray![3, 1, 2];
//! assert_eq!(s.at(-1), Some(&2));
//! assert_eq!(s.sort().to_string(), "[ 1, 2, 3 ]");
//!
//! // Numeric containers are specialized at construction
//! assert!(s.is_numeric());
//! assert_eq!(s.sum().ok(), Some(6.0));
//! assert!(!values![1, "a"].is_numeric());
//!
//! // Windows and grouping
//! let windows = range_between(1, 7).sliding(2)?;
//! assert_eq!(windows.len(), 3);
//! let parity = range_between(1, 7).group_by(|x, _, _| x % 2);
//! assert_eq!(parity.get("0").map(|g| g.to_vec()), Some(vec![2, 4, 6]));
//!
//! // Histograms
//! let hist = sparray![1.0, 2.0, 3.0, 4.0].histogram(2, HistogramRange::default())?;
//! assert_eq!(hist.counts(), vec![2, 2]);
//! # Ok::<(), sparray::SparrayError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod containers;
pub mod element;
pub mod error;
pub mod factory;
pub mod statistics;
pub mod value;

// Re-export core types
pub use containers::{Enumerated, Group, GroupedBy, IndexedBy, KeyValue, KeyedMap, Kind, SortKey, Sparray};
pub use element::Element;
pub use error::{Result, SparrayError};
pub use value::Value;

// Factory layer
#[allow(deprecated)]
pub use factory::fill_of;
pub use factory::{empty, from, from_args, is_sparray, range, range_between, range_step, repeat, Source};

// Numeric specialization
pub use statistics::{Bin, Histogram, HistogramRange, Numeric};

// Configuration
pub use config::{ChartConfig, Config, SamplingConfig};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library (currently no-op, for future use)
pub fn init() {
    log::debug!("Initializing sparray v{}", VERSION);
}
