//! Error handling for the sparray library
//!
//! Every failure here is a local precondition violation raised at the call
//! site. No operation mutates an existing container, so an error never leaves
//! partial state behind.

use thiserror::Error;

/// Main error type for the sparray library
#[derive(Error, Debug)]
pub enum SparrayError {
    /// The low-level constructor received something that is not an ordered sequence
    #[error("Invalid construction input: expected an ordered sequence, found {found}")]
    InvalidConstruction {
        /// Description of the rejected input shape
        found: String,
    },

    /// `range` step is zero or points away from `end`
    #[error("Invalid step value: {step}")]
    InvalidStep {
        /// The rejected step
        step: i64,
    },

    /// `repeat` called with a negative count
    #[error("Invalid \"times\" value: {times}")]
    InvalidTimes {
        /// The rejected count
        times: i64,
    },

    /// `sliding` step must be at least 1
    #[error("Invalid window step: {step}, must be >= 1")]
    InvalidWindowStep {
        /// The rejected step
        step: usize,
    },

    /// `sliding` size must be at least 1
    #[error("Invalid window size: {size}, must be >= 1")]
    InvalidWindowSize {
        /// The rejected size
        size: usize,
    },

    /// More draws requested than available elements without replacement
    #[error("Cannot sample {requested} elements without replacement from {available}")]
    Oversample {
        /// Number of draws requested
        requested: usize,
        /// Number of elements in the container
        available: usize,
    },

    /// Histogram bin count must be a positive integer
    #[error("Invalid bin count: {bins}, must be a positive integer")]
    InvalidBinCount {
        /// The rejected bin count
        bins: usize,
    },

    /// Resolved histogram bounds are inverted
    #[error("Invalid histogram range: min {min} > max {max}")]
    InvalidHistogramRange {
        /// Resolved lower bound
        min: f64,
        /// Resolved upper bound
        max: f64,
    },

    /// `reduce`/`reduce_right` on an empty container without a seed
    #[error("Reduce of empty sparray with no initial value")]
    EmptyFold,

    /// A numeric-only operation was requested on a non-numeric container
    #[error("Not numeric: {message}")]
    NotNumeric {
        /// Which element or operation disqualified the container
        message: String,
    },

    /// Configuration or parameter errors
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },

    /// I/O related errors (configuration persistence)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SparrayError {
    /// Create an invalid construction error
    pub fn invalid_construction<S: Into<String>>(found: S) -> Self {
        Self::InvalidConstruction { found: found.into() }
    }

    /// Create an invalid range step error
    pub fn invalid_step(step: i64) -> Self {
        Self::InvalidStep { step }
    }

    /// Create an invalid repeat count error
    pub fn invalid_times(times: i64) -> Self {
        Self::InvalidTimes { times }
    }

    /// Create an invalid window step error
    pub fn invalid_window_step(step: usize) -> Self {
        Self::InvalidWindowStep { step }
    }

    /// Create an invalid window size error
    pub fn invalid_window_size(size: usize) -> Self {
        Self::InvalidWindowSize { size }
    }

    /// Create an oversampling error
    pub fn oversample(requested: usize, available: usize) -> Self {
        Self::Oversample { requested, available }
    }

    /// Create an invalid bin count error
    pub fn invalid_bin_count(bins: usize) -> Self {
        Self::InvalidBinCount { bins }
    }

    /// Create an invalid histogram range error
    pub fn invalid_histogram_range(min: f64, max: f64) -> Self {
        Self::InvalidHistogramRange { min, max }
    }

    /// Create a not-numeric error
    pub fn not_numeric<S: Into<String>>(message: S) -> Self {
        Self::NotNumeric { message: message.into() }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration { message: message.into() }
    }

    /// Check if this is a recoverable error
    ///
    /// Only I/O failures while persisting configuration are worth retrying;
    /// everything else is a programmer error at the call site.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidConstruction { .. } => "construction",
            Self::InvalidStep { .. } => "range",
            Self::InvalidTimes { .. } => "repeat",
            Self::InvalidWindowStep { .. } | Self::InvalidWindowSize { .. } => "window",
            Self::Oversample { .. } => "sample",
            Self::InvalidBinCount { .. } | Self::InvalidHistogramRange { .. } => "histogram",
            Self::EmptyFold => "fold",
            Self::NotNumeric { .. } => "numeric",
            Self::Configuration { .. } => "config",
            Self::Io(_) => "io",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SparrayError>;
