//! Error types for evotour.
//!
//! The only recoverable failure class in the whole system is loading the
//! city dataset; everything downstream (selection, crossover, mutation,
//! scoring) is total over valid tours. All fallible functions return
//! `Result<T, EvoError>` instead of panicking.

use thiserror::Error;

/// Result type alias for evotour operations.
pub type EvoResult<T> = Result<T, EvoError>;

/// Unified error type for all evotour operations.
#[derive(Debug, Error)]
pub enum EvoError {
    // ===== Dataset Errors =====
    /// The city data source could not be opened or read.
    #[error("cannot read city data '{path}': {source}")]
    DatasetIo {
        /// Path of the data source.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A record did not split into exactly `name latitude longitude`.
    #[error("{path}:{line}: expected 3 whitespace-separated fields, found {found}")]
    MalformedRecord {
        /// Path of the data source.
        path: String,
        /// 1-indexed line number of the offending record.
        line: usize,
        /// Number of fields actually present.
        found: usize,
    },

    /// A latitude or longitude field failed to parse as decimal degrees.
    #[error("{path}:{line}: {axis} '{value}' is not a decimal number")]
    InvalidCoordinate {
        /// Path of the data source.
        path: String,
        /// 1-indexed line number of the offending record.
        line: usize,
        /// Which coordinate failed ("latitude" or "longitude").
        axis: &'static str,
        /// The raw field text.
        value: String,
    },

    /// The data source parsed cleanly but contained no records.
    ///
    /// The search space needs at least one city; rejecting the empty
    /// file at the boundary keeps that precondition out of the GA loop.
    #[error("city data '{path}' contains no records")]
    EmptyDataset {
        /// Path of the data source.
        path: String,
    },

    // ===== Configuration Errors =====
    /// Invalid configuration parameter.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// File I/O error (configuration files and other non-dataset reads).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

impl EvoError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check whether this error came from the city data source.
    ///
    /// A dataset failure is fatal for every worker at once (the source
    /// is a shared precondition), so the coordinator aborts the run.
    #[must_use]
    pub const fn is_dataset_error(&self) -> bool {
        matches!(
            self,
            Self::DatasetIo { .. }
                | Self::MalformedRecord { .. }
                | Self::InvalidCoordinate { .. }
                | Self::EmptyDataset { .. }
        )
    }
}
