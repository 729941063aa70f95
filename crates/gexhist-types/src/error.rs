//! Error types for gexhist.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors detected while assembling the run configuration.
///
/// All of these are fatal and are raised before any request is issued.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The API credential is empty or unset.
    #[error("{} is not set. Export it before running a query.", crate::API_KEY_ENV)]
    MissingCredential,

    /// The query date is not a `YYYY-MM-DD` calendar date.
    #[error("Invalid date '{value}': {source}")]
    InvalidDate {
        /// The rejected input.
        value: String,
        /// The underlying parse failure.
        source: chrono::ParseError,
    },

    /// The selection file could not be read.
    #[error("Cannot read selection file {}: {source}", .path.display())]
    ReadSelection {
        /// Path of the selection file.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The selection document is malformed.
    #[error("Invalid selection: {0}")]
    ParseSelection(#[from] serde_json::Error),
}
