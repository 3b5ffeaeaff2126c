//! Error types for the node performance toolkit.

use thiserror::Error;

/// Result type alias for nodeperf operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the ambient surface (configuration, logging).
///
/// Core metric operations are total over their input domain and never
/// return these.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Metrics collection error
    #[error("Metrics error: {0}")]
    Metrics(String),

    /// Logging initialization error
    #[error("Logging error: {0}")]
    Logging(String),
}
