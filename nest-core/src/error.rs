//! Error types for nest

use thiserror::Error;

/// Nest error types
#[derive(Debug, Error)]
pub enum NestError {
    /// Input is not usable for the requested operation, such as a scalar
    /// where a container is required.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// A configured limit was exceeded.
    #[error("Limit exceeded: {0}")]
    LimitExceeded(String),
    /// I/O operation failed while reading or writing data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON parsing or serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, NestError>;
