//! Error types for galleria.

use thiserror::Error;

/// Result type alias using galleria's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for galleria operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed input (bad search options, negative gallery id, ...).
    /// Raised before any store access; the operation never partially executes.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Album not found
    #[error("Album not found: {0}")]
    AlbumNotFound(i32),

    /// Media item not found
    #[error("Media item not found: {0}")]
    MediaItemNotFound(i32),

    /// Authentication/authorization failed
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Configuration error (programmer bug; non-retryable)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Store operation failed. Store-level failures are classified by the
    /// store itself; at this layer they are non-retryable and propagated
    /// unchanged.
    #[error("Store error: {0}")]
    Store(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
