//! Error types for tracker operations.

use thiserror::Error;

/// Errors produced by tracker operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A required field was missing or a value failed to parse.
    ///
    /// Raised before any store interaction takes place.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An identifier did not resolve to a stored user.
    #[error("User not found: {0}")]
    NotFound(String),

    /// The underlying store failed.
    #[error("Store error: {0}")]
    Store(String),
}

/// Result type for tracker operations.
pub type Result<T> = std::result::Result<T, Error>;
