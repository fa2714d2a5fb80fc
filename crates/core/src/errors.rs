//! Core error types for the Tourism Atlas dashboard.
//!
//! Ordinary fetch failures never reach this layer; the source crate absorbs
//! them. What arrives here is configuration problems, propagated source errors
//! and invalid user input.

use thiserror::Error;
use tourism_source_data::SourceError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the dashboard domain.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Source data operation failed: {0}")]
    Source(#[from] SourceError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for user input and record parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Malformed {category} record: {message}")]
    MalformedRecord { category: String, message: String },
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}
