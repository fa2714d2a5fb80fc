//! Error types and failure classification for the source data crate.
//!
//! This module provides:
//! - [`SourceError`]: The main error enum for all fetch operations
//! - [`FailureClass`]: Classification deciding between fallback and propagation

mod failure;

pub use failure::FailureClass;

use thiserror::Error;

/// Errors that can occur while fetching a dataset.
///
/// Each variant is classified into a [`FailureClass`] via the
/// [`failure_class`](Self::failure_class) method, which determines whether the
/// fetcher falls back to the next source or gives up.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The source answered with a non-success HTTP status.
    #[error("HTTP error from {source_id}: status {status}")]
    Http {
        /// The source that answered
        source_id: String,
        /// The HTTP status code
        status: u16,
    },

    /// A network error occurred while talking to a remote source.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The body could not be decoded as a JSON array of objects.
    #[error("Failed to parse {resource}: {message}")]
    Parse {
        /// The resource filename
        resource: String,
        /// Decoder message
        message: String,
    },

    /// A local file could not be read.
    #[error("Failed to read {path}: {message}")]
    Io {
        /// The path that was read
        path: String,
        /// The I/O error message
        message: String,
    },

    /// The request cannot be built (empty filename, invalid URL, bad header).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Anything else the fetcher did not expect.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SourceError {
    /// Returns the failure classification for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use tourism_source_data::errors::{FailureClass, SourceError};
    ///
    /// let error = SourceError::Http { source_id: "REMOTE".to_string(), status: 404 };
    /// assert_eq!(error.failure_class(), FailureClass::Fallback);
    ///
    /// let error = SourceError::InvalidRequest("empty filename".to_string());
    /// assert_eq!(error.failure_class(), FailureClass::Propagate);
    /// ```
    pub fn failure_class(&self) -> FailureClass {
        match self {
            Self::Http { .. } | Self::Network(_) | Self::Parse { .. } | Self::Io { .. } => {
                FailureClass::Fallback
            }
            Self::InvalidRequest(_) | Self::Internal(_) => FailureClass::Propagate,
        }
    }

    /// Creates a Parse error.
    pub fn parse(resource: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            resource: resource.into(),
            message: message.into(),
        }
    }

    /// Creates an Io error.
    pub fn io(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Io {
            path: path.into(),
            message: message.into(),
        }
    }
}
