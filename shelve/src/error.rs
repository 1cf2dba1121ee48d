//! Error types for the shelve library.
//!
//! This module provides the error hierarchy for all planning and execution
//! operations in the shelve library, using `thiserror` for ergonomic error
//! handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a shelve error.
///
/// # Examples
///
/// ```
/// use shelve::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the shelve library.
///
/// This enum encompasses all possible error conditions that can occur
/// while planning or executing a file organization run.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// The input root to organize does not exist.
    #[error("input root not found: {}", path.display())]
    MissingInput {
        /// The input root that was not found.
        path: PathBuf,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// Classification metadata could not be parsed.
    #[error("metadata error: {0}")]
    Metadata(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

// Additional conversions for better ergonomics

impl From<crate::path::RelativePathError> for Error {
    fn from(err: crate::path::RelativePathError) -> Self {
        Self::InvalidPath {
            path: PathBuf::from(err.value),
            reason: err.reason,
        }
    }
}

impl Error {
    /// Check if error indicates a missing input root.
    ///
    /// # Examples
    ///
    /// ```
    /// use shelve::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::MissingInput { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_missing_input());
    /// ```
    #[must_use]
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Self::MissingInput { .. })
    }

    /// Check if error wraps an underlying I/O failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use shelve::Error;
    ///
    /// let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
    /// let err: Error = io_err.into();
    /// assert!(err.is_io());
    /// ```
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
