//! Error types for the excursions library.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for all fallible excursion operations.
///
/// Availability formatting itself never fails; malformed date tokens are
/// dropped rather than reported. These errors cover reading trip payloads and
/// validating listing state.
#[derive(Error, Debug)]
pub enum ExcursionError {
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> ExcursionError {
        ExcursionError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl ExcursionError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a file system error for the given path.
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExcursionError::FileSystem {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for excursion operations
pub type Result<T> = std::result::Result<T, ExcursionError>;
