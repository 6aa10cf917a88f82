//! Data error types.

use common::{Categorized, ErrorCategory};
use thiserror::Error;

/// Errors raised while reading, validating or reshaping tabular data.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DataError {
    /// The source could not be opened or read
    #[error("Failed to read '{path}': {reason}")]
    Unreadable { path: String, reason: String },

    /// A row could not be parsed
    #[error("Malformed row {row} in '{path}': {reason}")]
    Malformed {
        path: String,
        row: usize,
        reason: String,
    },

    /// A required schema column is absent
    #[error("Missing required column '{0}'")]
    MissingColumn(String),

    /// A labeled row has no target value
    #[error("Row {row} has no value for target column '{column}'")]
    MissingTarget { row: usize, column: String },

    /// The table has no rows
    #[error("Dataset is empty")]
    Empty,

    /// Column lengths or matrix dimensions disagree
    #[error("Shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: String, actual: String },

    /// Failed to write a table
    #[error("Failed to write '{path}': {reason}")]
    WriteFailed { path: String, reason: String },

    /// Invalid configuration value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },
}

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

impl Categorized for DataError {
    fn category(&self) -> ErrorCategory {
        match self {
            DataError::WriteFailed { .. } => ErrorCategory::Io,
            _ => ErrorCategory::Data,
        }
    }
}
