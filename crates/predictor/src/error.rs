//! Prediction error types.

use common::{Categorized, ErrorCategory};
use thiserror::Error;

/// Errors raised while building an input row or producing a prediction.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PredictionError {
    /// A form field was absent or blank
    #[error("Missing value for field '{0}'")]
    MissingField(String),

    /// A score field did not hold a finite number
    #[error("Field '{field}' must be a number, got '{value}'")]
    InvalidScore { field: String, value: String },

    /// The input frame had no rows
    #[error("Nothing to predict: the input has no rows")]
    EmptyInput,
}

/// Result type for prediction input handling.
pub type Result<T> = std::result::Result<T, PredictionError>;

impl Categorized for PredictionError {
    fn category(&self) -> ErrorCategory {
        ErrorCategory::UserInput
    }
}
