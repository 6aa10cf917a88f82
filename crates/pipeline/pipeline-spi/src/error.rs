use common::{Categorized, ErrorCategory};
use data_spi::DataError;
use thiserror::Error;

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors that can occur while fitting or applying a preprocessing pipeline
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    /// Transform called before fit
    #[error("Step '{0}' is not fitted")]
    NotFitted(String),

    /// A column had no observed values to learn from
    #[error("Column '{column}' has no non-missing values to fit '{step}'")]
    AllMissing { step: String, column: String },

    /// A cell was missing where the step needs a value
    #[error("Missing value in column '{column}' reaching '{step}'")]
    MissingValue { step: String, column: String },

    /// A category not seen during fit
    #[error("Found unknown category '{value}' in column '{column}' during transform")]
    UnknownCategory { column: String, value: String },

    /// Step received data of the wrong shape or kind
    #[error("Step '{step}' expected {expected}")]
    UnexpectedInput { step: String, expected: String },

    /// Width differs from what the step was fitted on
    #[error("Step '{step}' was fitted on {expected} columns, got {actual}")]
    WidthMismatch {
        step: String,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Underlying table error
    #[error(transparent)]
    Data(#[from] DataError),
}

impl Categorized for PipelineError {
    fn category(&self) -> ErrorCategory {
        match self {
            PipelineError::Data(inner) => inner.category(),
            _ => ErrorCategory::FitTransform,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_error() {
        let error = PipelineError::UnknownCategory {
            column: "gender".to_string(),
            value: "other".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Found unknown category 'other' in column 'gender' during transform"
        );
    }

    #[test]
    fn test_not_fitted_error() {
        let error = PipelineError::NotFitted("standard_scaler".to_string());
        assert_eq!(error.to_string(), "Step 'standard_scaler' is not fitted");
    }

    #[test]
    fn test_categories() {
        assert_eq!(
            PipelineError::NotFitted("x".into()).category(),
            ErrorCategory::FitTransform
        );
        assert_eq!(
            PipelineError::Data(DataError::MissingColumn("lunch".into())).category(),
            ErrorCategory::Data
        );
    }
}
