//! Algorithm error types
//!
//! Defines the standardized error type for all algorithm operations.

use common::{Categorized, ErrorCategory};
use thiserror::Error;

/// Result type alias for algorithm operations
pub type Result<T> = std::result::Result<T, AlgorithmError>;

/// Errors that can occur while fitting or applying a regressor
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlgorithmError {
    /// Insufficient rows for the operation
    #[error("Insufficient data: need at least {required} rows, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Model has not been fitted yet
    #[error("Model must be fitted before prediction")]
    NotFitted,

    /// Row or column counts disagree
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Numerical computation error
    #[error("Numerical error: {0}")]
    NumericalError(String),

    /// Invalid input values
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl Categorized for AlgorithmError {
    fn category(&self) -> ErrorCategory {
        ErrorCategory::FitTransform
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_data_display() {
        let error = AlgorithmError::InsufficientData {
            required: 5,
            actual: 2,
        };
        assert_eq!(
            error.to_string(),
            "Insufficient data: need at least 5 rows, got 2"
        );
    }

    #[test]
    fn test_invalid_parameter_display() {
        let error = AlgorithmError::InvalidParameter {
            name: "learning_rate".to_string(),
            reason: "must be positive".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'learning_rate': must be positive"
        );
    }

    #[test]
    fn test_not_fitted_display() {
        assert_eq!(
            AlgorithmError::NotFitted.to_string(),
            "Model must be fitted before prediction"
        );
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let error = AlgorithmError::DimensionMismatch {
            expected: 19,
            actual: 18,
        };
        assert!(error.to_string().contains("expected 19, got 18"));
    }

    #[test]
    fn test_category_is_fit_transform() {
        assert_eq!(
            AlgorithmError::NumericalError("singular".into()).category(),
            ErrorCategory::FitTransform
        );
    }
}
