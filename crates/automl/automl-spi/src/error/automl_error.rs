//! AutoML error types.

use algorithm_spi::AlgorithmError;
use common::{Categorized, ErrorCategory};
use data_spi::DataError;
use thiserror::Error;

/// Result type alias for search and selection.
pub type Result<T> = std::result::Result<T, AutoMLError>;

/// Errors that can occur while searching hyperparameters or selecting a model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AutoMLError {
    /// Every candidate scored below the acceptance threshold.
    #[error(
        "No acceptable model: best candidate '{best}' scored {best_score:.4}, threshold is {threshold}"
    )]
    NoAcceptableModel {
        best: String,
        best_score: f64,
        threshold: f64,
    },

    /// The registry holds no candidates, or none produced a finite score.
    #[error("No candidate could be scored: {0}")]
    NoCandidates(String),

    /// Too few rows for the requested number of folds.
    #[error("Insufficient data: need at least {required} rows, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid configuration value.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// A grid cannot be expanded or applied to its candidate.
    #[error("Invalid grid for '{candidate}': {reason}")]
    InvalidGrid { candidate: String, reason: String },

    /// A candidate failed while fitting or predicting.
    #[error("Candidate '{candidate}' failed: {source}")]
    CandidateFailed {
        candidate: String,
        #[source]
        source: AlgorithmError,
    },

    #[error(transparent)]
    Algorithm(#[from] AlgorithmError),

    #[error(transparent)]
    Data(#[from] DataError),
}

impl Categorized for AutoMLError {
    fn category(&self) -> ErrorCategory {
        match self {
            AutoMLError::NoAcceptableModel { .. } => ErrorCategory::Acceptance,
            AutoMLError::InsufficientData { .. } => ErrorCategory::Data,
            AutoMLError::Data(e) => e.category(),
            _ => ErrorCategory::FitTransform,
        }
    }
}
