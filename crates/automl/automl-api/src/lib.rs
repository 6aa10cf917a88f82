//! AutoML API
//!
//! Configuration types and DTOs for model training:
//!
//! - [`TrainerConfig`]: acceptance threshold, folds, seed, model output path
//! - [`GridSearchConfig`]: cross-validation settings of one search
//! - [`Candidate`] / [`default_candidates`]: the ordered candidate registry

mod config;
mod registry;

pub use config::{GridSearchConfig, TrainerConfig, DEFAULT_ACCEPTANCE_THRESHOLD};
pub use registry::{default_candidates, Candidate};

// Re-export SPI types
pub use automl_spi::{
    AutoMLError, CandidateKind, ModelReport, ParamGrid, ParamSet, ParamValue, Result,
    TrainingOutcome,
};
