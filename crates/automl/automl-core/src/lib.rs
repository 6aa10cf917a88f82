//! AutoML Core
//!
//! Core implementations for choosing a regression model:
//! - Contiguous k-fold splitting
//! - Cross-validated grid search over a candidate's hyperparameters
//! - Held-out comparison of tuned candidates with an acceptance gate
//! - The model trainer service that persists the winner

mod factory;
mod hyperopt;
mod kfold;
mod model_selection;
mod trainer;

pub use factory::instantiate;
pub use hyperopt::GridSearchCV;
pub use kfold::{FoldSplit, KFold};
pub use model_selection::CandidateSelector;
pub use trainer::{ModelTrainer, RESCORE_TOLERANCE};

// Re-export from API for convenience
pub use automl_api::{
    default_candidates, AutoMLError, Candidate, CandidateKind, GridSearchConfig, ModelReport,
    ParamGrid, ParamSet, ParamValue, Result, TrainerConfig, TrainingOutcome,
};

// Re-export SPI traits
pub use automl_spi::{HyperparameterSearch, ModelSelector, SearchResult};
