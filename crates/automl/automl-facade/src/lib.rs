//! AutoML Facade
//!
//! High-level API for model training. Re-exports all public types from the
//! automl stack for convenient usage.
//!
//! # Example
//!
//! ```ignore
//! use automl_facade::prelude::*;
//!
//! let trainer = ModelTrainer::new(TrainerConfig::new("artifacts/model.json"));
//! let outcome = trainer.train_with_report(&train_matrix, &test_matrix)?;
//! println!("{} scored {:.4}", outcome.winner, outcome.score);
//! ```

// Re-export everything from core (which includes API and SPI)
pub use automl_core::*;

/// Prelude module for convenient imports
pub mod prelude {
    // Traits
    pub use automl_spi::{HyperparameterSearch, ModelSelector};

    // Configuration and registry
    pub use automl_api::{default_candidates, Candidate, GridSearchConfig, TrainerConfig};

    // Data and error types
    pub use automl_spi::{
        AutoMLError, CandidateKind, ModelReport, ParamGrid, ParamSet, Result, TrainingOutcome,
    };

    // Implementations
    pub use automl_core::{CandidateSelector, GridSearchCV, KFold, ModelTrainer};
}
