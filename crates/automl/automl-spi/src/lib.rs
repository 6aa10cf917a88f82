//! AutoML Service Provider Interface
//!
//! Types and contracts for choosing a regression model by held-out score:
//!
//! - [`CandidateKind`]: the algorithm families the trainer can compare
//! - [`ParamGrid`] / [`ParamSet`]: hyperparameter grids and one point on them
//! - [`ModelReport`]: candidate name to held-out R², in registry order
//! - [`HyperparameterSearch`] / [`ModelSelector`]: search and selection contracts
//! - [`AutoMLError`]: error type for search and selection

pub mod contract;
pub mod error;
pub mod model;

pub use contract::{HyperparameterSearch, ModelSelector};
pub use error::{AutoMLError, Result};
pub use model::{
    CandidateKind, ModelReport, ParamGrid, ParamSet, ParamValue, SearchResult, TrainingOutcome,
};
