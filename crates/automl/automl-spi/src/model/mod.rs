//! Data types for model search and selection

mod candidate;
mod param;
mod report;

pub use candidate::CandidateKind;
pub use param::{ParamGrid, ParamSet, ParamValue};
pub use report::{ModelReport, SearchResult, TrainingOutcome};
