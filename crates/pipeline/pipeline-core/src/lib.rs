//! Pipeline Core
//!
//! Column steps, step pipelines and the two-branch [`Preprocessor`].

mod builder;
mod pipeline;
mod preprocessor;
pub mod steps;

pub use builder::build_preprocessor;
pub use pipeline::{Pipeline, Step};
pub use preprocessor::Preprocessor;
pub use steps::{MedianImputer, MostFrequentImputer, OneHotEncoder, StandardScaler};

pub use pipeline_spi::{ColumnData, ColumnStep, PipelineError, Result};
