//! Pipeline Facade
//!
//! High-level, simplified API for the preprocessing transform.

pub use pipeline_api::{HandleUnknown, PreprocessorConfig};
pub use pipeline_core::{
    build_preprocessor, MedianImputer, MostFrequentImputer, OneHotEncoder, Pipeline, Preprocessor,
    StandardScaler, Step,
};
pub use pipeline_spi::{ColumnData, ColumnStep, PipelineError, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ColumnStep;
    pub use crate::{build_preprocessor, Preprocessor, PreprocessorConfig};
    pub use crate::{HandleUnknown, PipelineError, Result};
}
