//! Data transformation configuration.

use std::path::PathBuf;

use pipeline_api::PreprocessorConfig;
use serde::{Deserialize, Serialize};

/// Where the fitted preprocessor goes and how it is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataTransformationConfig {
    pub preprocessor_path: PathBuf,
    pub preprocessor: PreprocessorConfig,
}

impl Default for DataTransformationConfig {
    fn default() -> Self {
        Self {
            preprocessor_path: PathBuf::from("artifacts/preprocessor.json"),
            preprocessor: PreprocessorConfig::default(),
        }
    }
}

impl DataTransformationConfig {
    pub fn new(preprocessor_path: impl Into<PathBuf>) -> Self {
        Self {
            preprocessor_path: preprocessor_path.into(),
            ..Default::default()
        }
    }

    pub fn with_preprocessor(mut self, preprocessor: PreprocessorConfig) -> Self {
        self.preprocessor = preprocessor;
        self
    }
}
