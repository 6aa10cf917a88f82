//! Preprocessing configuration types.

use data_spi::{CATEGORICAL_COLUMNS, NUMERIC_COLUMNS};
use serde::{Deserialize, Serialize};

/// What the one-hot encoder does with a category it was not fitted on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandleUnknown {
    /// Fail the transform
    #[default]
    Error,
    /// Emit an all-zero block for that column
    Ignore,
}

/// Configuration of the two-branch column transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreprocessorConfig {
    /// Columns imputed with the median then standardized
    pub numeric_columns: Vec<String>,
    /// Columns imputed with the mode, one-hot encoded, then scaled without centering
    pub categorical_columns: Vec<String>,
    /// Unknown-category policy of the encoder
    pub handle_unknown: HandleUnknown,
}

impl Default for PreprocessorConfig {
    fn default() -> Self {
        Self {
            numeric_columns: NUMERIC_COLUMNS.iter().map(|c| c.to_string()).collect(),
            categorical_columns: CATEGORICAL_COLUMNS.iter().map(|c| c.to_string()).collect(),
            handle_unknown: HandleUnknown::default(),
        }
    }
}

impl PreprocessorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_numeric_columns<S: Into<String>>(
        mut self,
        columns: impl IntoIterator<Item = S>,
    ) -> Self {
        self.numeric_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_categorical_columns<S: Into<String>>(
        mut self,
        columns: impl IntoIterator<Item = S>,
    ) -> Self {
        self.categorical_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_handle_unknown(mut self, policy: HandleUnknown) -> Self {
        self.handle_unknown = policy;
        self
    }
}
