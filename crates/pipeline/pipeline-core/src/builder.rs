//! Construction of the unfitted preprocessor.

use std::collections::HashSet;

use pipeline_api::PreprocessorConfig;
use pipeline_spi::{PipelineError, Result};
use tracing::info;

use crate::pipeline::Pipeline;
use crate::preprocessor::Preprocessor;
use crate::steps::{MedianImputer, MostFrequentImputer, OneHotEncoder, StandardScaler};

/// Build an unfitted preprocessor.
///
/// Numeric branch: median imputation then standardization. Categorical
/// branch: most-frequent imputation, one-hot encoding, then scaling without
/// centering.
pub fn build_preprocessor(config: &PreprocessorConfig) -> Result<Preprocessor> {
    if config.numeric_columns.is_empty() && config.categorical_columns.is_empty() {
        return Err(PipelineError::InvalidParameter {
            name: "columns".to_string(),
            reason: "at least one numeric or categorical column is required".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for column in config.numeric_columns.iter().chain(&config.categorical_columns) {
        if !seen.insert(column.as_str()) {
            return Err(PipelineError::InvalidParameter {
                name: "columns".to_string(),
                reason: format!("column '{}' is listed more than once", column),
            });
        }
    }

    let numeric = Pipeline::new()
        .with_step(MedianImputer::new())
        .with_step(StandardScaler::new(true));

    let categorical = Pipeline::new()
        .with_step(MostFrequentImputer::new())
        .with_step(OneHotEncoder::new(config.handle_unknown))
        .with_step(StandardScaler::new(false));

    info!(columns = ?config.categorical_columns, "Categorical columns");
    info!(columns = ?config.numeric_columns, "Numerical columns");

    Ok(Preprocessor::new(config.clone(), numeric, categorical))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Step;

    #[test]
    fn test_default_layout() {
        let preprocessor = build_preprocessor(&PreprocessorConfig::default()).unwrap();
        assert!(!preprocessor.is_fitted());
        assert_eq!(preprocessor.output_width(), None);

        let numeric: Vec<&str> = preprocessor
            .numeric_pipeline()
            .steps()
            .iter()
            .map(|s| match s {
                Step::MedianImputer(_) => "median",
                Step::StandardScaler(_) => "scaler",
                _ => "other",
            })
            .collect();
        assert_eq!(numeric, vec!["median", "scaler"]);
        assert_eq!(preprocessor.categorical_pipeline().steps().len(), 3);
    }

    #[test]
    fn test_rejects_empty_config() {
        let config = PreprocessorConfig::default()
            .with_numeric_columns(Vec::<String>::new())
            .with_categorical_columns(Vec::<String>::new());
        assert!(build_preprocessor(&config).is_err());
    }

    #[test]
    fn test_rejects_duplicate_column() {
        let config = PreprocessorConfig::default().with_categorical_columns(["reading_score"]);
        let err = build_preprocessor(&config).unwrap_err();
        assert!(err.to_string().contains("reading_score"));
    }
}
