//! Data transformation service.

use std::path::{Path, PathBuf};

use data_core::{split_target, CsvDataSource};
use data_spi::{DataSource, Matrix};
use pipeline_core::build_preprocessor;

use crate::config::DataTransformationConfig;

/// Output of one transformation run.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformedData {
    /// Transformed training features with the target appended
    pub train: Matrix,
    /// Transformed test features with the target appended
    pub test: Matrix,
    /// Where the fitted preprocessor was written
    pub preprocessor_path: PathBuf,
}

impl TransformedData {
    pub fn into_parts(self) -> (Matrix, Matrix, PathBuf) {
        (self.train, self.test, self.preprocessor_path)
    }
}

/// Fits the preprocessor on a training table and applies it to both tables.
#[derive(Debug, Clone, Default)]
pub struct DataTransformation {
    config: DataTransformationConfig,
}

impl DataTransformation {
    pub fn new(config: DataTransformationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DataTransformationConfig {
        &self.config
    }

    /// Transform labeled CSV files.
    pub fn transform_files(
        &self,
        train_path: impl AsRef<Path>,
        test_path: impl AsRef<Path>,
    ) -> common::Result<TransformedData> {
        let train = CsvDataSource::labeled(train_path.as_ref());
        let test = CsvDataSource::labeled(test_path.as_ref());
        self.transform(&train, &test)
    }

    /// Load both sources, fit on `train_source` only, transform both, append
    /// the target and persist the fitted preprocessor.
    ///
    /// Any failure aborts before the preprocessor is written.
    pub fn transform(
        &self,
        train_source: &dyn DataSource,
        test_source: &dyn DataSource,
    ) -> common::Result<TransformedData> {
        let train_records = train_source.load()?;
        let test_records = test_source.load()?;
        tracing::info!(
            train = train_source.name(),
            test = test_source.name(),
            train_rows = train_records.len(),
            test_rows = test_records.len(),
            "read train and test data"
        );

        let (train_features, train_target) = split_target(&train_records)?;
        let (test_features, test_target) = split_target(&test_records)?;

        let mut preprocessor = build_preprocessor(&self.config.preprocessor)?;
        tracing::info!("applying preprocessor on training and testing frames");
        let train_matrix = preprocessor.fit_transform(&train_features)?;
        let test_matrix = preprocessor.transform(&test_features)?;

        let train = train_matrix.append_column(&train_target)?;
        let test = test_matrix.append_column(&test_target)?;

        artifact::save(&self.config.preprocessor_path, &preprocessor)?;
        tracing::info!(
            path = %self.config.preprocessor_path.display(),
            width = train.n_cols(),
            "saved preprocessing object"
        );

        Ok(TransformedData {
            train,
            test,
            preprocessor_path: self.config.preprocessor_path.clone(),
        })
    }
}
