//! Two-branch column transform over the feature frame.

use data_spi::{Column, FeatureFrame, Matrix};
use pipeline_api::PreprocessorConfig;
use pipeline_spi::{ColumnData, PipelineError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::pipeline::{Pipeline, Step};

/// Fitted (or not yet fitted) preprocessing transform.
///
/// Numeric columns pass through the numeric pipeline, categorical columns
/// through the categorical one; the two dense outputs are concatenated in
/// that order. Fitting happens once, after which `transform` only reads the
/// learned state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preprocessor {
    config: PreprocessorConfig,
    numeric: Pipeline,
    categorical: Pipeline,
    fitted: bool,
}

impl Preprocessor {
    pub(crate) fn new(
        config: PreprocessorConfig,
        numeric: Pipeline,
        categorical: Pipeline,
    ) -> Self {
        Self {
            config,
            numeric,
            categorical,
            fitted: false,
        }
    }

    pub fn config(&self) -> &PreprocessorConfig {
        &self.config
    }

    pub fn numeric_pipeline(&self) -> &Pipeline {
        &self.numeric
    }

    pub fn categorical_pipeline(&self) -> &Pipeline {
        &self.categorical
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted
    }

    /// Learn every step's state from `frame`.
    ///
    /// On failure the preprocessor keeps its previous state.
    pub fn fit(&mut self, frame: &FeatureFrame) -> Result<()> {
        self.fit_transform(frame).map(|_| ())
    }

    pub fn fit_transform(&mut self, frame: &FeatureFrame) -> Result<Matrix> {
        let mut numeric = self.numeric.clone();
        let mut categorical = self.categorical.clone();

        let num = Self::run(frame, &self.config.numeric_columns, |data| {
            numeric.fit_transform(data)
        })?;
        let cat = Self::run(frame, &self.config.categorical_columns, |data| {
            categorical.fit_transform(data)
        })?;
        let output = num.hstack(&cat)?;

        self.numeric = numeric;
        self.categorical = categorical;
        self.fitted = true;
        debug!(
            rows = output.n_rows(),
            width = output.n_cols(),
            "Fitted preprocessor"
        );
        Ok(output)
    }

    /// Apply the fitted transform to `frame`.
    pub fn transform(&self, frame: &FeatureFrame) -> Result<Matrix> {
        if !self.fitted {
            return Err(PipelineError::NotFitted("preprocessor".to_string()));
        }
        let num = Self::run(frame, &self.config.numeric_columns, |data| {
            self.numeric.transform(data)
        })?;
        let cat = Self::run(frame, &self.config.categorical_columns, |data| {
            self.categorical.transform(data)
        })?;
        Ok(num.hstack(&cat)?)
    }

    /// Width of every transformed row, known once fitted.
    pub fn output_width(&self) -> Option<usize> {
        if !self.fitted {
            return None;
        }
        let encoded = self.encoder().and_then(|e| e.output_width());
        Some(self.config.numeric_columns.len() + encoded.unwrap_or(0))
    }

    /// Names of the output columns in order.
    pub fn feature_names(&self) -> Vec<String> {
        let mut names = self.config.numeric_columns.clone();
        if let Some(encoder) = self.encoder() {
            names.extend(encoder.feature_names());
        }
        names
    }

    fn encoder(&self) -> Option<&crate::OneHotEncoder> {
        self.categorical.steps().iter().find_map(|step| match step {
            Step::OneHotEncoder(encoder) => Some(encoder),
            _ => None,
        })
    }

    fn run<F>(frame: &FeatureFrame, columns: &[String], apply: F) -> Result<Matrix>
    where
        F: FnOnce(&ColumnData) -> Result<ColumnData>,
    {
        if columns.is_empty() {
            return Ok(Matrix::zeros(frame.n_rows(), 0));
        }
        let selected = columns
            .iter()
            .map(|name| -> Result<(String, Column)> {
                Ok((name.clone(), frame.require(name)?.clone()))
            })
            .collect::<Result<Vec<_>>>()?;
        apply(&ColumnData::Raw(selected))?.to_dense("preprocessor")
    }
}
