//! Standard scaling.

use data_spi::Matrix;
use pipeline_spi::{ColumnData, ColumnStep, PipelineError, Result};
use serde::{Deserialize, Serialize};

use super::check_width;

/// Scales columns to unit variance and, when `with_mean` is set, zero mean.
///
/// Uses the population standard deviation; a constant column gets scale 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    with_mean: bool,
    mean: Option<Vec<f64>>,
    scale: Option<Vec<f64>>,
}

impl Default for StandardScaler {
    fn default() -> Self {
        Self::new(true)
    }
}

impl StandardScaler {
    const NAME: &'static str = "standard_scaler";

    pub fn new(with_mean: bool) -> Self {
        Self {
            with_mean,
            mean: None,
            scale: None,
        }
    }

    pub fn with_mean(&self) -> bool {
        self.with_mean
    }

    pub fn mean(&self) -> Option<&[f64]> {
        self.mean.as_deref()
    }

    pub fn scale(&self) -> Option<&[f64]> {
        self.scale.as_deref()
    }
}

impl ColumnStep for StandardScaler {
    fn fit(&mut self, data: &ColumnData) -> Result<()> {
        let matrix = data.to_dense(Self::NAME)?;
        if matrix.is_empty() {
            return Err(PipelineError::UnexpectedInput {
                step: Self::NAME.to_string(),
                expected: "at least one row".to_string(),
            });
        }

        let n = matrix.n_rows() as f64;
        let mut mean = Vec::with_capacity(matrix.n_cols());
        let mut scale = Vec::with_capacity(matrix.n_cols());
        for col in 0..matrix.n_cols() {
            let values = matrix.column(col);
            let mu = values.iter().sum::<f64>() / n;
            let var = values.iter().map(|x| (x - mu).powi(2)).sum::<f64>() / n;
            let std = var.sqrt();
            mean.push(mu);
            scale.push(if std == 0.0 { 1.0 } else { std });
        }

        self.mean = Some(mean);
        self.scale = Some(scale);
        Ok(())
    }

    fn transform(&self, data: &ColumnData) -> Result<ColumnData> {
        let (Some(mean), Some(scale)) = (&self.mean, &self.scale) else {
            return Err(PipelineError::NotFitted(Self::NAME.to_string()));
        };
        let matrix = data.to_dense(Self::NAME)?;
        check_width(Self::NAME, scale.len(), matrix.n_cols())?;

        let mut out = Matrix::zeros(matrix.n_rows(), matrix.n_cols());
        for (r, row) in matrix.rows().enumerate() {
            for (c, &x) in row.iter().enumerate() {
                let centered = if self.with_mean { x - mean[c] } else { x };
                out.set(r, c, centered / scale[c]);
            }
        }
        Ok(ColumnData::Dense(out))
    }

    fn is_fitted(&self) -> bool {
        self.scale.is_some()
    }

    fn name(&self) -> &str {
        Self::NAME
    }
}
