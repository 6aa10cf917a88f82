//! One-hot encoding of categorical columns.

use std::collections::BTreeSet;

use data_spi::Matrix;
use pipeline_api::HandleUnknown;
use pipeline_spi::{ColumnData, ColumnStep, PipelineError, Result};
use serde::{Deserialize, Serialize};

use super::check_width;

/// Expands each categorical column into one indicator column per category
/// seen at fit, categories sorted ascending.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OneHotEncoder {
    handle_unknown: HandleUnknown,
    columns: Vec<String>,
    categories: Option<Vec<Vec<String>>>,
}

impl OneHotEncoder {
    const NAME: &'static str = "one_hot_encoder";

    pub fn new(handle_unknown: HandleUnknown) -> Self {
        Self {
            handle_unknown,
            ..Default::default()
        }
    }

    pub fn handle_unknown(&self) -> HandleUnknown {
        self.handle_unknown
    }

    /// Learned categories per input column.
    pub fn categories(&self) -> Option<&[Vec<String>]> {
        self.categories.as_deref()
    }

    /// Total number of output columns once fitted.
    pub fn output_width(&self) -> Option<usize> {
        self.categories
            .as_ref()
            .map(|cats| cats.iter().map(Vec::len).sum())
    }

    /// Output column names as `<column>_<category>`.
    pub fn feature_names(&self) -> Vec<String> {
        let Some(categories) = &self.categories else {
            return Vec::new();
        };
        self.columns
            .iter()
            .zip(categories)
            .flat_map(|(column, cats)| cats.iter().map(move |c| format!("{}_{}", column, c)))
            .collect()
    }
}

impl ColumnStep for OneHotEncoder {
    fn fit(&mut self, data: &ColumnData) -> Result<()> {
        let columns = data.categorical_columns(Self::NAME)?;
        let mut names = Vec::with_capacity(columns.len());
        let mut categories = Vec::with_capacity(columns.len());
        for (name, values) in columns {
            let seen: BTreeSet<&str> = values.iter().flatten().map(String::as_str).collect();
            if seen.is_empty() {
                return Err(PipelineError::AllMissing {
                    step: Self::NAME.to_string(),
                    column: name.to_string(),
                });
            }
            names.push(name.to_string());
            categories.push(seen.into_iter().map(str::to_string).collect());
        }
        self.columns = names;
        self.categories = Some(categories);
        Ok(())
    }

    fn transform(&self, data: &ColumnData) -> Result<ColumnData> {
        let categories = self
            .categories
            .as_ref()
            .ok_or_else(|| PipelineError::NotFitted(Self::NAME.to_string()))?;
        let columns = data.categorical_columns(Self::NAME)?;
        check_width(Self::NAME, categories.len(), columns.len())?;

        let n_rows = data.n_rows();
        let width: usize = categories.iter().map(Vec::len).sum();
        let mut out = Matrix::zeros(n_rows, width);

        let mut offset = 0;
        for ((name, values), cats) in columns.iter().zip(categories) {
            for (row, value) in values.iter().enumerate() {
                let Some(value) = value else {
                    return Err(PipelineError::MissingValue {
                        step: Self::NAME.to_string(),
                        column: name.to_string(),
                    });
                };
                match cats.binary_search(value) {
                    Ok(pos) => out.set(row, offset + pos, 1.0),
                    Err(_) if self.handle_unknown == HandleUnknown::Ignore => {}
                    Err(_) => {
                        return Err(PipelineError::UnknownCategory {
                            column: name.to_string(),
                            value: value.clone(),
                        })
                    }
                }
            }
            offset += cats.len();
        }

        Ok(ColumnData::Dense(out))
    }

    fn is_fitted(&self) -> bool {
        self.categories.is_some()
    }

    fn name(&self) -> &str {
        Self::NAME
    }
}
