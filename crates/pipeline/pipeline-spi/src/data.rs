//! Data flowing between pipeline steps.

use data_spi::{Column, Matrix};

use crate::{PipelineError, Result};

/// A block of columns at some stage of a pipeline.
///
/// Steps start from `Raw` columns (cells may be missing) and finish on a
/// `Dense` matrix.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    /// Named source columns, possibly with missing cells
    Raw(Vec<(String, Column)>),
    /// Fully numeric block, row-major
    Dense(Matrix),
}

impl ColumnData {
    pub fn n_rows(&self) -> usize {
        match self {
            ColumnData::Raw(columns) => columns.first().map_or(0, |(_, c)| c.len()),
            ColumnData::Dense(matrix) => matrix.n_rows(),
        }
    }

    pub fn n_columns(&self) -> usize {
        match self {
            ColumnData::Raw(columns) => columns.len(),
            ColumnData::Dense(matrix) => matrix.n_cols(),
        }
    }

    /// Numeric raw columns with their names, rejecting any other shape.
    pub fn numeric_columns(&self, step: &str) -> Result<Vec<(&str, &[Option<f64>])>> {
        let ColumnData::Raw(columns) = self else {
            return Err(PipelineError::UnexpectedInput {
                step: step.to_string(),
                expected: "raw numeric columns".to_string(),
            });
        };
        columns
            .iter()
            .map(|(name, column)| match column {
                Column::Numeric(values) => Ok((name.as_str(), values.as_slice())),
                Column::Categorical(_) => Err(PipelineError::UnexpectedInput {
                    step: step.to_string(),
                    expected: format!("numeric column, got categorical '{}'", name),
                }),
            })
            .collect()
    }

    /// Categorical raw columns with their names, rejecting any other shape.
    pub fn categorical_columns(&self, step: &str) -> Result<Vec<(&str, &[Option<String>])>> {
        let ColumnData::Raw(columns) = self else {
            return Err(PipelineError::UnexpectedInput {
                step: step.to_string(),
                expected: "raw categorical columns".to_string(),
            });
        };
        columns
            .iter()
            .map(|(name, column)| match column {
                Column::Categorical(values) => Ok((name.as_str(), values.as_slice())),
                Column::Numeric(_) => Err(PipelineError::UnexpectedInput {
                    step: step.to_string(),
                    expected: format!("categorical column, got numeric '{}'", name),
                }),
            })
            .collect()
    }

    /// View the block as a dense matrix.
    ///
    /// Raw numeric columns convert when they have no missing cells.
    pub fn to_dense(&self, step: &str) -> Result<Matrix> {
        match self {
            ColumnData::Dense(matrix) => Ok(matrix.clone()),
            ColumnData::Raw(_) => {
                let columns = self.numeric_columns(step)?;
                let n_rows = self.n_rows();
                let mut data = Vec::with_capacity(n_rows * columns.len());
                for row in 0..n_rows {
                    for (name, values) in &columns {
                        let value = values[row].ok_or_else(|| PipelineError::MissingValue {
                            step: step.to_string(),
                            column: name.to_string(),
                        })?;
                        data.push(value);
                    }
                }
                Ok(Matrix::from_vec(n_rows, columns.len(), data)?)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_numeric_to_dense() {
        let data = ColumnData::Raw(vec![
            ("a".into(), Column::Numeric(vec![Some(1.0), Some(2.0)])),
            ("b".into(), Column::Numeric(vec![Some(3.0), Some(4.0)])),
        ]);
        let dense = data.to_dense("scaler").unwrap();
        assert_eq!(dense.row(0), &[1.0, 3.0]);
        assert_eq!(dense.row(1), &[2.0, 4.0]);
        assert_eq!(data.n_rows(), 2);
        assert_eq!(data.n_columns(), 2);
    }

    #[test]
    fn test_to_dense_rejects_gaps() {
        let data = ColumnData::Raw(vec![("a".into(), Column::Numeric(vec![Some(1.0), None]))]);
        let err = data.to_dense("scaler").unwrap_err();
        assert!(matches!(err, PipelineError::MissingValue { .. }));
    }

    #[test]
    fn test_column_kind_checks() {
        let data = ColumnData::Raw(vec![(
            "gender".into(),
            Column::Categorical(vec![Some("female".into())]),
        )]);
        assert!(data.categorical_columns("encoder").is_ok());
        assert!(matches!(
            data.numeric_columns("imputer").unwrap_err(),
            PipelineError::UnexpectedInput { .. }
        ));
    }
}
