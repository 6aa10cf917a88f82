//! Columnar feature table.

use serde::{Deserialize, Serialize};

use super::record::StudentRecord;
use super::schema::{is_numeric, FEATURE_COLUMNS};
use crate::error::{DataError, Result};

/// A single feature column. Missing cells are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Column {
    Numeric(Vec<Option<f64>>),
    Categorical(Vec<Option<String>>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Numeric(values) => values.len(),
            Column::Categorical(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Column::Numeric(_) => "numeric",
            Column::Categorical(_) => "categorical",
        }
    }
}

/// Feature columns of a table, without the target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureFrame {
    names: Vec<String>,
    columns: Vec<Column>,
    n_rows: usize,
}

impl FeatureFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the seven schema feature columns from records.
    pub fn from_records(records: &[StudentRecord]) -> Self {
        let mut frame = FeatureFrame {
            names: Vec::with_capacity(FEATURE_COLUMNS.len()),
            columns: Vec::with_capacity(FEATURE_COLUMNS.len()),
            n_rows: records.len(),
        };

        for name in FEATURE_COLUMNS {
            let column = if is_numeric(name) {
                Column::Numeric(records.iter().map(|r| r.numeric(name)).collect())
            } else {
                Column::Categorical(
                    records
                        .iter()
                        .map(|r| r.categorical(name).map(str::to_string))
                        .collect(),
                )
            };
            frame.names.push(name.to_string());
            frame.columns.push(column);
        }

        frame
    }

    /// Append a column. Its length must match the existing rows.
    pub fn push_column(&mut self, name: impl Into<String>, column: Column) -> Result<()> {
        let name = name.into();
        if self.columns.is_empty() {
            self.n_rows = column.len();
        } else if column.len() != self.n_rows {
            return Err(DataError::ShapeMismatch {
                expected: format!("{} rows in column '{}'", self.n_rows, name),
                actual: format!("{} rows", column.len()),
            });
        }
        if let Some(pos) = self.names.iter().position(|n| *n == name) {
            self.columns[pos] = column;
        } else {
            self.names.push(name);
            self.columns.push(column);
        }
        Ok(())
    }

    pub fn with_column(mut self, name: impl Into<String>, column: Column) -> Result<Self> {
        self.push_column(name, column)?;
        Ok(self)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| &self.columns[i])
    }

    /// Like [`FeatureFrame::column`] but a missing column is an error.
    pub fn require(&self, name: &str) -> Result<&Column> {
        self.column(name)
            .ok_or_else(|| DataError::MissingColumn(name.to_string()))
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }
}
