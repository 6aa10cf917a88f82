//! CSV data source.

use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use data_spi::{schema, DataError, DataSource, Result, StudentRecord};
use tracing::debug;

/// Reads student records from a comma-separated file with a header row.
///
/// Columns are matched by header name, so their order in the file is free.
/// A labeled source also requires the target column.
#[derive(Debug, Clone)]
pub struct CsvDataSource {
    path: PathBuf,
    display: String,
    labeled: bool,
}

impl CsvDataSource {
    /// Source for training/test files; every feature and the target must be present.
    pub fn labeled(path: impl Into<PathBuf>) -> Self {
        Self::new(path.into(), true)
    }

    /// Source for inference files; only the feature columns are required.
    pub fn unlabeled(path: impl Into<PathBuf>) -> Self {
        Self::new(path.into(), false)
    }

    fn new(path: PathBuf, labeled: bool) -> Self {
        let display = path.display().to_string();
        Self {
            path,
            display,
            labeled,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn required(&self) -> Vec<&'static str> {
        if self.labeled {
            schema::required_columns().collect()
        } else {
            schema::FEATURE_COLUMNS.to_vec()
        }
    }
}

impl DataSource for CsvDataSource {
    fn name(&self) -> &str {
        &self.display
    }

    fn load(&self) -> Result<Vec<StudentRecord>> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .from_path(&self.path)
            .map_err(|e| DataError::Unreadable {
                path: self.display.clone(),
                reason: e.to_string(),
            })?;

        let headers = reader.headers().map_err(|e| DataError::Unreadable {
            path: self.display.clone(),
            reason: e.to_string(),
        })?;
        for column in self.required() {
            if !headers.iter().any(|h| h == column) {
                return Err(DataError::MissingColumn(column.to_string()));
            }
        }

        let mut records = Vec::new();
        for (i, row) in reader.deserialize::<StudentRecord>().enumerate() {
            let record = row.map_err(|e| DataError::Malformed {
                path: self.display.clone(),
                row: i + 1,
                reason: e.to_string(),
            })?;
            if let Some(column) = non_finite_column(&record) {
                return Err(DataError::Malformed {
                    path: self.display.clone(),
                    row: i + 1,
                    reason: format!("non-finite value in column '{column}'"),
                });
            }
            records.push(record);
        }

        if records.is_empty() {
            return Err(DataError::Empty);
        }

        debug!(path = %self.display, rows = records.len(), "Loaded CSV source");
        Ok(records)
    }
}

/// First numeric column holding `inf` or `NaN`, which csv parses as valid `f64`.
fn non_finite_column(record: &StudentRecord) -> Option<&'static str> {
    schema::NUMERIC_COLUMNS
        .into_iter()
        .chain(std::iter::once(schema::TARGET_COLUMN))
        .find(|column| record.numeric(column).is_some_and(|v| !v.is_finite()))
}
