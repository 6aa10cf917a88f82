//! Dense row-major matrix exchanged between preprocessing and models.

use serde::{Deserialize, Serialize};

use crate::error::{DataError, Result};

/// Dense `rows x cols` matrix of `f64`, stored row-major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(DataError::ShapeMismatch {
                expected: format!("{} values for {}x{}", rows * cols, rows, cols),
                actual: format!("{} values", data.len()),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Build from row vectors, which must all share one length.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(DataError::ShapeMismatch {
                    expected: format!("{} columns", cols),
                    actual: format!("{} columns in row {}", row.len(), i),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    pub fn n_rows(&self) -> usize {
        self.rows
    }

    pub fn n_cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.rows).map(move |r| self.row(r))
    }

    pub fn column(&self, col: usize) -> Vec<f64> {
        (0..self.rows).map(|r| self.get(r, col)).collect()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Concatenate columns of `other` to the right of `self`.
    pub fn hstack(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols == 0 && self.rows == 0 {
            return Ok(other.clone());
        }
        if self.rows != other.rows {
            return Err(DataError::ShapeMismatch {
                expected: format!("{} rows", self.rows),
                actual: format!("{} rows", other.rows),
            });
        }
        let cols = self.cols + other.cols;
        let mut data = Vec::with_capacity(self.rows * cols);
        for r in 0..self.rows {
            data.extend_from_slice(self.row(r));
            data.extend_from_slice(other.row(r));
        }
        Ok(Matrix {
            rows: self.rows,
            cols,
            data,
        })
    }

    /// Append `values` as a new last column.
    pub fn append_column(&self, values: &[f64]) -> Result<Matrix> {
        let column = Matrix::from_vec(values.len(), 1, values.to_vec())?;
        self.hstack(&column)
    }

    /// Split into (all columns but the last, last column).
    pub fn split_last_column(&self) -> Result<(Matrix, Vec<f64>)> {
        if self.cols == 0 {
            return Err(DataError::ShapeMismatch {
                expected: "at least one column".to_string(),
                actual: "0 columns".to_string(),
            });
        }
        let width = self.cols - 1;
        let mut features = Vec::with_capacity(self.rows * width);
        let mut last = Vec::with_capacity(self.rows);
        for row in self.rows() {
            features.extend_from_slice(&row[..width]);
            last.push(row[width]);
        }
        Ok((
            Matrix {
                rows: self.rows,
                cols: width,
                data: features,
            },
            last,
        ))
    }

    /// New matrix holding the given rows, in the given order.
    pub fn select_rows(&self, indices: &[usize]) -> Matrix {
        let mut data = Vec::with_capacity(indices.len() * self.cols);
        for &i in indices {
            data.extend_from_slice(self.row(i));
        }
        Matrix {
            rows: indices.len(),
            cols: self.cols,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix {
        Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap()
    }

    #[test]
    fn test_from_rows_and_access() {
        let m = sample();
        assert_eq!(m.shape(), (3, 2));
        assert_eq!(m.get(1, 0), 3.0);
        assert_eq!(m.row(2), &[5.0, 6.0]);
        assert_eq!(m.column(1), vec![2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(err, DataError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_append_then_split_last_column() {
        let m = sample();
        let with_target = m.append_column(&[10.0, 20.0, 30.0]).unwrap();
        assert_eq!(with_target.shape(), (3, 3));
        assert_eq!(with_target.row(0), &[1.0, 2.0, 10.0]);

        let (features, target) = with_target.split_last_column().unwrap();
        assert_eq!(features, m);
        assert_eq!(target, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_append_column_row_mismatch() {
        let err = sample().append_column(&[1.0]).unwrap_err();
        assert!(matches!(err, DataError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_hstack_onto_empty() {
        let empty = Matrix::zeros(0, 0);
        assert_eq!(empty.hstack(&sample()).unwrap(), sample());
    }

    #[test]
    fn test_select_rows() {
        let picked = sample().select_rows(&[2, 0]);
        assert_eq!(picked.row(0), &[5.0, 6.0]);
        assert_eq!(picked.row(1), &[1.0, 2.0]);
    }
}
