//! Ordinary least squares regression.

use algorithm_spi::{AlgorithmError, Regressor, Result};
use data_spi::Matrix;
use serde::{Deserialize, Serialize};

use crate::utils::validation::{check_fit_input, check_predict_input, mean};

/// Relative pivot tolerance below which a direction counts as degenerate
const PIVOT_TOLERANCE: f64 = 1e-10;

/// Linear regression fitted by least squares with an intercept
///
/// Solves the normal equations on centered data. Collinear columns (such
/// as a complete block of one-hot indicators) make the system
/// rank-deficient; degenerate directions get a zero coefficient, which
/// leaves fitted values unchanged.
///
/// # Example
///
/// ```rust
/// use algorithm_core::prelude::*;
/// use data_spi::Matrix;
///
/// let x = Matrix::from_rows(&[vec![1.0], vec![2.0], vec![3.0]]).unwrap();
/// let mut model = LinearRegression::new();
/// model.fit(&x, &[3.0, 5.0, 7.0]).unwrap();
/// assert!((model.intercept() - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinearRegression {
    coefficients: Vec<f64>,
    intercept: f64,
    fitted: bool,
}

impl LinearRegression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Solve the symmetric system `a w = b` by Gauss-Jordan elimination with
    /// partial pivoting; free variables are set to zero.
    fn solve(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Vec<f64> {
        let n = b.len();
        let scale = (0..n).map(|i| a[i][i].abs()).fold(0.0, f64::max);
        let tolerance = scale * PIVOT_TOLERANCE;

        let mut pivots = Vec::with_capacity(n);
        let mut row = 0;
        for col in 0..n {
            if row == n {
                break;
            }
            let (pivot, magnitude) = (row..n)
                .map(|r| (r, a[r][col].abs()))
                .fold((row, -1.0), |best, cur| if cur.1 > best.1 { cur } else { best });
            if magnitude <= tolerance {
                continue;
            }

            a.swap(row, pivot);
            b.swap(row, pivot);

            let p = a[row][col];
            for v in a[row].iter_mut() {
                *v /= p;
            }
            b[row] /= p;

            for r in 0..n {
                if r == row {
                    continue;
                }
                let factor = a[r][col];
                if factor == 0.0 {
                    continue;
                }
                for c in 0..n {
                    a[r][c] -= factor * a[row][c];
                }
                b[r] -= factor * b[row];
            }

            pivots.push((row, col));
            row += 1;
        }

        let mut w = vec![0.0; n];
        for (r, c) in pivots {
            w[c] = b[r];
        }
        w
    }
}

impl Regressor for LinearRegression {
    fn fit(&mut self, x: &Matrix, y: &[f64]) -> Result<()> {
        check_fit_input(x, y, 1)?;

        let p = x.n_cols();
        let x_mean: Vec<f64> = (0..p).map(|c| mean(&x.column(c))).collect();
        let y_mean = mean(y);

        // X'X and X'y on centered data
        let mut xtx = vec![vec![0.0; p]; p];
        let mut xty = vec![0.0; p];
        for (row, &target) in x.rows().zip(y) {
            let centered: Vec<f64> = row.iter().zip(&x_mean).map(|(v, m)| v - m).collect();
            let yc = target - y_mean;
            for i in 0..p {
                xty[i] += centered[i] * yc;
                for j in i..p {
                    xtx[i][j] += centered[i] * centered[j];
                }
            }
        }
        for i in 0..p {
            for j in 0..i {
                xtx[i][j] = xtx[j][i];
            }
        }

        let coefficients = Self::solve(xtx, xty);
        if coefficients.iter().any(|c| !c.is_finite()) {
            return Err(AlgorithmError::NumericalError(
                "least squares solution is not finite".to_string(),
            ));
        }

        self.intercept = y_mean
            - coefficients
                .iter()
                .zip(&x_mean)
                .map(|(c, m)| c * m)
                .sum::<f64>();
        self.coefficients = coefficients;
        self.fitted = true;
        Ok(())
    }

    fn predict(&self, x: &Matrix) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(AlgorithmError::NotFitted);
        }
        check_predict_input(x, self.coefficients.len())?;

        Ok(x.rows()
            .map(|row| {
                self.intercept
                    + row
                        .iter()
                        .zip(&self.coefficients)
                        .map(|(v, c)| v * c)
                        .sum::<f64>()
            })
            .collect())
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}
