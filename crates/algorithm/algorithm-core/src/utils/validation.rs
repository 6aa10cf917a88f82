//! Input validation shared by regressors.

use algorithm_spi::{AlgorithmError, Result};
use data_spi::Matrix;

/// Check a training matrix and target before fitting.
pub fn check_fit_input(x: &Matrix, y: &[f64], min_rows: usize) -> Result<()> {
    if x.n_rows() != y.len() {
        return Err(AlgorithmError::DimensionMismatch {
            expected: x.n_rows(),
            actual: y.len(),
        });
    }
    if x.n_rows() < min_rows.max(1) {
        return Err(AlgorithmError::InsufficientData {
            required: min_rows.max(1),
            actual: x.n_rows(),
        });
    }
    if x.n_cols() == 0 {
        return Err(AlgorithmError::InvalidData(
            "feature matrix has no columns".to_string(),
        ));
    }
    if x.as_slice().iter().any(|v| !v.is_finite()) {
        return Err(AlgorithmError::InvalidData(
            "feature matrix contains NaN or infinite values".to_string(),
        ));
    }
    if y.iter().any(|v| !v.is_finite()) {
        return Err(AlgorithmError::InvalidData(
            "target contains NaN or infinite values".to_string(),
        ));
    }
    Ok(())
}

/// Check a prediction matrix against the fitted feature count.
pub fn check_predict_input(x: &Matrix, n_features: usize) -> Result<()> {
    if x.n_cols() != n_features {
        return Err(AlgorithmError::DimensionMismatch {
            expected: n_features,
            actual: x.n_cols(),
        });
    }
    if x.as_slice().iter().any(|v| !v.is_finite()) {
        return Err(AlgorithmError::InvalidData(
            "feature matrix contains NaN or infinite values".to_string(),
        ));
    }
    Ok(())
}

pub(crate) fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median of `values`, averaging the two middle values of an even count.
pub(crate) fn median(values: &mut [f64]) -> f64 {
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x() -> Matrix {
        Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap()
    }

    #[test]
    fn test_fit_input_checks() {
        assert!(check_fit_input(&x(), &[1.0, 2.0], 2).is_ok());
        assert!(matches!(
            check_fit_input(&x(), &[1.0], 1),
            Err(AlgorithmError::DimensionMismatch { .. })
        ));
        assert!(matches!(
            check_fit_input(&x(), &[1.0, 2.0], 3),
            Err(AlgorithmError::InsufficientData { .. })
        ));
        assert!(matches!(
            check_fit_input(&x(), &[1.0, f64::NAN], 1),
            Err(AlgorithmError::InvalidData(_))
        ));
    }

    #[test]
    fn test_predict_input_width() {
        assert!(check_predict_input(&x(), 2).is_ok());
        assert_eq!(
            check_predict_input(&x(), 3).unwrap_err(),
            AlgorithmError::DimensionMismatch {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_median() {
        assert_eq!(median(&mut [3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(&mut [4.0, 1.0, 3.0, 2.0]), 2.5);
    }
}
