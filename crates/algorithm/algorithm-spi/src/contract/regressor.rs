//! Regressor trait for tabular models

use data_spi::Matrix;

use crate::error::Result;

/// Common trait for all regression models
///
/// Follows the fit-predict pattern: `fit` learns from a feature matrix and a
/// target with one value per row, `predict` returns one value per input row.
///
/// # Example
///
/// ```rust,ignore
/// use algorithm_spi::Regressor;
///
/// fn fit_predict<R: Regressor>(model: &mut R, x: &Matrix, y: &[f64]) -> algorithm_spi::Result<Vec<f64>> {
///     model.fit(x, y)?;
///     model.predict(x)
/// }
/// ```
pub trait Regressor {
    /// Fit the model to a feature matrix and target
    ///
    /// Fails when `y` does not have one value per row of `x`, when there are
    /// too few rows, or when a value is not finite.
    fn fit(&mut self, x: &Matrix, y: &[f64]) -> Result<()>;

    /// Predict one value per row of `x`
    ///
    /// `x` must have the column count seen during `fit`.
    fn predict(&self, x: &Matrix) -> Result<Vec<f64>>;

    /// Check if the model has been fitted
    fn is_fitted(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AlgorithmError;

    /// Predicts the training mean regardless of input
    struct MeanRegressor {
        mean: Option<f64>,
    }

    impl Regressor for MeanRegressor {
        fn fit(&mut self, x: &Matrix, y: &[f64]) -> Result<()> {
            if x.n_rows() != y.len() {
                return Err(AlgorithmError::DimensionMismatch {
                    expected: x.n_rows(),
                    actual: y.len(),
                });
            }
            if y.is_empty() {
                return Err(AlgorithmError::InsufficientData {
                    required: 1,
                    actual: 0,
                });
            }
            self.mean = Some(y.iter().sum::<f64>() / y.len() as f64);
            Ok(())
        }

        fn predict(&self, x: &Matrix) -> Result<Vec<f64>> {
            let mean = self.mean.ok_or(AlgorithmError::NotFitted)?;
            Ok(vec![mean; x.n_rows()])
        }

        fn is_fitted(&self) -> bool {
            self.mean.is_some()
        }
    }

    fn features() -> Matrix {
        Matrix::from_rows(&[vec![1.0], vec![2.0], vec![3.0]]).unwrap()
    }

    #[test]
    fn test_fit_predict_cycle() {
        let mut model = MeanRegressor { mean: None };
        assert!(!model.is_fitted());
        model.fit(&features(), &[1.0, 2.0, 3.0]).unwrap();
        assert!(model.is_fitted());
        assert_eq!(model.predict(&features()).unwrap(), vec![2.0; 3]);
    }

    #[test]
    fn test_predict_before_fit() {
        let model = MeanRegressor { mean: None };
        assert_eq!(
            model.predict(&features()).unwrap_err(),
            AlgorithmError::NotFitted
        );
    }

    #[test]
    fn test_target_length_mismatch() {
        let mut model = MeanRegressor { mean: None };
        let err = model.fit(&features(), &[1.0]).unwrap_err();
        assert!(matches!(err, AlgorithmError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_trait_object() {
        let mut model: Box<dyn Regressor> = Box::new(MeanRegressor { mean: None });
        model.fit(&features(), &[3.0, 3.0, 3.0]).unwrap();
        assert_eq!(model.predict(&features()).unwrap()[0], 3.0);
    }
}
