//! AdaBoost.R2 regressor.

use algorithm_spi::{AlgorithmError, Regressor, Result};
use data_spi::Matrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::tree::DecisionTreeRegressor;
use crate::utils::validation::{check_fit_input, check_predict_input};

/// AdaBoost.R2 (Drucker, 1997) with linear loss over depth-limited trees
///
/// Each stage draws a weighted bootstrap sample, fits a tree and reweights
/// rows by their normalized error. Boosting stops early on a perfect fit or
/// once a stage's weighted error reaches 0.5. Predictions are the weighted
/// median of the stage predictions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdaBoostRegressor {
    n_estimators: usize,
    learning_rate: f64,
    max_depth: usize,
    seed: u64,
    estimators: Vec<DecisionTreeRegressor>,
    estimator_weights: Vec<f64>,
    n_features: usize,
    fitted: bool,
}

impl Default for AdaBoostRegressor {
    fn default() -> Self {
        Self {
            n_estimators: 50,
            learning_rate: 1.0,
            max_depth: 3,
            seed: 0,
            estimators: Vec::new(),
            estimator_weights: Vec::new(),
            n_features: 0,
            fitted: false,
        }
    }
}

impl AdaBoostRegressor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_n_estimators(mut self, n: usize) -> Self {
        self.n_estimators = n;
        self
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn n_estimators(&self) -> usize {
        self.n_estimators
    }

    /// Number of stages actually kept after early stopping
    pub fn n_fitted_estimators(&self) -> usize {
        self.estimators.len()
    }

    fn validate(&self) -> Result<()> {
        if !(self.learning_rate > 0.0) {
            return Err(AlgorithmError::InvalidParameter {
                name: "learning_rate".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        if self.n_estimators == 0 {
            return Err(AlgorithmError::InvalidParameter {
                name: "n_estimators".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Draw `n` row indices with replacement, proportional to `weights`.
    fn weighted_sample(rng: &mut StdRng, weights: &[f64]) -> Vec<usize> {
        let mut cumulative = Vec::with_capacity(weights.len());
        let mut total = 0.0;
        for w in weights {
            total += w;
            cumulative.push(total);
        }
        let last = weights.len() - 1;
        (0..weights.len())
            .map(|_| {
                let u = rng.gen::<f64>() * total;
                cumulative.partition_point(|&c| c <= u).min(last)
            })
            .collect()
    }

    fn weighted_median(&self, row: &[f64]) -> f64 {
        let mut votes: Vec<(f64, f64)> = self
            .estimators
            .iter()
            .zip(&self.estimator_weights)
            .map(|(tree, &w)| (tree.predict_row(row), w))
            .collect();
        votes.sort_by(|a, b| a.0.total_cmp(&b.0));

        let half = votes.iter().map(|(_, w)| w).sum::<f64>() / 2.0;
        let mut acc = 0.0;
        for (prediction, weight) in &votes {
            acc += weight;
            if acc >= half {
                return *prediction;
            }
        }
        votes.last().map_or(0.0, |(p, _)| *p)
    }
}

impl Regressor for AdaBoostRegressor {
    fn fit(&mut self, x: &Matrix, y: &[f64]) -> Result<()> {
        self.validate()?;
        check_fit_input(x, y, 1)?;

        let n = x.n_rows();
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut weights = vec![1.0 / n as f64; n];
        let mut estimators = Vec::with_capacity(self.n_estimators);
        let mut estimator_weights = Vec::with_capacity(self.n_estimators);

        for stage in 0..self.n_estimators {
            let indices = Self::weighted_sample(&mut rng, &weights);
            let mut tree = DecisionTreeRegressor::new().with_max_depth(Some(self.max_depth));
            tree.fit_indices(x, y, &indices)?;

            let mut errors: Vec<f64> = x
                .rows()
                .zip(y)
                .map(|(row, t)| (tree.predict_row(row) - t).abs())
                .collect();
            let max_error = errors.iter().copied().fold(0.0, f64::max);
            if max_error > 0.0 {
                for e in errors.iter_mut() {
                    *e /= max_error;
                }
            }
            let estimator_error: f64 = weights.iter().zip(&errors).map(|(w, e)| w * e).sum();

            if estimator_error <= 0.0 {
                estimators.push(tree);
                estimator_weights.push(1.0);
                break;
            }
            if estimator_error >= 0.5 {
                if estimators.is_empty() {
                    estimators.push(tree);
                    estimator_weights.push(1.0);
                }
                break;
            }

            let beta = estimator_error / (1.0 - estimator_error);
            estimators.push(tree);
            estimator_weights.push(self.learning_rate * (1.0 / beta).ln());

            if stage + 1 < self.n_estimators {
                for (w, e) in weights.iter_mut().zip(&errors) {
                    *w *= beta.powf((1.0 - e) * self.learning_rate);
                }
                let total: f64 = weights.iter().sum();
                if !(total > 0.0) {
                    break;
                }
                for w in weights.iter_mut() {
                    *w /= total;
                }
            }
        }

        self.estimators = estimators;
        self.estimator_weights = estimator_weights;
        self.n_features = x.n_cols();
        self.fitted = true;
        Ok(())
    }

    fn predict(&self, x: &Matrix) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(AlgorithmError::NotFitted);
        }
        check_predict_input(x, self.n_features)?;
        Ok(x.rows().map(|row| self.weighted_median(row)).collect())
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::metrics::r2_score;

    fn data() -> (Matrix, Vec<f64>) {
        let rows: Vec<Vec<f64>> = (0..100)
            .map(|i| vec![(i % 20) as f64, ((i * 3) % 7) as f64])
            .collect();
        let y = rows.iter().map(|r| 5.0 * r[0] + r[1]).collect();
        (Matrix::from_rows(&rows).unwrap(), y)
    }

    #[test]
    fn test_adaboost_fits() {
        let (x, y) = data();
        let mut model = AdaBoostRegressor::new().with_n_estimators(32).with_seed(42);
        model.fit(&x, &y).unwrap();
        assert!(model.n_fitted_estimators() >= 1);
        assert!(model.n_fitted_estimators() <= 32);
        assert!(r2_score(&y, &model.predict(&x).unwrap()) > 0.9);
    }

    #[test]
    fn test_adaboost_is_seeded() {
        let (x, y) = data();
        let mut a = AdaBoostRegressor::new().with_n_estimators(16).with_seed(3);
        let mut b = a.clone();
        a.fit(&x, &y).unwrap();
        b.fit(&x, &y).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_perfect_fit_stops_early() {
        let x = Matrix::from_rows(&[vec![0.0], vec![1.0], vec![0.0], vec![1.0]]).unwrap();
        let mut model = AdaBoostRegressor::new().with_n_estimators(10);
        model.fit(&x, &[2.0, 4.0, 2.0, 4.0]).unwrap();
        assert_eq!(model.n_fitted_estimators(), 1);
    }

    #[test]
    fn test_weighted_median_vote() {
        let x = Matrix::from_rows(&[vec![0.0]]).unwrap();
        let leaf = |v: f64| {
            let mut t = DecisionTreeRegressor::new();
            t.fit(&x, &[v]).unwrap();
            t
        };
        let model = AdaBoostRegressor {
            estimators: vec![leaf(1.0), leaf(5.0), leaf(9.0)],
            estimator_weights: vec![0.2, 0.2, 0.6],
            n_features: 1,
            fitted: true,
            ..AdaBoostRegressor::default()
        };
        assert_eq!(model.predict(&x).unwrap(), vec![9.0]);
    }
}
