//! Gradient boosting regressor with squared-error loss.

use algorithm_spi::{AlgorithmError, Regressor, Result};
use data_spi::Matrix;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::tree::{Criterion, DecisionTreeRegressor};
use crate::utils::validation::{check_fit_input, check_predict_input, mean};

/// Additive model of shallow trees, each fitted to the current residuals
///
/// Starts from the target mean; every stage adds `learning_rate` times a
/// `friedman_mse` tree of depth `max_depth`. With `subsample < 1` each stage
/// sees a seeded random subset of rows drawn without replacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientBoostingRegressor {
    learning_rate: f64,
    n_estimators: usize,
    subsample: f64,
    max_depth: usize,
    seed: u64,
    init: f64,
    trees: Vec<DecisionTreeRegressor>,
    n_features: usize,
    fitted: bool,
}

impl Default for GradientBoostingRegressor {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            n_estimators: 100,
            subsample: 1.0,
            max_depth: 3,
            seed: 0,
            init: 0.0,
            trees: Vec::new(),
            n_features: 0,
            fitted: false,
        }
    }
}

impl GradientBoostingRegressor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_n_estimators(mut self, n: usize) -> Self {
        self.n_estimators = n;
        self
    }

    /// Fraction of rows used per stage, in (0, 1]
    pub fn with_subsample(mut self, subsample: f64) -> Self {
        self.subsample = subsample;
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

    pub fn subsample(&self) -> f64 {
        self.subsample
    }

    pub fn n_estimators(&self) -> usize {
        self.n_estimators
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
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
        if !(self.subsample > 0.0 && self.subsample <= 1.0) {
            return Err(AlgorithmError::InvalidParameter {
                name: "subsample".to_string(),
                reason: "must be in (0, 1]".to_string(),
            });
        }
        Ok(())
    }
}

impl Regressor for GradientBoostingRegressor {
    fn fit(&mut self, x: &Matrix, y: &[f64]) -> Result<()> {
        self.validate()?;
        check_fit_input(x, y, 1)?;

        let n = x.n_rows();
        let n_inbag = ((self.subsample * n as f64) as usize).max(1);
        let mut rng = StdRng::seed_from_u64(self.seed);

        let init = mean(y);
        let mut current = vec![init; n];
        let mut trees = Vec::with_capacity(self.n_estimators);

        for _ in 0..self.n_estimators {
            let residuals: Vec<f64> = y.iter().zip(&current).map(|(t, f)| t - f).collect();
            let indices: Vec<usize> = if n_inbag < n {
                rand::seq::index::sample(&mut rng, n, n_inbag).into_vec()
            } else {
                (0..n).collect()
            };

            let mut tree = DecisionTreeRegressor::new()
                .with_criterion(Criterion::FriedmanMse)
                .with_max_depth(Some(self.max_depth));
            tree.fit_indices(x, &residuals, &indices)?;

            for (f, row) in current.iter_mut().zip(x.rows()) {
                *f += self.learning_rate * tree.predict_row(row);
            }
            trees.push(tree);
        }

        self.init = init;
        self.trees = trees;
        self.n_features = x.n_cols();
        self.fitted = true;
        Ok(())
    }

    fn predict(&self, x: &Matrix) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(AlgorithmError::NotFitted);
        }
        check_predict_input(x, self.n_features)?;

        Ok(x.rows()
            .map(|row| {
                self.trees.iter().fold(self.init, |acc, tree| {
                    acc + self.learning_rate * tree.predict_row(row)
                })
            })
            .collect())
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}
