//! Random forest regressor.

use algorithm_spi::{AlgorithmError, Regressor, Result};
use data_spi::Matrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::tree::{Criterion, DecisionTreeRegressor};
use crate::utils::validation::{check_fit_input, check_predict_input};

/// Average of decision trees each grown on a bootstrap sample
///
/// Bootstrap draws come from one seeded generator, so the same seed and
/// data give the same forest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForestRegressor {
    n_estimators: usize,
    criterion: Criterion,
    max_depth: Option<usize>,
    bootstrap: bool,
    seed: u64,
    trees: Vec<DecisionTreeRegressor>,
    n_features: usize,
    fitted: bool,
}

impl Default for RandomForestRegressor {
    fn default() -> Self {
        Self {
            n_estimators: 100,
            criterion: Criterion::SquaredError,
            max_depth: None,
            bootstrap: true,
            seed: 0,
            trees: Vec::new(),
            n_features: 0,
            fitted: false,
        }
    }
}

impl RandomForestRegressor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_n_estimators(mut self, n: usize) -> Self {
        self.n_estimators = n;
        self
    }

    pub fn with_criterion(mut self, criterion: Criterion) -> Self {
        self.criterion = criterion;
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_bootstrap(mut self, bootstrap: bool) -> Self {
        self.bootstrap = bootstrap;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn n_estimators(&self) -> usize {
        self.n_estimators
    }

    pub fn trees(&self) -> &[DecisionTreeRegressor] {
        &self.trees
    }
}

impl Regressor for RandomForestRegressor {
    fn fit(&mut self, x: &Matrix, y: &[f64]) -> Result<()> {
        if self.n_estimators == 0 {
            return Err(AlgorithmError::InvalidParameter {
                name: "n_estimators".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        check_fit_input(x, y, 1)?;

        let n = x.n_rows();
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut trees = Vec::with_capacity(self.n_estimators);
        for _ in 0..self.n_estimators {
            let indices: Vec<usize> = if self.bootstrap {
                (0..n).map(|_| rng.gen_range(0..n)).collect()
            } else {
                (0..n).collect()
            };
            let mut tree = DecisionTreeRegressor::new()
                .with_criterion(self.criterion)
                .with_max_depth(self.max_depth);
            tree.fit_indices(x, y, &indices)?;
            trees.push(tree);
        }

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

        let n_trees = self.trees.len() as f64;
        Ok(x.rows()
            .map(|row| self.trees.iter().map(|t| t.predict_row(row)).sum::<f64>() / n_trees)
            .collect())
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}
