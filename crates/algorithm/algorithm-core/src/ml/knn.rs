//! K-Nearest Neighbors regression
//!
//! Predicts the mean target of the `k` training rows closest to each query
//! row.
//!
//! ## Distance Metrics
//!
//! - Euclidean distance (default)
//! - Manhattan distance

use algorithm_spi::{AlgorithmError, Regressor, Result};
use data_spi::Matrix;
use serde::{Deserialize, Serialize};

use crate::utils::validation::{check_fit_input, check_predict_input};

/// Distance metric for comparing feature rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    /// Standard Euclidean distance
    #[default]
    Euclidean,
    /// Manhattan (L1) distance
    Manhattan,
}

/// K-Nearest Neighbors regressor with uniform weights
///
/// Equal distances are ordered by training row index, so results do not
/// depend on sort stability.
///
/// # Example
///
/// ```rust
/// use algorithm_core::prelude::*;
/// use data_spi::Matrix;
///
/// let x = Matrix::from_rows(&[vec![0.0], vec![1.0], vec![10.0], vec![11.0]]).unwrap();
/// let mut knn = KNeighborsRegressor::new(2).unwrap();
/// knn.fit(&x, &[1.0, 3.0, 10.0, 12.0]).unwrap();
/// let query = Matrix::from_rows(&[vec![0.4]]).unwrap();
/// assert_eq!(knn.predict(&query).unwrap(), vec![2.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KNeighborsRegressor {
    /// Number of neighbors
    n_neighbors: usize,
    /// Distance metric
    metric: DistanceMetric,
    /// Stored training rows
    train_x: Option<Matrix>,
    /// Stored training targets
    train_y: Vec<f64>,
}

impl KNeighborsRegressor {
    /// Create a new KNN regressor
    ///
    /// # Arguments
    ///
    /// * `n_neighbors` - Number of neighbors to average, at least 1
    pub fn new(n_neighbors: usize) -> Result<Self> {
        if n_neighbors < 1 {
            return Err(AlgorithmError::InvalidParameter {
                name: "n_neighbors".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            n_neighbors,
            metric: DistanceMetric::Euclidean,
            train_x: None,
            train_y: Vec::new(),
        })
    }

    pub fn with_metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    pub fn n_neighbors(&self) -> usize {
        self.n_neighbors
    }

    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    /// Compute distance between two rows
    fn compute_distance(&self, a: &[f64], b: &[f64]) -> f64 {
        match self.metric {
            DistanceMetric::Euclidean => a
                .iter()
                .zip(b.iter())
                .map(|(x, y)| (x - y).powi(2))
                .sum::<f64>()
                .sqrt(),
            DistanceMetric::Manhattan => a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum(),
        }
    }

    /// Indices of the K nearest training rows to a query row
    fn find_neighbors(&self, train: &Matrix, query: &[f64]) -> Vec<usize> {
        let mut distances: Vec<(usize, f64)> = train
            .rows()
            .enumerate()
            .map(|(i, row)| (i, self.compute_distance(query, row)))
            .collect();

        distances.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
        distances.truncate(self.n_neighbors);

        distances.into_iter().map(|(i, _)| i).collect()
    }
}

impl Default for KNeighborsRegressor {
    fn default() -> Self {
        Self {
            n_neighbors: 5,
            metric: DistanceMetric::Euclidean,
            train_x: None,
            train_y: Vec::new(),
        }
    }
}

impl Regressor for KNeighborsRegressor {
    fn fit(&mut self, x: &Matrix, y: &[f64]) -> Result<()> {
        if self.n_neighbors < 1 {
            return Err(AlgorithmError::InvalidParameter {
                name: "n_neighbors".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        check_fit_input(x, y, self.n_neighbors)?;

        self.train_x = Some(x.clone());
        self.train_y = y.to_vec();
        Ok(())
    }

    fn predict(&self, x: &Matrix) -> Result<Vec<f64>> {
        let train = self.train_x.as_ref().ok_or(AlgorithmError::NotFitted)?;
        check_predict_input(x, train.n_cols())?;

        Ok(x.rows()
            .map(|query| {
                let neighbors = self.find_neighbors(train, query);
                neighbors.iter().map(|&i| self.train_y[i]).sum::<f64>() / neighbors.len() as f64
            })
            .collect())
    }

    fn is_fitted(&self) -> bool {
        self.train_x.is_some()
    }
}
