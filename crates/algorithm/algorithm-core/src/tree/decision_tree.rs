//! CART decision tree regressor.

use algorithm_spi::{AlgorithmError, Regressor, Result};
use data_spi::Matrix;
use serde::{Deserialize, Serialize};

use super::criterion::{Criterion, SplitScorer};
use crate::utils::validation::{check_fit_input, check_predict_input};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
enum Node {
    Leaf {
        value: f64,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

struct BestSplit {
    feature: usize,
    threshold: f64,
    score: f64,
}

/// Binary regression tree grown greedily, one best split per node
///
/// Rows with `x[feature] <= threshold` go left. Features are scanned in
/// column order and split positions in ascending value order; the first
/// strictly best split wins, so fitting is deterministic.
///
/// # Example
///
/// ```rust
/// use algorithm_core::prelude::*;
/// use data_spi::Matrix;
///
/// let x = Matrix::from_rows(&[vec![1.0], vec![2.0], vec![10.0], vec![11.0]]).unwrap();
/// let mut tree = DecisionTreeRegressor::new().with_max_depth(Some(1));
/// tree.fit(&x, &[1.0, 1.0, 5.0, 5.0]).unwrap();
/// assert_eq!(tree.predict(&x).unwrap(), vec![1.0, 1.0, 5.0, 5.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeRegressor {
    criterion: Criterion,
    max_depth: Option<usize>,
    min_samples_split: usize,
    min_samples_leaf: usize,
    nodes: Vec<Node>,
    n_features: usize,
    fitted: bool,
}

impl Default for DecisionTreeRegressor {
    fn default() -> Self {
        Self {
            criterion: Criterion::default(),
            max_depth: None,
            min_samples_split: 2,
            min_samples_leaf: 1,
            nodes: Vec::new(),
            n_features: 0,
            fitted: false,
        }
    }
}

impl DecisionTreeRegressor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_criterion(mut self, criterion: Criterion) -> Self {
        self.criterion = criterion;
        self
    }

    /// Limit tree depth; `None` grows until leaves are pure.
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_min_samples_split(mut self, n: usize) -> Self {
        self.min_samples_split = n;
        self
    }

    pub fn with_min_samples_leaf(mut self, n: usize) -> Self {
        self.min_samples_leaf = n;
        self
    }

    pub fn criterion(&self) -> Criterion {
        self.criterion
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Number of nodes, leaves included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Depth of the deepest leaf; a lone root leaf has depth 0
    pub fn depth(&self) -> usize {
        fn walk(nodes: &[Node], id: usize) -> usize {
            match nodes[id] {
                Node::Leaf { .. } => 0,
                Node::Split { left, right, .. } => 1 + walk(nodes, left).max(walk(nodes, right)),
            }
        }
        if self.nodes.is_empty() {
            0
        } else {
            walk(&self.nodes, 0)
        }
    }

    fn validate(&self) -> Result<()> {
        if self.min_samples_split < 2 {
            return Err(AlgorithmError::InvalidParameter {
                name: "min_samples_split".to_string(),
                reason: "must be at least 2".to_string(),
            });
        }
        if self.min_samples_leaf < 1 {
            return Err(AlgorithmError::InvalidParameter {
                name: "min_samples_leaf".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.max_depth == Some(0) {
            return Err(AlgorithmError::InvalidParameter {
                name: "max_depth".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Grow the tree on the rows listed in `indices` (repeats allowed).
    ///
    /// Inputs must already be validated.
    pub(crate) fn fit_indices(
        &mut self,
        x: &Matrix,
        y: &[f64],
        indices: &[usize],
    ) -> Result<()> {
        self.validate()?;
        if indices.is_empty() {
            return Err(AlgorithmError::InsufficientData {
                required: 1,
                actual: 0,
            });
        }
        if self.criterion == Criterion::Poisson {
            if indices.iter().any(|&i| y[i] < 0.0) {
                return Err(AlgorithmError::InvalidData(
                    "poisson criterion requires a non-negative target".to_string(),
                ));
            }
            if indices.iter().map(|&i| y[i]).sum::<f64>() <= 0.0 {
                return Err(AlgorithmError::InvalidData(
                    "poisson criterion requires a positive target sum".to_string(),
                ));
            }
        }

        self.nodes.clear();
        self.n_features = x.n_cols();
        self.grow(x, y, indices.to_vec(), 0);
        self.fitted = true;
        Ok(())
    }

    fn grow(&mut self, x: &Matrix, y: &[f64], indices: Vec<usize>, depth: usize) -> usize {
        let id = self.nodes.len();
        let mut values: Vec<f64> = indices.iter().map(|&i| y[i]).collect();
        let value = self.criterion.leaf_value(&mut values);
        self.nodes.push(Node::Leaf { value });

        let n = indices.len();
        let pure = values.iter().all(|v| *v == values[0]);
        if pure
            || n < self.min_samples_split
            || n < 2 * self.min_samples_leaf
            || self.max_depth.map_or(false, |d| depth >= d)
        {
            return id;
        }

        let Some(split) = self.best_split(x, y, &indices) else {
            return id;
        };
        let (left_rows, right_rows): (Vec<usize>, Vec<usize>) = indices
            .into_iter()
            .partition(|&i| x.get(i, split.feature) <= split.threshold);

        let left = self.grow(x, y, left_rows, depth + 1);
        let right = self.grow(x, y, right_rows, depth + 1);
        self.nodes[id] = Node::Split {
            feature: split.feature,
            threshold: split.threshold,
            left,
            right,
        };
        id
    }

    fn best_split(&self, x: &Matrix, y: &[f64], indices: &[usize]) -> Option<BestSplit> {
        let n = indices.len();
        let leaf = self.min_samples_leaf;
        let mut best: Option<BestSplit> = None;

        let mut order = indices.to_vec();
        for feature in 0..x.n_cols() {
            order.sort_by(|&a, &b| x.get(a, feature).total_cmp(&x.get(b, feature)));
            let values: Vec<f64> = order.iter().map(|&i| x.get(i, feature)).collect();
            if values[0] == values[n - 1] {
                continue;
            }
            let ys: Vec<f64> = order.iter().map(|&i| y[i]).collect();
            let scorer = SplitScorer::new(self.criterion, &ys);

            for pos in leaf..=(n - leaf) {
                if values[pos - 1] == values[pos] {
                    continue;
                }
                let Some(score) = scorer.score(pos) else {
                    continue;
                };
                if best.as_ref().map_or(true, |b| score < b.score) {
                    let (lo, hi) = (values[pos - 1], values[pos]);
                    let mid = lo / 2.0 + hi / 2.0;
                    let threshold = if mid >= hi { lo } else { mid };
                    best = Some(BestSplit {
                        feature,
                        threshold,
                        score,
                    });
                }
            }
        }
        best
    }

    pub(crate) fn predict_row(&self, row: &[f64]) -> f64 {
        let mut id = 0;
        loop {
            match self.nodes[id] {
                Node::Leaf { value } => return value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    id = if row[feature] <= threshold { left } else { right };
                }
            }
        }
    }
}

impl Regressor for DecisionTreeRegressor {
    fn fit(&mut self, x: &Matrix, y: &[f64]) -> Result<()> {
        check_fit_input(x, y, 1)?;
        let indices: Vec<usize> = (0..x.n_rows()).collect();
        self.fit_indices(x, y, &indices)
    }

    fn predict(&self, x: &Matrix) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(AlgorithmError::NotFitted);
        }
        check_predict_input(x, self.n_features)?;
        Ok(x.rows().map(|row| self.predict_row(row)).collect())
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}
