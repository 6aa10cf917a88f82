//! The ordered set of candidates a training run compares.

use serde::{Deserialize, Serialize};

use automl_spi::{CandidateKind, ParamGrid};

const N_ESTIMATORS: [i64; 6] = [8, 16, 32, 64, 128, 256];

/// A candidate family and the grid searched for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub kind: CandidateKind,
    pub grid: ParamGrid,
}

impl Candidate {
    pub fn new(kind: CandidateKind, grid: ParamGrid) -> Self {
        Self { kind, grid }
    }

    /// Candidate searched over default hyperparameters only.
    pub fn defaults(kind: CandidateKind) -> Self {
        Self::new(kind, ParamGrid::new())
    }

    pub fn name(&self) -> &'static str {
        self.kind.display_name()
    }
}

/// The standard registry, in comparison order.
///
/// Order matters: on equal scores the earlier candidate wins.
pub fn default_candidates() -> Vec<Candidate> {
    vec![
        Candidate::new(
            CandidateKind::RandomForest,
            ParamGrid::new().with("n_estimators", N_ESTIMATORS),
        ),
        Candidate::new(
            CandidateKind::DecisionTree,
            ParamGrid::new().with(
                "criterion",
                ["squared_error", "friedman_mse", "absolute_error", "poisson"],
            ),
        ),
        Candidate::new(
            CandidateKind::GradientBoosting,
            ParamGrid::new()
                .with("learning_rate", [0.1, 0.01, 0.05, 0.001])
                .with("subsample", [0.6, 0.7, 0.8, 0.9])
                .with("n_estimators", N_ESTIMATORS),
        ),
        Candidate::defaults(CandidateKind::LinearRegression),
        Candidate::new(
            CandidateKind::XgBoost,
            ParamGrid::new()
                .with("learning_rate", [0.1, 0.01, 0.05, 0.001])
                .with("n_estimators", N_ESTIMATORS),
        ),
        Candidate::new(
            CandidateKind::CatBoost,
            ParamGrid::new()
                .with("depth", [6i64, 8, 10])
                .with("learning_rate", [0.01, 0.05, 0.1])
                .with("iterations", [30i64, 50, 100]),
        ),
        Candidate::new(
            CandidateKind::AdaBoost,
            ParamGrid::new()
                .with("learning_rate", [0.1, 0.01, 0.5, 0.001])
                .with("n_estimators", N_ESTIMATORS),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_and_names() {
        let names: Vec<&str> = default_candidates().iter().map(Candidate::name).collect();
        assert_eq!(
            names,
            vec![
                "Random Forest",
                "Decision Tree",
                "Gradient Boosting",
                "Linear Regression",
                "XGBRegressor",
                "CatBoosting Regressor",
                "AdaBoost Regressor",
            ]
        );
    }

    #[test]
    fn test_grid_sizes() {
        let sizes: Vec<usize> = default_candidates().iter().map(|c| c.grid.len()).collect();
        assert_eq!(sizes, vec![6, 4, 96, 1, 24, 27, 24]);
    }

    #[test]
    fn test_linear_has_empty_grid() {
        let linear = default_candidates()
            .into_iter()
            .find(|c| c.kind == CandidateKind::LinearRegression)
            .unwrap();
        assert!(linear.grid.is_empty());
    }

    #[test]
    fn test_k_neighbors_is_opt_in() {
        assert!(default_candidates()
            .iter()
            .all(|c| c.kind != CandidateKind::KNeighbors));
    }
}
