//! Held-out comparison of tuned candidates

use algorithm_core::prelude::*;
use automl_api::{default_candidates, Candidate, GridSearchConfig, DEFAULT_ACCEPTANCE_THRESHOLD};
use automl_spi::{
    AutoMLError, CandidateKind, HyperparameterSearch, ModelReport, ModelSelector, ParamSet,
    Result, TrainingOutcome,
};
use data_spi::{DataError, Matrix};

use crate::hyperopt::GridSearchCV;

/// Tunes every registered candidate on the training split, scores each on
/// the test split and keeps the best.
///
/// Candidates are visited in registry order; on equal test scores the
/// earlier one wins. A winner below the acceptance threshold is rejected
/// with [`AutoMLError::NoAcceptableModel`].
#[derive(Debug, Clone)]
pub struct CandidateSelector {
    candidates: Vec<Candidate>,
    search: GridSearchCV,
    acceptance_threshold: f64,
}

impl Default for CandidateSelector {
    fn default() -> Self {
        Self::new(default_candidates(), GridSearchCV::default())
    }
}

impl CandidateSelector {
    pub fn new(candidates: Vec<Candidate>, search: GridSearchCV) -> Self {
        Self {
            candidates,
            search,
            acceptance_threshold: DEFAULT_ACCEPTANCE_THRESHOLD,
        }
    }

    pub fn with_acceptance_threshold(mut self, threshold: f64) -> Self {
        self.acceptance_threshold = threshold;
        self
    }

    pub fn with_search_config(mut self, config: GridSearchConfig, seed: u64) -> Self {
        self.search = GridSearchCV::new(config).with_seed(seed);
        self
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn acceptance_threshold(&self) -> f64 {
        self.acceptance_threshold
    }
}

/// Split a matrix whose last column is the target.
pub(crate) fn features_and_target(matrix: &Matrix) -> Result<(Matrix, Vec<f64>)> {
    if matrix.n_cols() < 2 {
        return Err(DataError::ShapeMismatch {
            expected: "at least one feature column plus the target".to_string(),
            actual: format!("{} columns", matrix.n_cols()),
        }
        .into());
    }
    Ok(matrix.split_last_column()?)
}

impl ModelSelector for CandidateSelector {
    type Model = RegressionModel;

    fn select(&self, train: &Matrix, test: &Matrix) -> Result<(RegressionModel, TrainingOutcome)> {
        if train.n_cols() != test.n_cols() {
            return Err(DataError::ShapeMismatch {
                expected: format!("{} columns in the test matrix", train.n_cols()),
                actual: format!("{} columns", test.n_cols()),
            }
            .into());
        }
        let (x_train, y_train) = features_and_target(train)?;
        let (x_test, y_test) = features_and_target(test)?;
        if y_test.is_empty() {
            return Err(AutoMLError::InsufficientData {
                required: 1,
                actual: 0,
            });
        }
        if self.candidates.is_empty() {
            return Err(AutoMLError::NoCandidates(
                "the candidate registry is empty".to_string(),
            ));
        }

        let mut report = ModelReport::new();
        let mut fitted: Vec<(CandidateKind, ParamSet, RegressionModel)> =
            Vec::with_capacity(self.candidates.len());

        for candidate in &self.candidates {
            let searched = self
                .search
                .search(candidate.kind, &candidate.grid, &x_train, &y_train)?;
            let predicted = searched
                .model
                .predict(&x_test)
                .map_err(|source| AutoMLError::CandidateFailed {
                    candidate: candidate.name().to_string(),
                    source,
                })?;
            let score = r2_score(&y_test, &predicted);

            tracing::info!(
                candidate = candidate.name(),
                params = %searched.best_params,
                cv_score = searched.best_cv_score,
                score,
                "candidate scored"
            );
            report.record(candidate.name(), score);
            fitted.push((candidate.kind, searched.best_params, searched.model));
        }

        let (best_name, score) = report.best().ok_or_else(|| {
            AutoMLError::NoCandidates("no candidate produced a finite test score".to_string())
        })?;
        // A repeated name overwrites its report entry, so the last fit holds that score.
        let position = fitted
            .iter()
            .rposition(|(kind, _, _)| kind.display_name() == best_name)
            .ok_or_else(|| AutoMLError::NoCandidates(format!("no fitted model for '{}'", best_name)))?;
        let (winner, params, model) = fitted.swap_remove(position);

        if score < self.acceptance_threshold {
            tracing::warn!(
                best = %winner,
                score,
                threshold = self.acceptance_threshold,
                "no candidate reached the acceptance threshold"
            );
            return Err(AutoMLError::NoAcceptableModel {
                best: winner.to_string(),
                best_score: score,
                threshold: self.acceptance_threshold,
            });
        }

        tracing::info!(winner = %winner, params = %params, score, "best model selected");
        Ok((
            model,
            TrainingOutcome {
                winner,
                params,
                report,
                score,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use automl_spi::ParamGrid;

    /// Target is an exact linear function of the features, target last.
    fn linear_matrix(n: usize, offset: usize) -> Matrix {
        let rows: Vec<Vec<f64>> = (offset..offset + n)
            .map(|i| {
                let a = (i % 17) as f64;
                let b = ((i * 7) % 11) as f64;
                vec![a, b, 2.0 * a - b + 4.0]
            })
            .collect();
        Matrix::from_rows(&rows).unwrap()
    }

    fn quick_candidates() -> Vec<Candidate> {
        vec![
            Candidate::new(
                CandidateKind::KNeighbors,
                ParamGrid::new().with("n_neighbors", [3i64, 5]),
            ),
            Candidate::defaults(CandidateKind::LinearRegression),
            Candidate::defaults(CandidateKind::DecisionTree),
        ]
    }

    #[test]
    fn test_linear_wins_on_linear_target() {
        let selector = CandidateSelector::new(quick_candidates(), GridSearchCV::default());
        let (model, outcome) = selector
            .select(&linear_matrix(60, 0), &linear_matrix(20, 60))
            .unwrap();
        assert_eq!(outcome.winner, CandidateKind::LinearRegression);
        assert_eq!(model.algorithm(), "linear_regression");
        assert!((outcome.score - 1.0).abs() < 1e-9);

        let names: Vec<&str> = outcome.report.iter().map(|(n, _)| n).collect();
        assert_eq!(
            names,
            vec!["K-Neighbors Regressor", "Linear Regression", "Decision Tree"]
        );
    }

    #[test]
    fn test_equal_scores_keep_the_earlier_candidate() {
        let xgb = Candidate::new(
            CandidateKind::XgBoost,
            ParamGrid::new()
                .with("learning_rate", [0.5])
                .with("n_estimators", [32i64]),
        );
        let cat = Candidate::new(
            CandidateKind::CatBoost,
            ParamGrid::new()
                .with("depth", [6i64])
                .with("learning_rate", [0.5])
                .with("iterations", [32i64]),
        );
        let train = linear_matrix(60, 0);
        let test = linear_matrix(20, 60);

        for (candidates, expected) in [
            (vec![xgb.clone(), cat.clone()], CandidateKind::XgBoost),
            (vec![cat, xgb], CandidateKind::CatBoost),
        ] {
            let selector = CandidateSelector::new(candidates, GridSearchCV::default())
                .with_acceptance_threshold(0.0);
            let (_, outcome) = selector.select(&train, &test).unwrap();
            let scores: Vec<f64> = outcome.report.iter().map(|(_, s)| s).collect();
            assert_eq!(scores[0], scores[1]);
            assert_eq!(outcome.winner, expected);
        }
    }

    #[test]
    fn test_threshold_rejects_winner() {
        let selector = CandidateSelector::new(quick_candidates(), GridSearchCV::default())
            .with_acceptance_threshold(1.5);
        let err = selector
            .select(&linear_matrix(60, 0), &linear_matrix(20, 60))
            .unwrap_err();
        match err {
            AutoMLError::NoAcceptableModel {
                best, threshold, ..
            } => {
                assert_eq!(best, "Linear Regression");
                assert_eq!(threshold, 1.5);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_width_mismatch() {
        let narrow = Matrix::from_rows(&vec![vec![1.0, 2.0]; 10]).unwrap();
        let err = CandidateSelector::default()
            .select(&linear_matrix(10, 0), &narrow)
            .unwrap_err();
        assert!(matches!(err, AutoMLError::Data(DataError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_empty_registry() {
        let selector = CandidateSelector::new(Vec::new(), GridSearchCV::default());
        let err = selector
            .select(&linear_matrix(10, 0), &linear_matrix(5, 10))
            .unwrap_err();
        assert!(matches!(err, AutoMLError::NoCandidates(_)));
    }

    #[test]
    fn test_target_only_matrix_rejected() {
        let target_only = Matrix::from_rows(&vec![vec![1.0]; 6]).unwrap();
        let err = CandidateSelector::default()
            .select(&target_only, &target_only)
            .unwrap_err();
        assert!(matches!(err, AutoMLError::Data(_)));
    }
}
