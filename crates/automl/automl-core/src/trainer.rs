//! Model trainer service

use algorithm_core::prelude::*;
use automl_api::{default_candidates, Candidate, TrainerConfig};
use automl_spi::{ModelSelector, TrainingOutcome};
use data_spi::Matrix;

use crate::hyperopt::GridSearchCV;
use crate::model_selection::{features_and_target, CandidateSelector};

/// Largest accepted gap between the selection-time score and the re-score
/// computed after the winner is persisted.
pub const RESCORE_TOLERANCE: f64 = 1e-9;

/// Selects, persists and verifies the best regression model.
///
/// Takes the transformed train and test matrices (target in the last column)
/// and writes the winning fitted model to [`TrainerConfig::model_path`].
/// Nothing is written when selection fails or no candidate reaches the
/// acceptance threshold.
#[derive(Debug, Clone)]
pub struct ModelTrainer {
    config: TrainerConfig,
    selector: CandidateSelector,
}

impl Default for ModelTrainer {
    fn default() -> Self {
        Self::new(TrainerConfig::default())
    }
}

impl ModelTrainer {
    pub fn new(config: TrainerConfig) -> Self {
        Self::with_candidates(config, default_candidates())
    }

    /// Use a custom candidate registry instead of the default one.
    pub fn with_candidates(config: TrainerConfig, candidates: Vec<Candidate>) -> Self {
        let search = GridSearchCV::new(config.search.clone()).with_seed(config.seed);
        let selector = CandidateSelector::new(candidates, search)
            .with_acceptance_threshold(config.acceptance_threshold);
        Self { config, selector }
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    pub fn candidates(&self) -> &[Candidate] {
        self.selector.candidates()
    }

    /// Train, persist the winner and return its test-split R².
    pub fn train(&self, train: &Matrix, test: &Matrix) -> common::Result<f64> {
        Ok(self.train_with_report(train, test)?.score)
    }

    /// Like [`ModelTrainer::train`] but also returns the winner, its
    /// hyperparameters and every candidate's score.
    pub fn train_with_report(&self, train: &Matrix, test: &Matrix) -> common::Result<TrainingOutcome> {
        tracing::info!(
            train_rows = train.n_rows(),
            test_rows = test.n_rows(),
            width = train.n_cols(),
            candidates = self.candidates().len(),
            "model training started"
        );

        let (model, mut outcome) = self.selector.select(train, test)?;

        artifact::save(&self.config.model_path, &model)?;

        let (x_test, y_test) = features_and_target(test)?;
        let predicted = model.predict(&x_test)?;
        let rescored = r2_score(&y_test, &predicted);
        if (rescored - outcome.score).abs() > RESCORE_TOLERANCE {
            tracing::warn!(
                selected = outcome.score,
                rescored,
                "persisted model re-scored differently from selection"
            );
        }
        outcome.score = rescored;

        tracing::info!(
            winner = %outcome.winner,
            score = outcome.score,
            path = %self.config.model_path.display(),
            "model training finished"
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use automl_spi::{AutoMLError, CandidateKind};
    use common::ErrorCategory;

    fn matrix(n: usize, offset: usize) -> Matrix {
        let rows: Vec<Vec<f64>> = (offset..offset + n)
            .map(|i| {
                let a = (i % 13) as f64;
                let b = ((i * 3) % 7) as f64;
                vec![a, b, 0.5 * a + 3.0 * b - 1.0]
            })
            .collect();
        Matrix::from_rows(&rows).unwrap()
    }

    fn linear_only(dir: &std::path::Path) -> ModelTrainer {
        ModelTrainer::with_candidates(
            TrainerConfig::new(dir.join("model.json")),
            vec![Candidate::defaults(CandidateKind::LinearRegression)],
        )
    }

    #[test]
    fn test_train_persists_and_returns_score() {
        let dir = tempfile::tempdir().unwrap();
        let trainer = linear_only(dir.path());
        let score = trainer.train(&matrix(40, 0), &matrix(15, 40)).unwrap();
        assert!((score - 1.0).abs() < 1e-9);
        assert!(dir.path().join("model.json").exists());

        let reloaded: RegressionModel = artifact::load(dir.path().join("model.json")).unwrap();
        assert_eq!(reloaded.algorithm(), "linear_regression");
    }

    #[test]
    fn test_rejection_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = TrainerConfig::new(dir.path().join("model.json")).with_acceptance_threshold(2.0);
        let trainer = ModelTrainer::with_candidates(
            config,
            vec![Candidate::defaults(CandidateKind::LinearRegression)],
        );
        let err = trainer.train(&matrix(40, 0), &matrix(15, 40)).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Acceptance);
        assert!(matches!(
            err.source_as::<AutoMLError>(),
            Some(AutoMLError::NoAcceptableModel { .. })
        ));
        assert!(!dir.path().join("model.json").exists());
    }

    #[test]
    fn test_report_holds_every_candidate() {
        let dir = tempfile::tempdir().unwrap();
        let trainer = ModelTrainer::with_candidates(
            TrainerConfig::new(dir.path().join("model.json")),
            vec![
                Candidate::defaults(CandidateKind::DecisionTree),
                Candidate::defaults(CandidateKind::LinearRegression),
            ],
        );
        let outcome = trainer
            .train_with_report(&matrix(40, 0), &matrix(15, 40))
            .unwrap();
        assert_eq!(outcome.report.len(), 2);
        assert_eq!(outcome.winner, CandidateKind::LinearRegression);
        assert_eq!(outcome.report.get("Linear Regression"), Some(outcome.score));
    }

    #[test]
    fn test_default_registry() {
        let trainer = ModelTrainer::default();
        assert_eq!(trainer.candidates().len(), 7);
        assert_eq!(trainer.config().acceptance_threshold, 0.6);
    }
}
