//! End-to-end tests for model training

use automl_core::{
    Candidate, CandidateKind, ModelTrainer, ParamGrid, TrainerConfig, AutoMLError,
};
use algorithm_core::{RegressionModel, Regressor};
use common::ErrorCategory;
use data_spi::Matrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Two standardized scores, a one-hot pair and a target in the last column.
///
/// With `noise_only` the target ignores the features entirely.
fn dataset(n: usize, seed: u64, noise_only: bool) -> Matrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let rows: Vec<Vec<f64>> = (0..n)
        .map(|_| {
            let writing: f64 = rng.gen_range(-2.0..2.0);
            let reading: f64 = writing * 0.8 + rng.gen_range(-0.5..0.5);
            let lunch = if rng.gen_bool(0.6) { 1.0 } else { 0.0 };
            let target = if noise_only {
                rng.gen_range(0.0..100.0)
            } else {
                66.0 + 9.0 * writing + 4.0 * reading + 5.0 * lunch + rng.gen_range(-1.0..1.0)
            };
            vec![writing, reading, lunch, 1.0 - lunch, target]
        })
        .collect();
    Matrix::from_rows(&rows).unwrap()
}

fn seeded_candidates() -> Vec<Candidate> {
    vec![
        Candidate::new(
            CandidateKind::RandomForest,
            ParamGrid::new().with("n_estimators", [8i64, 16]),
        ),
        Candidate::new(
            CandidateKind::GradientBoosting,
            ParamGrid::new()
                .with("learning_rate", [0.1, 0.05])
                .with("subsample", [0.7, 0.9])
                .with("n_estimators", [16i64, 32]),
        ),
        Candidate::new(
            CandidateKind::AdaBoost,
            ParamGrid::new()
                .with("learning_rate", [0.1, 0.5])
                .with("n_estimators", [8i64, 16]),
        ),
        Candidate::defaults(CandidateKind::LinearRegression),
    ]
}

#[test]
fn test_noise_target_is_rejected_and_nothing_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let model_path = dir.path().join("artifacts/model.json");
    let trainer = ModelTrainer::new(TrainerConfig::new(&model_path).with_parallel(true));

    let err = trainer
        .train(&dataset(90, 1, true), &dataset(30, 2, true))
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Acceptance);
    match err.source_as::<AutoMLError>() {
        Some(AutoMLError::NoAcceptableModel {
            best_score,
            threshold,
            ..
        }) => {
            assert!(*best_score < 0.6);
            assert_eq!(*threshold, 0.6);
        }
        other => panic!("unexpected source: {:?}", other),
    }
    assert!(!model_path.exists());
}

#[test]
fn test_signal_target_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let model_path = dir.path().join("model.json");
    let trainer = ModelTrainer::with_candidates(TrainerConfig::new(&model_path), seeded_candidates());

    let train = dataset(120, 3, false);
    let test = dataset(40, 4, false);
    let outcome = trainer.train_with_report(&train, &test).unwrap();

    assert!(outcome.score >= 0.6);
    assert_eq!(outcome.report.len(), 4);
    let (best_name, best_score) = outcome.report.best().unwrap();
    assert_eq!(best_name, outcome.winner.to_string());
    assert_eq!(best_score, outcome.score);

    // the persisted model reproduces the reported score
    let model: RegressionModel = artifact::load(&model_path).unwrap();
    let (x_test, y_test) = test.split_last_column().unwrap();
    let predicted = model.predict(&x_test).unwrap();
    let rescored = algorithm_core::utils::metrics::r2_score(&y_test, &predicted);
    assert_eq!(rescored.to_bits(), outcome.score.to_bits());
}

#[test]
fn test_training_is_deterministic() {
    let train = dataset(100, 5, false);
    let test = dataset(30, 6, false);

    let run = |parallel: bool| {
        let dir = tempfile::tempdir().unwrap();
        let config = TrainerConfig::new(dir.path().join("model.json")).with_parallel(parallel);
        let trainer = ModelTrainer::with_candidates(config, seeded_candidates());
        let outcome = trainer.train_with_report(&train, &test).unwrap();
        let model: RegressionModel = artifact::load(dir.path().join("model.json")).unwrap();
        (outcome, model)
    };

    let (first, first_model) = run(false);
    let (second, second_model) = run(false);
    let (third, third_model) = run(true);

    assert_eq!(first, second);
    assert_eq!(first, third);
    assert_eq!(first_model, second_model);
    assert_eq!(first_model, third_model);
}

#[test]
fn test_mismatched_widths_are_data_errors() {
    let dir = tempfile::tempdir().unwrap();
    let trainer = ModelTrainer::new(TrainerConfig::new(dir.path().join("model.json")));
    let narrow = Matrix::from_rows(&vec![vec![1.0, 2.0, 3.0]; 10]).unwrap();

    let err = trainer.train(&dataset(30, 7, false), &narrow).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Data);
    assert!(err.to_string().starts_with("error occurred in ["));
}
