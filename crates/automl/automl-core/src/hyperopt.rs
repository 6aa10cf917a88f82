//! Cross-validated exhaustive grid search

use algorithm_core::prelude::*;
use automl_api::GridSearchConfig;
use automl_spi::{
    AutoMLError, CandidateKind, HyperparameterSearch, ParamGrid, ParamSet, Result, SearchResult,
};
use data_spi::Matrix;
use rayon::prelude::*;

use crate::factory::instantiate;
use crate::kfold::KFold;

/// Training and validation slices of one fold.
struct Fold {
    train_x: Matrix,
    train_y: Vec<f64>,
    valid_x: Matrix,
    valid_y: Vec<f64>,
}

/// Grid search scored by mean R² over contiguous k folds
///
/// Every grid point is fitted on each fold's training rows and scored on its
/// validation rows. A point whose fit fails on any fold scores NaN and can
/// never be selected. The first point with the highest mean wins and is refit
/// on all rows.
#[derive(Debug, Clone)]
pub struct GridSearchCV {
    config: GridSearchConfig,
    seed: u64,
}

impl Default for GridSearchCV {
    fn default() -> Self {
        Self::new(GridSearchConfig::default())
    }
}

impl GridSearchCV {
    pub fn new(config: GridSearchConfig) -> Self {
        Self { config, seed: 42 }
    }

    /// Seed handed to randomized candidates
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn config(&self) -> &GridSearchConfig {
        &self.config
    }

    fn folds(&self, x: &Matrix, y: &[f64]) -> Result<Vec<Fold>> {
        let splits = KFold::new(self.config.cv_folds)?.splits(x.n_rows())?;
        Ok(splits
            .into_iter()
            .map(|split| Fold {
                train_x: x.select_rows(&split.train),
                train_y: split.train.iter().map(|&i| y[i]).collect(),
                valid_x: x.select_rows(&split.validation),
                valid_y: split.validation.iter().map(|&i| y[i]).collect(),
            })
            .collect())
    }

    /// Mean validation R² of an unfitted model across folds.
    fn cross_validate(model: &RegressionModel, folds: &[Fold]) -> algorithm_spi::Result<f64> {
        let mut total = 0.0;
        for fold in folds {
            let mut fitted = model.clone();
            fitted.fit(&fold.train_x, &fold.train_y)?;
            let predicted = fitted.predict(&fold.valid_x)?;
            total += r2_score(&fold.valid_y, &predicted);
        }
        Ok(total / folds.len() as f64)
    }
}

impl HyperparameterSearch for GridSearchCV {
    type Model = RegressionModel;

    fn search(
        &self,
        kind: CandidateKind,
        grid: &ParamGrid,
        x: &Matrix,
        y: &[f64],
    ) -> Result<SearchResult<RegressionModel>> {
        if x.n_rows() != y.len() {
            return Err(AlgorithmError::DimensionMismatch {
                expected: x.n_rows(),
                actual: y.len(),
            }
            .into());
        }

        // Building every model up front rejects a bad grid before any fitting.
        let candidates = grid
            .combinations()?
            .into_iter()
            .map(|params| instantiate(kind, &params, self.seed).map(|model| (params, model)))
            .collect::<Result<Vec<_>>>()?;
        let folds = self.folds(x, y)?;

        tracing::debug!(
            candidate = %kind,
            points = candidates.len(),
            folds = folds.len(),
            parallel = self.config.parallel,
            "grid search started"
        );

        let score = |(params, model): (ParamSet, RegressionModel)| {
            let outcome = Self::cross_validate(&model, &folds);
            (params, outcome)
        };
        let evaluated: Vec<(ParamSet, algorithm_spi::Result<f64>)> = if self.config.parallel {
            candidates.into_par_iter().map(score).collect()
        } else {
            candidates.into_iter().map(score).collect()
        };

        let mut first_error = None;
        let mut cv_results = Vec::with_capacity(evaluated.len());
        for (params, outcome) in evaluated {
            let mean = match outcome {
                Ok(mean) => mean,
                Err(e) => {
                    tracing::warn!(candidate = %kind, params = %params, error = %e, "grid point failed");
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                    f64::NAN
                }
            };
            cv_results.push((params, mean));
        }

        let mut best: Option<(usize, f64)> = None;
        for (i, (_, mean)) in cv_results.iter().enumerate() {
            if mean.is_nan() {
                continue;
            }
            match best {
                Some((_, current)) if *mean <= current => {}
                _ => best = Some((i, *mean)),
            }
        }

        let (best_index, best_cv_score) = match (best, first_error) {
            (Some(best), _) => best,
            (None, Some(source)) => {
                return Err(AutoMLError::CandidateFailed {
                    candidate: kind.to_string(),
                    source,
                })
            }
            (None, None) => {
                return Err(AutoMLError::NoCandidates(format!(
                    "no grid point of '{}' produced a score",
                    kind
                )))
            }
        };
        let best_params = cv_results[best_index].0.clone();

        let mut model = instantiate(kind, &best_params, self.seed)?;
        model
            .fit(x, y)
            .map_err(|source| AutoMLError::CandidateFailed {
                candidate: kind.to_string(),
                source,
            })?;

        tracing::debug!(
            candidate = %kind,
            params = %best_params,
            cv_score = best_cv_score,
            "grid search finished"
        );

        Ok(SearchResult {
            model,
            best_params,
            best_cv_score,
            cv_results,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear_data(n: usize) -> (Matrix, Vec<f64>) {
        let rows: Vec<Vec<f64>> = (0..n)
            .map(|i| vec![i as f64, ((i * 5) % 7) as f64])
            .collect();
        let y = rows.iter().map(|r| 3.0 * r[0] - 2.0 * r[1] + 1.0).collect();
        (Matrix::from_rows(&rows).unwrap(), y)
    }

    #[test]
    fn test_linear_defaults_score_perfectly() {
        let (x, y) = linear_data(30);
        let result = GridSearchCV::default()
            .search(CandidateKind::LinearRegression, &ParamGrid::new(), &x, &y)
            .unwrap();
        assert!(result.best_params.is_empty());
        assert_eq!(result.cv_results.len(), 1);
        assert!(result.model.is_fitted());
        assert!((result.best_cv_score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_results_follow_grid_order() {
        let (x, y) = linear_data(40);
        let grid = ParamGrid::new().with("n_neighbors", [5i64, 7, 9, 11]);
        let result = GridSearchCV::default()
            .search(CandidateKind::KNeighbors, &grid, &x, &y)
            .unwrap();
        let order: Vec<String> = result.cv_results.iter().map(|(p, _)| p.to_string()).collect();
        assert_eq!(
            order,
            vec!["n_neighbors=5", "n_neighbors=7", "n_neighbors=9", "n_neighbors=11"]
        );
        let best = result
            .cv_results
            .iter()
            .map(|(_, s)| *s)
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(result.best_cv_score, best);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let (x, y) = linear_data(36);
        let grid = ParamGrid::new().with("n_estimators", [8i64, 16]);
        let sequential = GridSearchCV::default()
            .search(CandidateKind::RandomForest, &grid, &x, &y)
            .unwrap();
        let parallel = GridSearchCV::new(GridSearchConfig::default().with_parallel(true))
            .search(CandidateKind::RandomForest, &grid, &x, &y)
            .unwrap();

        assert_eq!(sequential.best_params, parallel.best_params);
        for ((pa, sa), (pb, sb)) in sequential.cv_results.iter().zip(&parallel.cv_results) {
            assert_eq!(pa, pb);
            assert_eq!(sa.to_bits(), sb.to_bits());
        }
        assert_eq!(sequential.model, parallel.model);
    }

    #[test]
    fn test_failing_points_are_skipped() {
        // 9 rows in 3 folds leaves 6 training rows: k = 7 cannot fit.
        let (x, y) = linear_data(9);
        let grid = ParamGrid::new().with("n_neighbors", [7i64, 3]);
        let result = GridSearchCV::default()
            .search(CandidateKind::KNeighbors, &grid, &x, &y)
            .unwrap();
        assert!(result.cv_results[0].1.is_nan());
        assert_eq!(result.best_params.to_string(), "n_neighbors=3");
    }

    #[test]
    fn test_all_points_failing() {
        let (x, y) = linear_data(9);
        let grid = ParamGrid::new().with("n_neighbors", [7i64, 8]);
        let err = GridSearchCV::default()
            .search(CandidateKind::KNeighbors, &grid, &x, &y)
            .err()
            .unwrap();
        assert!(matches!(err, AutoMLError::CandidateFailed { .. }));
    }

    #[test]
    fn test_bad_grid_rejected_before_fitting() {
        let (x, y) = linear_data(12);
        let grid = ParamGrid::new().with("criterion", ["gini"]);
        let err = GridSearchCV::default()
            .search(CandidateKind::DecisionTree, &grid, &x, &y)
            .err()
            .unwrap();
        assert!(matches!(err, AutoMLError::InvalidGrid { .. }));
    }

    #[test]
    fn test_too_few_rows_for_folds() {
        let (x, y) = linear_data(2);
        let err = GridSearchCV::default()
            .search(CandidateKind::LinearRegression, &ParamGrid::new(), &x, &y)
            .err()
            .unwrap();
        assert!(matches!(err, AutoMLError::InsufficientData { .. }));
    }
}
