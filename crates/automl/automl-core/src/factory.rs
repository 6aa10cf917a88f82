//! Turn a candidate kind and a grid point into an unfitted model.

use algorithm_core::prelude::*;
use automl_spi::{AutoMLError, CandidateKind, ParamSet, ParamValue, Result};

/// Hyperparameters each family accepts.
fn accepted(kind: CandidateKind) -> &'static [&'static str] {
    match kind {
        CandidateKind::RandomForest => &["n_estimators", "criterion", "max_depth"],
        CandidateKind::DecisionTree => &["criterion", "max_depth"],
        CandidateKind::GradientBoosting => {
            &["learning_rate", "subsample", "n_estimators", "max_depth"]
        }
        CandidateKind::LinearRegression => &[],
        CandidateKind::XgBoost => &["learning_rate", "n_estimators", "max_depth"],
        CandidateKind::CatBoost => &["depth", "learning_rate", "iterations"],
        CandidateKind::AdaBoost => &["learning_rate", "n_estimators", "max_depth"],
        CandidateKind::KNeighbors => &["n_neighbors"],
    }
}

/// Tree depth of the XGBoost and CatBoost flavoured boosters when none is given.
const BOOSTER_DEPTH: usize = 6;

/// Build an unfitted model of `kind` configured with `params`.
///
/// Parameters not in `params` keep the model's defaults. Randomized families
/// receive `seed`.
pub fn instantiate(kind: CandidateKind, params: &ParamSet, seed: u64) -> Result<RegressionModel> {
    let allowed = accepted(kind);
    if let Some((name, _)) = params.iter().find(|(name, _)| !allowed.contains(name)) {
        return Err(invalid(kind, format!("unknown parameter '{}'", name)));
    }

    let model = match kind {
        CandidateKind::RandomForest => {
            let mut forest = RandomForestRegressor::new().with_seed(seed);
            if let Some(n) = usize_param(kind, params, "n_estimators")? {
                forest = forest.with_n_estimators(n);
            }
            if let Some(criterion) = criterion_param(kind, params)? {
                forest = forest.with_criterion(criterion);
            }
            if let Some(depth) = usize_param(kind, params, "max_depth")? {
                forest = forest.with_max_depth(Some(depth));
            }
            forest.into()
        }
        CandidateKind::DecisionTree => {
            let mut tree = DecisionTreeRegressor::new();
            if let Some(criterion) = criterion_param(kind, params)? {
                tree = tree.with_criterion(criterion);
            }
            if let Some(depth) = usize_param(kind, params, "max_depth")? {
                tree = tree.with_max_depth(Some(depth));
            }
            tree.into()
        }
        CandidateKind::GradientBoosting => {
            let mut boosting = GradientBoostingRegressor::new().with_seed(seed);
            if let Some(rate) = f64_param(kind, params, "learning_rate")? {
                boosting = boosting.with_learning_rate(rate);
            }
            if let Some(subsample) = f64_param(kind, params, "subsample")? {
                boosting = boosting.with_subsample(subsample);
            }
            if let Some(n) = usize_param(kind, params, "n_estimators")? {
                boosting = boosting.with_n_estimators(n);
            }
            if let Some(depth) = usize_param(kind, params, "max_depth")? {
                boosting = boosting.with_max_depth(depth);
            }
            boosting.into()
        }
        CandidateKind::LinearRegression => LinearRegression::new().into(),
        CandidateKind::XgBoost => {
            let depth = usize_param(kind, params, "max_depth")?.unwrap_or(BOOSTER_DEPTH);
            let mut boosting = GradientBoostingRegressor::new()
                .with_seed(seed)
                .with_max_depth(depth);
            if let Some(rate) = f64_param(kind, params, "learning_rate")? {
                boosting = boosting.with_learning_rate(rate);
            }
            if let Some(n) = usize_param(kind, params, "n_estimators")? {
                boosting = boosting.with_n_estimators(n);
            }
            boosting.into()
        }
        CandidateKind::CatBoost => {
            let depth = usize_param(kind, params, "depth")?.unwrap_or(BOOSTER_DEPTH);
            let mut boosting = GradientBoostingRegressor::new()
                .with_seed(seed)
                .with_max_depth(depth);
            if let Some(rate) = f64_param(kind, params, "learning_rate")? {
                boosting = boosting.with_learning_rate(rate);
            }
            if let Some(n) = usize_param(kind, params, "iterations")? {
                boosting = boosting.with_n_estimators(n);
            }
            boosting.into()
        }
        CandidateKind::AdaBoost => {
            let mut boost = AdaBoostRegressor::new().with_seed(seed);
            if let Some(rate) = f64_param(kind, params, "learning_rate")? {
                boost = boost.with_learning_rate(rate);
            }
            if let Some(n) = usize_param(kind, params, "n_estimators")? {
                boost = boost.with_n_estimators(n);
            }
            if let Some(depth) = usize_param(kind, params, "max_depth")? {
                boost = boost.with_max_depth(depth);
            }
            boost.into()
        }
        CandidateKind::KNeighbors => {
            let k = usize_param(kind, params, "n_neighbors")?.unwrap_or(5);
            KNeighborsRegressor::new(k)
                .map_err(|e| invalid(kind, e.to_string()))?
                .into()
        }
    };

    Ok(model)
}

fn invalid(kind: CandidateKind, reason: String) -> AutoMLError {
    AutoMLError::InvalidGrid {
        candidate: kind.to_string(),
        reason,
    }
}

fn usize_param(kind: CandidateKind, params: &ParamSet, name: &str) -> Result<Option<usize>> {
    params
        .get(name)
        .map(|v| {
            v.as_usize()
                .ok_or_else(|| invalid(kind, format!("'{}' must be a non-negative integer, got {}", name, v)))
        })
        .transpose()
}

fn f64_param(kind: CandidateKind, params: &ParamSet, name: &str) -> Result<Option<f64>> {
    params
        .get(name)
        .map(|v| {
            v.as_f64()
                .ok_or_else(|| invalid(kind, format!("'{}' must be numeric, got {}", name, v)))
        })
        .transpose()
}

fn criterion_param(kind: CandidateKind, params: &ParamSet) -> Result<Option<Criterion>> {
    params
        .get("criterion")
        .map(|v| match v {
            ParamValue::Text(text) => text.parse().map_err(|e: AlgorithmError| invalid(kind, e.to_string())),
            other => Err(invalid(kind, format!("'criterion' must be text, got {}", other))),
        })
        .transpose()
}
