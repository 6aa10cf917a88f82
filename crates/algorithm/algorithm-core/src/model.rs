//! Closed set of regressors that can be trained, compared and persisted.

use algorithm_spi::{Regressor, Result};
use data_spi::Matrix;
use serde::{Deserialize, Serialize};

use crate::ensemble::{AdaBoostRegressor, GradientBoostingRegressor, RandomForestRegressor};
use crate::ml::KNeighborsRegressor;
use crate::regression::LinearRegression;
use crate::tree::DecisionTreeRegressor;

/// Any fitted or unfitted regressor, tagged by algorithm for serialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "algorithm", content = "state", rename_all = "snake_case")]
pub enum RegressionModel {
    LinearRegression(LinearRegression),
    DecisionTree(DecisionTreeRegressor),
    RandomForest(RandomForestRegressor),
    GradientBoosting(GradientBoostingRegressor),
    AdaBoost(AdaBoostRegressor),
    KNeighbors(KNeighborsRegressor),
}

impl RegressionModel {
    /// Algorithm identifier, as used in the serialized tag
    pub fn algorithm(&self) -> &'static str {
        match self {
            RegressionModel::LinearRegression(_) => "linear_regression",
            RegressionModel::DecisionTree(_) => "decision_tree",
            RegressionModel::RandomForest(_) => "random_forest",
            RegressionModel::GradientBoosting(_) => "gradient_boosting",
            RegressionModel::AdaBoost(_) => "ada_boost",
            RegressionModel::KNeighbors(_) => "k_neighbors",
        }
    }

    fn inner(&self) -> &dyn Regressor {
        match self {
            RegressionModel::LinearRegression(m) => m,
            RegressionModel::DecisionTree(m) => m,
            RegressionModel::RandomForest(m) => m,
            RegressionModel::GradientBoosting(m) => m,
            RegressionModel::AdaBoost(m) => m,
            RegressionModel::KNeighbors(m) => m,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Regressor {
        match self {
            RegressionModel::LinearRegression(m) => m,
            RegressionModel::DecisionTree(m) => m,
            RegressionModel::RandomForest(m) => m,
            RegressionModel::GradientBoosting(m) => m,
            RegressionModel::AdaBoost(m) => m,
            RegressionModel::KNeighbors(m) => m,
        }
    }
}

impl Regressor for RegressionModel {
    fn fit(&mut self, x: &Matrix, y: &[f64]) -> Result<()> {
        self.inner_mut().fit(x, y)
    }

    fn predict(&self, x: &Matrix) -> Result<Vec<f64>> {
        self.inner().predict(x)
    }

    fn is_fitted(&self) -> bool {
        self.inner().is_fitted()
    }
}

macro_rules! impl_from_model {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for RegressionModel {
                fn from(model: $ty) -> Self {
                    RegressionModel::$variant(model)
                }
            }
        )*
    };
}

impl_from_model! {
    LinearRegression => LinearRegression,
    DecisionTree => DecisionTreeRegressor,
    RandomForest => RandomForestRegressor,
    GradientBoosting => GradientBoostingRegressor,
    AdaBoost => AdaBoostRegressor,
    KNeighbors => KNeighborsRegressor,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> (Matrix, Vec<f64>) {
        let rows: Vec<Vec<f64>> = (0..30).map(|i| vec![i as f64, (i % 4) as f64]).collect();
        let y = rows.iter().map(|r| 1.5 * r[0] - r[1] + 2.0).collect();
        (Matrix::from_rows(&rows).unwrap(), y)
    }

    fn all_models() -> Vec<RegressionModel> {
        vec![
            LinearRegression::new().into(),
            DecisionTreeRegressor::new().into(),
            RandomForestRegressor::new().with_n_estimators(4).into(),
            GradientBoostingRegressor::new().with_n_estimators(10).into(),
            AdaBoostRegressor::new().with_n_estimators(5).into(),
            KNeighborsRegressor::default().into(),
        ]
    }

    #[test]
    fn test_dispatch_fit_predict() {
        let (x, y) = data();
        for mut model in all_models() {
            assert!(!model.is_fitted(), "{}", model.algorithm());
            model.fit(&x, &y).unwrap();
            assert!(model.is_fitted(), "{}", model.algorithm());
            assert_eq!(model.predict(&x).unwrap().len(), 30);
        }
    }

    #[test]
    fn test_serde_tag_and_roundtrip() {
        let (x, y) = data();
        for mut model in all_models() {
            model.fit(&x, &y).unwrap();
            let json = serde_json::to_string(&model).unwrap();
            assert!(json.contains(&format!("\"algorithm\":\"{}\"", model.algorithm())));

            let back: RegressionModel = serde_json::from_str(&json).unwrap();
            let before = model.predict(&x).unwrap();
            let after = back.predict(&x).unwrap();
            for (a, b) in before.iter().zip(&after) {
                assert_eq!(a.to_bits(), b.to_bits(), "{}", model.algorithm());
            }
        }
    }
}
