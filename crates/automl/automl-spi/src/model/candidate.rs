//! Algorithm families the trainer can compare.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AutoMLError;

/// A registered regression algorithm family.
///
/// `Display` yields the human readable name used as the model report key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateKind {
    RandomForest,
    DecisionTree,
    GradientBoosting,
    LinearRegression,
    /// Gradient boosting configured the way XGBoost defaults are (depth 6).
    XgBoost,
    /// Gradient boosting parameterised by CatBoost names (depth, iterations).
    CatBoost,
    AdaBoost,
    /// Not part of the default registry; available to custom registries.
    KNeighbors,
}

impl CandidateKind {
    /// All families: the default registry in its order, then the opt-in ones.
    pub const ALL: [CandidateKind; 8] = [
        CandidateKind::RandomForest,
        CandidateKind::DecisionTree,
        CandidateKind::GradientBoosting,
        CandidateKind::LinearRegression,
        CandidateKind::XgBoost,
        CandidateKind::CatBoost,
        CandidateKind::AdaBoost,
        CandidateKind::KNeighbors,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            CandidateKind::RandomForest => "Random Forest",
            CandidateKind::DecisionTree => "Decision Tree",
            CandidateKind::GradientBoosting => "Gradient Boosting",
            CandidateKind::LinearRegression => "Linear Regression",
            CandidateKind::XgBoost => "XGBRegressor",
            CandidateKind::CatBoost => "CatBoosting Regressor",
            CandidateKind::AdaBoost => "AdaBoost Regressor",
            CandidateKind::KNeighbors => "K-Neighbors Regressor",
        }
    }

    /// Whether the family draws random numbers and therefore takes a seed.
    pub fn is_seeded(&self) -> bool {
        matches!(
            self,
            CandidateKind::RandomForest
                | CandidateKind::GradientBoosting
                | CandidateKind::XgBoost
                | CandidateKind::CatBoost
                | CandidateKind::AdaBoost
        )
    }
}

impl fmt::Display for CandidateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for CandidateKind {
    type Err = AutoMLError;

    /// Accepts either the display name or the snake_case identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        CandidateKind::ALL
            .into_iter()
            .find(|kind| {
                kind.display_name().eq_ignore_ascii_case(wanted)
                    || kind.identifier() == wanted.to_ascii_lowercase()
            })
            .ok_or_else(|| AutoMLError::InvalidParameter {
                name: "candidate".to_string(),
                reason: format!("unknown candidate '{}'", wanted),
            })
    }
}

impl CandidateKind {
    fn identifier(&self) -> &'static str {
        match self {
            CandidateKind::RandomForest => "random_forest",
            CandidateKind::DecisionTree => "decision_tree",
            CandidateKind::GradientBoosting => "gradient_boosting",
            CandidateKind::LinearRegression => "linear_regression",
            CandidateKind::XgBoost => "xg_boost",
            CandidateKind::CatBoost => "cat_boost",
            CandidateKind::AdaBoost => "ada_boost",
            CandidateKind::KNeighbors => "k_neighbors",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(CandidateKind::KNeighbors.to_string(), "K-Neighbors Regressor");
        assert_eq!(CandidateKind::AdaBoost.to_string(), "AdaBoost Regressor");
        assert_eq!(CandidateKind::RandomForest.to_string(), "Random Forest");
    }

    #[test]
    fn test_parse_by_name_or_identifier() {
        assert_eq!(
            "decision tree".parse::<CandidateKind>().unwrap(),
            CandidateKind::DecisionTree
        );
        assert_eq!(
            "gradient_boosting".parse::<CandidateKind>().unwrap(),
            CandidateKind::GradientBoosting
        );
        assert_eq!(
            "XGBRegressor".parse::<CandidateKind>().unwrap(),
            CandidateKind::XgBoost
        );
        assert_eq!(
            "catboosting regressor".parse::<CandidateKind>().unwrap(),
            CandidateKind::CatBoost
        );
        assert!("lightgbm".parse::<CandidateKind>().is_err());
    }

    #[test]
    fn test_serde_matches_identifier() {
        for kind in CandidateKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.identifier()));
        }
    }

    #[test]
    fn test_seeded_families() {
        assert!(CandidateKind::RandomForest.is_seeded());
        assert!(!CandidateKind::LinearRegression.is_seeded());
        assert!(!CandidateKind::KNeighbors.is_seeded());
        assert!(CandidateKind::XgBoost.is_seeded());
        assert!(CandidateKind::CatBoost.is_seeded());
    }
}
