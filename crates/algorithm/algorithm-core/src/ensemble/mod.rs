//! Tree ensembles
//!
//! - **Random Forest**: bagged deep trees, averaged
//! - **Gradient Boosting**: shallow trees fitted to residuals
//! - **AdaBoost**: AdaBoost.R2 with a weighted-median vote

pub mod adaboost;
pub mod gradient_boosting;
pub mod random_forest;

pub use adaboost::AdaBoostRegressor;
pub use gradient_boosting::GradientBoostingRegressor;
pub use random_forest::RandomForestRegressor;
