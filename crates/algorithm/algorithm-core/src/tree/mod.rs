//! Regression trees
//!
//! - **Decision Tree**: CART regressor with selectable split criterion

pub mod criterion;
pub mod decision_tree;

pub use criterion::Criterion;
pub use decision_tree::DecisionTreeRegressor;
