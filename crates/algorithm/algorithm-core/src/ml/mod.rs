//! Instance-based learners
//!
//! ## Algorithms
//!
//! - **KNN**: K-Nearest Neighbors regression

pub mod knn;

pub use knn::{DistanceMetric, KNeighborsRegressor};
