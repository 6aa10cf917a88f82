//! Algorithm Core Implementations
//!
//! Regression models over a dense feature matrix, organized by category:
//!
//! - [`regression`]: ordinary least squares
//! - [`tree`]: CART decision tree
//! - [`ensemble`]: random forest, gradient boosting, AdaBoost
//! - [`ml`]: k-nearest neighbors
//! - [`utils`]: metrics and input validation
//!
//! [`RegressionModel`] wraps every algorithm in one serializable enum.
//!
//! ## Example
//!
//! ```rust
//! use algorithm_core::prelude::*;
//! use data_spi::Matrix;
//!
//! let x = Matrix::from_rows(&[vec![1.0], vec![2.0], vec![3.0], vec![4.0]]).unwrap();
//! let y = vec![2.0, 4.0, 6.0, 8.0];
//! let mut model = RegressionModel::from(LinearRegression::new());
//! model.fit(&x, &y).unwrap();
//! let score = r2_score(&y, &model.predict(&x).unwrap());
//! assert!(score > 0.999);
//! ```

pub mod ensemble;
pub mod ml;
pub mod model;
pub mod regression;
pub mod tree;
pub mod utils;

// Re-export from SPI
pub use algorithm_spi::{AlgorithmError, Regressor, Result};

// Re-export implementations for convenience
pub use ensemble::*;
pub use ml::*;
pub use model::RegressionModel;
pub use regression::*;
pub use tree::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use algorithm_spi::Regressor;
    // Linear
    pub use crate::regression::LinearRegression;
    // Trees
    pub use crate::tree::{Criterion, DecisionTreeRegressor};
    // Ensembles
    pub use crate::ensemble::{AdaBoostRegressor, GradientBoostingRegressor, RandomForestRegressor};
    // ML
    pub use crate::ml::{DistanceMetric, KNeighborsRegressor};
    pub use crate::model::RegressionModel;
    // Metrics
    pub use crate::utils::metrics::{mean_absolute_error, mean_squared_error, r2_score};
    // Error types
    pub use algorithm_spi::{AlgorithmError, Result};
}
