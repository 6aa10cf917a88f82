//! Linear models
//!
//! - **Linear Regression**: ordinary least squares with intercept

pub mod linear;

pub use linear::LinearRegression;
