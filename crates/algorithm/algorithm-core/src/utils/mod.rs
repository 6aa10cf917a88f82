//! Utility functions for regression models
//!
//! - [`metrics`]: regression scoring (R², MSE, MAE)
//! - [`validation`]: input checks shared by every model

pub mod metrics;
pub mod validation;

pub use metrics::{mean_absolute_error, mean_squared_error, r2_score, root_mean_squared_error};
