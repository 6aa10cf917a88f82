//! Algorithm Service Provider Interface
//!
//! Defines the core trait and error type for tabular regression algorithms.
//!
//! - [`Regressor`]: fit on a feature matrix and target, predict per row
//! - [`AlgorithmError`]: standardized error type for all algorithm operations
//! - [`Result`]: convenient result type alias

pub mod contract;
pub mod error;

// Re-export all public items at crate root for convenience
pub use contract::Regressor;
pub use error::{AlgorithmError, Result};
