//! Error types for algorithm operations
//!
//! This module provides the [`AlgorithmError`] enum and [`Result`] type alias
//! for standardized error handling across all algorithm implementations.

mod algorithm_error;

pub use algorithm_error::{AlgorithmError, Result};
