//! Contract traits for algorithm implementations
//!
//! - [`Regressor`]: the fit/predict interface every model implements

mod regressor;

pub use regressor::Regressor;
