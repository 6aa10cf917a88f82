//! # transformation
//!
//! Turns labeled train/test tables into model-ready matrices.
//!
//! The preprocessor is fitted on the training table only, applied to both
//! tables, and persisted before the matrices are returned. Each returned
//! matrix carries the target as its last column.

mod config;
mod service;

pub use config::DataTransformationConfig;
pub use service::{DataTransformation, TransformedData};
