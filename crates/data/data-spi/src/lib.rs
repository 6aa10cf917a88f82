//! Data Service Provider Interface
//!
//! Defines the fixed student-performance schema and the tabular types every
//! other crate exchanges:
//!
//! - [`StudentRecord`]: one labeled CSV row
//! - [`FeatureFrame`] / [`Column`]: columnar feature table, target excluded
//! - [`Matrix`]: dense row-major numeric matrix
//! - [`DataSource`]: contract for anything that yields records

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::DataSource;
pub use error::{DataError, Result};
pub use model::{
    schema, Column, FeatureFrame, Matrix, StudentRecord, CATEGORICAL_COLUMNS, FEATURE_COLUMNS,
    NUMERIC_COLUMNS, TARGET_COLUMN,
};
