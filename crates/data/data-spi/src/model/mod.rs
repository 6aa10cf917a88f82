//! Data models for the student-performance dataset.

mod frame;
mod matrix;
mod record;
pub mod schema;

pub use frame::{Column, FeatureFrame};
pub use matrix::Matrix;
pub use record::StudentRecord;
pub use schema::{CATEGORICAL_COLUMNS, FEATURE_COLUMNS, NUMERIC_COLUMNS, TARGET_COLUMN};
