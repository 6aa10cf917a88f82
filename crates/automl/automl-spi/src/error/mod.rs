//! Error types for model search and selection.

mod automl_error;

pub use automl_error::{AutoMLError, Result};
