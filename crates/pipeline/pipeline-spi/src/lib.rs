//! Pipeline Service Provider Interface
//!
//! Defines the contract for fitted column transformations.

mod data;
mod error;
mod step;

pub use data::ColumnData;
pub use error::{PipelineError, Result};
pub use step::ColumnStep;
