//! # predictor
//!
//! Inference over the artifacts written by training.
//!
//! - [`PredictForm`]: raw text fields as submitted by the web form
//! - [`CustomData`]: one validated input row in the fixed schema
//! - [`PredictPipeline`]: loads the preprocessor and model, transforms the
//!   row and returns the predicted `math_score`

mod custom_data;
mod error;
mod pipeline;

pub use custom_data::{CustomData, PredictForm};
pub use error::{PredictionError, Result};
pub use pipeline::PredictPipeline;
