//! Pipeline API
//!
//! Configuration types for the preprocessing column transform:
//!
//! - [`PreprocessorConfig`]: which columns go through which branch
//! - [`HandleUnknown`]: one-hot policy for categories unseen during fit

mod config;

pub use config::{HandleUnknown, PreprocessorConfig};
