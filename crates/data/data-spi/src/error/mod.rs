//! Error module containing data error types.

mod data_error;

pub use data_error::{DataError, Result};
