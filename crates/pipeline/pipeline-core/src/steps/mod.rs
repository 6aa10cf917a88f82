//! Column step implementations.

mod imputer;
mod one_hot;
mod scaler;

pub use imputer::{MedianImputer, MostFrequentImputer};
pub use one_hot::OneHotEncoder;
pub use scaler::StandardScaler;

use pipeline_spi::{PipelineError, Result};

pub(crate) fn check_width(step: &str, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(PipelineError::WidthMismatch {
            step: step.to_string(),
            expected,
            actual,
        });
    }
    Ok(())
}
