use crate::{ColumnData, Result};

/// A stateful transformation over a block of columns.
///
/// `fit` learns parameters once; `transform` is read-only afterwards and
/// must fail on an unfitted step.
pub trait ColumnStep: Send + Sync {
    /// Learn parameters from data
    fn fit(&mut self, data: &ColumnData) -> Result<()>;

    /// Apply the learned transformation
    fn transform(&self, data: &ColumnData) -> Result<ColumnData>;

    fn fit_transform(&mut self, data: &ColumnData) -> Result<ColumnData> {
        self.fit(data)?;
        self.transform(data)
    }

    fn is_fitted(&self) -> bool;

    /// Name of this step
    fn name(&self) -> &str;
}
