//! Model selection contract.

use data_spi::Matrix;

use crate::error::Result;
use crate::model::TrainingOutcome;

/// Compares candidates on a train/test pair and picks a winner.
///
/// Both matrices carry the target as their last column. The returned outcome
/// holds the selection-time test score of the winner.
pub trait ModelSelector {
    type Model;

    fn select(&self, train: &Matrix, test: &Matrix) -> Result<(Self::Model, TrainingOutcome)>;
}
