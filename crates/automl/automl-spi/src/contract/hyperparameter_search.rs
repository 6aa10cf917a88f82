//! Hyperparameter search contract.

use algorithm_spi::Regressor;
use data_spi::Matrix;

use crate::error::Result;
use crate::model::{CandidateKind, ParamGrid, SearchResult};

/// Tunes one candidate family over a grid using only the training split.
pub trait HyperparameterSearch {
    type Model: Regressor;

    /// Evaluate every grid point and return the best point refit on all of
    /// `x`/`y`.
    fn search(
        &self,
        kind: CandidateKind,
        grid: &ParamGrid,
        x: &Matrix,
        y: &[f64],
    ) -> Result<SearchResult<Self::Model>>;
}
