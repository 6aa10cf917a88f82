//! Trainer and search configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Minimum held-out R² a winner must reach to be persisted.
pub const DEFAULT_ACCEPTANCE_THRESHOLD: f64 = 0.6;

/// Configuration for a cross-validated grid search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSearchConfig {
    /// Number of contiguous folds
    pub cv_folds: usize,
    /// Evaluate grid points on the rayon pool
    pub parallel: bool,
}

impl Default for GridSearchConfig {
    fn default() -> Self {
        Self {
            cv_folds: 3,
            parallel: false,
        }
    }
}

impl GridSearchConfig {
    /// Set the number of folds (at least 2)
    pub fn with_cv_folds(mut self, folds: usize) -> Self {
        self.cv_folds = folds.max(2);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Configuration for the model trainer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainerConfig {
    /// Where the winning model is persisted
    pub model_path: PathBuf,
    /// Winners scoring below this are rejected
    pub acceptance_threshold: f64,
    /// Seed handed to every randomized candidate
    pub seed: u64,
    pub search: GridSearchConfig,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("artifacts/model.json"),
            acceptance_threshold: DEFAULT_ACCEPTANCE_THRESHOLD,
            seed: 42,
            search: GridSearchConfig::default(),
        }
    }
}

impl TrainerConfig {
    pub fn new(model_path: impl Into<PathBuf>) -> Self {
        Self {
            model_path: model_path.into(),
            ..Default::default()
        }
    }

    pub fn with_acceptance_threshold(mut self, threshold: f64) -> Self {
        self.acceptance_threshold = threshold;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_cv_folds(mut self, folds: usize) -> Self {
        self.search = self.search.with_cv_folds(folds);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.search = self.search.with_parallel(parallel);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TrainerConfig::default();
        assert_eq!(config.acceptance_threshold, 0.6);
        assert_eq!(config.seed, 42);
        assert_eq!(config.search.cv_folds, 3);
        assert!(!config.search.parallel);
        assert_eq!(config.model_path, PathBuf::from("artifacts/model.json"));
    }

    #[test]
    fn test_builder() {
        let config = TrainerConfig::new("/tmp/model.json")
            .with_acceptance_threshold(0.8)
            .with_seed(7)
            .with_cv_folds(1)
            .with_parallel(true);
        assert_eq!(config.acceptance_threshold, 0.8);
        assert_eq!(config.seed, 7);
        assert_eq!(config.search.cv_folds, 2);
        assert!(config.search.parallel);
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = TrainerConfig::default().with_cv_folds(5);
        let json = serde_json::to_string(&config).unwrap();
        let back: TrainerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
