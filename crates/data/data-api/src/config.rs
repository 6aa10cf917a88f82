//! Ingestion configuration types.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// File name of the raw-data copy written next to the split.
pub const RAW_DATA_FILE: &str = "data.csv";
pub const TRAIN_DATA_FILE: &str = "train.csv";
pub const TEST_DATA_FILE: &str = "test.csv";

/// Configuration for splitting a raw dataset into train and test files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestionConfig {
    /// CSV file holding the full labeled dataset
    pub raw_data_path: PathBuf,
    /// Directory receiving `data.csv`, `train.csv` and `test.csv`
    pub output_dir: PathBuf,
    /// Fraction of rows held out for testing, in (0, 1)
    pub test_ratio: f64,
    /// Seed of the row shuffle
    pub seed: u64,
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self {
            raw_data_path: PathBuf::from("data/stud.csv"),
            output_dir: PathBuf::from("artifacts"),
            test_ratio: 0.2,
            seed: 42,
        }
    }
}

impl IngestionConfig {
    pub fn new(raw_data_path: impl Into<PathBuf>) -> Self {
        Self {
            raw_data_path: raw_data_path.into(),
            ..Default::default()
        }
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the held-out fraction (clamped to [0.01, 0.99]).
    pub fn with_test_ratio(mut self, ratio: f64) -> Self {
        self.test_ratio = ratio.clamp(0.01, 0.99);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn raw_copy_path(&self) -> PathBuf {
        self.output_dir.join(RAW_DATA_FILE)
    }

    pub fn train_path(&self) -> PathBuf {
        self.output_dir.join(TRAIN_DATA_FILE)
    }

    pub fn test_path(&self) -> PathBuf {
        self.output_dir.join(TEST_DATA_FILE)
    }

    pub fn raw_data_path(&self) -> &Path {
        &self.raw_data_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = IngestionConfig::default();
        assert_eq!(config.test_ratio, 0.2);
        assert_eq!(config.seed, 42);
        assert_eq!(config.train_path(), PathBuf::from("artifacts/train.csv"));
        assert_eq!(config.test_path(), PathBuf::from("artifacts/test.csv"));
        assert_eq!(config.raw_copy_path(), PathBuf::from("artifacts/data.csv"));
    }

    #[test]
    fn test_builder_clamps_ratio() {
        let config = IngestionConfig::new("raw.csv")
            .with_output_dir("out")
            .with_test_ratio(1.5)
            .with_seed(7);
        assert_eq!(config.test_ratio, 0.99);
        assert_eq!(config.seed, 7);
        assert_eq!(config.raw_data_path(), Path::new("raw.csv"));
        assert_eq!(config.train_path(), PathBuf::from("out/train.csv"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = IngestionConfig::new("raw.csv").with_test_ratio(0.25);
        let json = serde_json::to_string(&config).unwrap();
        let back: IngestionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
