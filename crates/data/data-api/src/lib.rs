//! Data API
//!
//! Configuration for turning a raw dataset into train/test files.

pub mod config;

pub use config::{IngestionConfig, RAW_DATA_FILE, TEST_DATA_FILE, TRAIN_DATA_FILE};
