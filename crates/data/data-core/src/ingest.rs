//! Raw dataset ingestion: copy plus seeded train/test split.

use std::path::PathBuf;

use data_api::IngestionConfig;
use data_spi::{DataSource, Result, StudentRecord};
use tracing::info;

use crate::source::CsvDataSource;
use crate::split::train_test_indices;
use crate::writer::write_records;

/// Files produced by [`ingest`].
#[derive(Debug, Clone, PartialEq)]
pub struct IngestionArtifacts {
    pub raw_copy_path: PathBuf,
    pub train_path: PathBuf,
    pub test_path: PathBuf,
    pub train_rows: usize,
    pub test_rows: usize,
}

/// Read the raw labeled dataset, store a copy and a seeded shuffled split.
pub fn ingest(config: &IngestionConfig) -> Result<IngestionArtifacts> {
    info!(path = %config.raw_data_path.display(), "Entered data ingestion");

    let records = CsvDataSource::labeled(&config.raw_data_path).load()?;
    let (train_idx, test_idx) = train_test_indices(records.len(), config.test_ratio, config.seed)?;

    let pick = |indices: &[usize]| -> Vec<StudentRecord> {
        indices.iter().map(|&i| records[i].clone()).collect()
    };
    let train = pick(&train_idx);
    let test = pick(&test_idx);

    let artifacts = IngestionArtifacts {
        raw_copy_path: config.raw_copy_path(),
        train_path: config.train_path(),
        test_path: config.test_path(),
        train_rows: train.len(),
        test_rows: test.len(),
    };

    write_records(&artifacts.raw_copy_path, &records)?;
    write_records(&artifacts.train_path, &train)?;
    write_records(&artifacts.test_path, &test)?;

    info!(
        train_rows = artifacts.train_rows,
        test_rows = artifacts.test_rows,
        "Ingestion of the data is completed"
    );
    Ok(artifacts)
}
