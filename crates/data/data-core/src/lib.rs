//! Data Core
//!
//! CSV-backed implementations for the student-performance dataset:
//! reading labeled or unlabeled files, splitting off the target, writing
//! records back out and the seeded train/test ingestion split.

pub mod ingest;
pub mod source;
pub mod split;
pub mod writer;

pub use ingest::{ingest, IngestionArtifacts};
pub use source::CsvDataSource;
pub use split::{split_target, train_test_indices};
pub use writer::write_records;
