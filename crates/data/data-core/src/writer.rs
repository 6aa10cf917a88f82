//! CSV output.

use std::fs;
use std::path::Path;

use csv::Writer;
use data_spi::{DataError, Result, StudentRecord};

/// Write records with a header row, creating parent directories and
/// overwriting any existing file.
pub fn write_records(path: &Path, records: &[StudentRecord]) -> Result<()> {
    let fail = |reason: String| DataError::WriteFailed {
        path: path.display().to_string(),
        reason,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| fail(e.to_string()))?;
    }

    let mut writer = Writer::from_path(path).map_err(|e| fail(e.to_string()))?;
    for record in records {
        writer.serialize(record).map_err(|e| fail(e.to_string()))?;
    }
    writer.flush().map_err(|e| fail(e.to_string()))?;
    Ok(())
}
