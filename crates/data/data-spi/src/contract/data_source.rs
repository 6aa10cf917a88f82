//! Data source trait definition.

use crate::error::Result;
use crate::model::StudentRecord;

/// Anything that can produce labeled student records.
pub trait DataSource: Send + Sync {
    /// Data source name, used in log events.
    fn name(&self) -> &str;

    /// Load every record. Fails if the source is unreadable or malformed.
    fn load(&self) -> Result<Vec<StudentRecord>>;
}
