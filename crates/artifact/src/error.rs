//! Artifact error types.

use common::{Categorized, ErrorCategory};
use thiserror::Error;

/// Result type for artifact operations.
pub type Result<T> = std::result::Result<T, ArtifactError>;

/// Errors raised while saving or loading an artifact.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ArtifactError {
    /// Nothing stored at the path
    #[error("Artifact not found at '{path}'")]
    NotFound { path: String },

    /// Content could not be decoded into the requested type
    #[error("Corrupt artifact at '{path}': {reason}")]
    Corrupt { path: String, reason: String },

    /// Written by an unsupported envelope version
    #[error("Artifact at '{path}' has format version {found}, expected {supported}")]
    IncompatibleVersion {
        path: String,
        found: u32,
        supported: u32,
    },

    /// Filesystem failure while writing
    #[error("I/O error on '{path}': {reason}")]
    Io { path: String, reason: String },
}

impl Categorized for ArtifactError {
    fn category(&self) -> ErrorCategory {
        match self {
            ArtifactError::Io { .. } => ErrorCategory::Io,
            _ => ErrorCategory::Artifact,
        }
    }
}
