//! Save and load enveloped artifacts.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use algorithm_core::RegressionModel;
use pipeline_core::Preprocessor;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ArtifactError, Result};

/// Envelope version written by [`save`] and accepted by [`load`].
pub const FORMAT_VERSION: u32 = 1;

/// What an artifact file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Preprocessor,
    Model,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::Preprocessor => f.write_str("preprocessor"),
            ArtifactKind::Model => f.write_str("model"),
        }
    }
}

/// A fitted object that can be stored.
pub trait Artifact: Serialize + DeserializeOwned {
    const KIND: ArtifactKind;
}

impl Artifact for Preprocessor {
    const KIND: ArtifactKind = ArtifactKind::Preprocessor;
}

impl Artifact for RegressionModel {
    const KIND: ArtifactKind = ArtifactKind::Model;
}

#[derive(Serialize)]
struct EnvelopeRef<'a, T> {
    format_version: u32,
    kind: ArtifactKind,
    payload: &'a T,
}

#[derive(Deserialize)]
struct Envelope {
    format_version: u32,
    kind: ArtifactKind,
    payload: Value,
}

/// Serialize `object` to `path`, creating parent directories and replacing
/// any existing file.
pub fn save<T: Artifact>(path: impl AsRef<Path>, object: &T) -> Result<()> {
    let path = path.as_ref();
    let io_error = |e: std::io::Error| ArtifactError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }

    let envelope = EnvelopeRef {
        format_version: FORMAT_VERSION,
        kind: T::KIND,
        payload: object,
    };
    let json = serde_json::to_string(&envelope).map_err(|e| ArtifactError::Io {
        path: path.display().to_string(),
        reason: format!("serialization failed: {}", e),
    })?;
    fs::write(path, &json).map_err(io_error)?;

    tracing::info!(
        path = %path.display(),
        kind = %T::KIND,
        bytes = json.len(),
        "artifact saved"
    );
    Ok(())
}

/// Read an artifact of type `T` back from `path`.
pub fn load<T: Artifact>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let shown = path.display().to_string();

    let bytes = fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ArtifactError::NotFound {
            path: shown.clone(),
        },
        _ => ArtifactError::Io {
            path: shown.clone(),
            reason: e.to_string(),
        },
    })?;

    let corrupt = |reason: String| ArtifactError::Corrupt {
        path: shown.clone(),
        reason,
    };

    let envelope: Envelope =
        serde_json::from_slice(&bytes).map_err(|e| corrupt(format!("invalid envelope: {}", e)))?;
    if envelope.format_version != FORMAT_VERSION {
        return Err(ArtifactError::IncompatibleVersion {
            path: shown.clone(),
            found: envelope.format_version,
            supported: FORMAT_VERSION,
        });
    }
    if envelope.kind != T::KIND {
        return Err(corrupt(format!(
            "expected a {} artifact, found a {}",
            T::KIND,
            envelope.kind
        )));
    }
    let object = serde_json::from_value(envelope.payload)
        .map_err(|e| corrupt(format!("invalid {} payload: {}", T::KIND, e)))?;

    tracing::debug!(path = %shown, kind = %T::KIND, "artifact loaded");
    Ok(object)
}
