//! # artifact
//!
//! File-based persistence for fitted objects.
//!
//! Every artifact is one JSON document wrapping the serialized object in an
//! envelope:
//!
//! ```json
//! { "format_version": 1, "kind": "model", "payload": { ... } }
//! ```
//!
//! [`save`] creates parent directories and overwrites existing files.
//! [`load`] rejects a missing file, unparsable content, a different `kind`
//! and an unsupported `format_version`.

mod error;
mod store;

pub use error::{ArtifactError, Result};
pub use store::{load, save, Artifact, ArtifactKind, FORMAT_VERSION};
