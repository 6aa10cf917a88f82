//! Runtime settings read from the environment (and an optional `.env`).

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File name of the persisted preprocessor inside the artifact directory.
pub const PREPROCESSOR_FILE: &str = "preprocessor.json";
/// File name of the persisted model inside the artifact directory.
pub const MODEL_FILE: &str = "model.json";

/// Errors raised while reading settings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Invalid value for {key}: '{value}' ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// How the prediction form's score fields map onto the input row.
///
/// `LegacySwapped` reproduces the historical behaviour where the value of the
/// `writing_score` field was stored as `reading_score` and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreFieldMapping {
    #[default]
    Direct,
    LegacySwapped,
}

impl FromStr for ScoreFieldMapping {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "direct" => Ok(ScoreFieldMapping::Direct),
            "legacy-swapped" | "legacy_swapped" | "swapped" => Ok(ScoreFieldMapping::LegacySwapped),
            other => Err(format!("expected 'direct' or 'legacy-swapped', got '{other}'")),
        }
    }
}

/// Process configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory holding the preprocessor, model and ingested CSV files.
    pub artifact_dir: PathBuf,
    /// Directory receiving per-run log files.
    pub log_dir: PathBuf,
    /// Address the web front-end binds to.
    pub host: String,
    pub port: u16,
    pub score_field_mapping: ScoreFieldMapping,
    /// Keep loaded artifacts in memory between predictions.
    pub cache_artifacts: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            artifact_dir: PathBuf::from("artifacts"),
            log_dir: PathBuf::from("logs"),
            host: "0.0.0.0".to_string(),
            port: 5000,
            score_field_mapping: ScoreFieldMapping::Direct,
            cache_artifacts: false,
        }
    }
}

impl Settings {
    /// Read settings from the process environment, loading `.env` if present.
    pub fn from_env() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        if let Some(dir) = lookup("ARTIFACT_DIR") {
            settings.artifact_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup("LOG_DIR") {
            settings.log_dir = PathBuf::from(dir);
        }
        if let Some(host) = lookup("HOST") {
            settings.host = host;
        }
        if let Some(port) = lookup("PORT") {
            settings.port = port.trim().parse().map_err(|e: std::num::ParseIntError| {
                SettingsError::InvalidValue {
                    key: "PORT",
                    value: port.clone(),
                    reason: e.to_string(),
                }
            })?;
        }
        if let Some(mapping) = lookup("SCORE_FIELD_MAPPING") {
            settings.score_field_mapping =
                mapping.parse().map_err(|reason| SettingsError::InvalidValue {
                    key: "SCORE_FIELD_MAPPING",
                    value: mapping.clone(),
                    reason,
                })?;
        }
        if let Some(cache) = lookup("CACHE_ARTIFACTS") {
            settings.cache_artifacts = parse_bool(&cache).ok_or_else(|| {
                SettingsError::InvalidValue {
                    key: "CACHE_ARTIFACTS",
                    value: cache.clone(),
                    reason: "expected true/false".to_string(),
                }
            })?;
        }

        Ok(settings)
    }

    pub fn with_artifact_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.artifact_dir = dir.into();
        self
    }

    pub fn preprocessor_path(&self) -> PathBuf {
        self.artifact_dir.join(PREPROCESSOR_FILE)
    }

    pub fn model_path(&self) -> PathBuf {
        self.artifact_dir.join(MODEL_FILE)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_lookup(|_| None).unwrap();
        assert_eq!(settings.port, 5000);
        assert_eq!(settings.model_path(), PathBuf::from("artifacts/model.json"));
        assert_eq!(
            settings.preprocessor_path(),
            PathBuf::from("artifacts/preprocessor.json")
        );
        assert_eq!(settings.score_field_mapping, ScoreFieldMapping::Direct);
        assert!(!settings.cache_artifacts);
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("ARTIFACT_DIR", "/tmp/run"),
            ("PORT", "8081"),
            ("SCORE_FIELD_MAPPING", "legacy-swapped"),
            ("CACHE_ARTIFACTS", "yes"),
        ]))
        .unwrap();

        assert_eq!(settings.model_path(), PathBuf::from("/tmp/run/model.json"));
        assert_eq!(settings.bind_addr(), "0.0.0.0:8081");
        assert_eq!(settings.score_field_mapping, ScoreFieldMapping::LegacySwapped);
        assert!(settings.cache_artifacts);
    }

    #[test]
    fn test_invalid_port() {
        let err = Settings::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { key: "PORT", .. }));
    }

    #[test]
    fn test_invalid_mapping() {
        let err =
            Settings::from_lookup(lookup_from(&[("SCORE_FIELD_MAPPING", "sideways")])).unwrap_err();
        assert!(err.to_string().contains("SCORE_FIELD_MAPPING"));
    }
}
