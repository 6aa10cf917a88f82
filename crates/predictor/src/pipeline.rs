//! Prediction service.

use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use algorithm_core::prelude::*;
use common::Settings;
use data_spi::FeatureFrame;
use pipeline_core::Preprocessor;

use crate::custom_data::CustomData;
use crate::error::PredictionError;

/// Fitted objects read back from the artifact directory. Never mutated.
#[derive(Debug)]
struct LoadedArtifacts {
    preprocessor: Preprocessor,
    model: RegressionModel,
}

/// Transforms input rows with the persisted preprocessor and runs the
/// persisted model on them.
///
/// Without caching, artifacts are re-read on every call so a retrain is
/// picked up immediately. With caching, the first successful load is kept
/// for the lifetime of the pipeline; failed loads are not cached.
#[derive(Debug, Clone)]
pub struct PredictPipeline {
    preprocessor_path: PathBuf,
    model_path: PathBuf,
    cache: Option<Arc<OnceLock<Arc<LoadedArtifacts>>>>,
}

impl Default for PredictPipeline {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl PredictPipeline {
    pub fn new(preprocessor_path: impl Into<PathBuf>, model_path: impl Into<PathBuf>) -> Self {
        Self {
            preprocessor_path: preprocessor_path.into(),
            model_path: model_path.into(),
            cache: None,
        }
    }

    /// Artifact paths and caching policy from process settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.preprocessor_path(), settings.model_path())
            .with_cache(settings.cache_artifacts)
    }

    pub fn with_cache(mut self, enabled: bool) -> Self {
        self.cache = enabled.then(|| Arc::new(OnceLock::new()));
        self
    }

    pub fn is_cached(&self) -> bool {
        self.cache.is_some()
    }

    pub fn preprocessor_path(&self) -> &Path {
        &self.preprocessor_path
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }

    /// Predict the target for one input row.
    pub fn predict(&self, data: &CustomData) -> common::Result<f64> {
        let predictions = self.predict_frame(&data.to_frame())?;
        match predictions.first() {
            Some(value) => Ok(*value),
            None => Err(PredictionError::EmptyInput.into()),
        }
    }

    /// Predict the target for every row of a feature frame.
    pub fn predict_frame(&self, frame: &FeatureFrame) -> common::Result<Vec<f64>> {
        if frame.n_rows() == 0 {
            return Err(PredictionError::EmptyInput.into());
        }
        let artifacts = self.artifacts()?;
        let features = artifacts.preprocessor.transform(frame)?;
        let predictions = artifacts.model.predict(&features)?;
        tracing::info!(
            rows = frame.n_rows(),
            model = artifacts.model.algorithm(),
            "prediction finished"
        );
        Ok(predictions)
    }

    fn artifacts(&self) -> common::Result<Arc<LoadedArtifacts>> {
        if let Some(loaded) = self.cache.as_ref().and_then(|cell| cell.get()) {
            return Ok(Arc::clone(loaded));
        }

        let loaded = Arc::new(self.load()?);
        match &self.cache {
            Some(cell) => Ok(Arc::clone(cell.get_or_init(|| loaded))),
            None => Ok(loaded),
        }
    }

    fn load(&self) -> common::Result<LoadedArtifacts> {
        let model: RegressionModel = artifact::load(&self.model_path)?;
        let preprocessor: Preprocessor = artifact::load(&self.preprocessor_path)?;
        tracing::info!(
            model = %self.model_path.display(),
            preprocessor = %self.preprocessor_path.display(),
            algorithm = model.algorithm(),
            "loaded prediction artifacts"
        );
        Ok(LoadedArtifacts {
            preprocessor,
            model,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::ErrorCategory;

    fn row() -> CustomData {
        CustomData {
            gender: "male".into(),
            race_ethnicity: "group C".into(),
            parental_level_of_education: "high school".into(),
            lunch: "standard".into(),
            test_preparation_course: "completed".into(),
            reading_score: 60.0,
            writing_score: 58.0,
        }
    }

    #[test]
    fn test_missing_artifacts_are_artifact_errors() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = PredictPipeline::new(
            dir.path().join("preprocessor.json"),
            dir.path().join("model.json"),
        );
        let err = pipeline.predict(&row()).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Artifact);
        assert!(matches!(
            err.source_as::<artifact::ArtifactError>(),
            Some(artifact::ArtifactError::NotFound { .. })
        ));
    }

    #[test]
    fn test_empty_frame_is_user_input() {
        let pipeline = PredictPipeline::default();
        let err = pipeline.predict_frame(&FeatureFrame::new()).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::UserInput);
    }

    #[test]
    fn test_settings_drive_paths_and_cache() {
        let settings = Settings {
            cache_artifacts: true,
            ..Settings::default()
        }
        .with_artifact_dir("/srv/scorecast");
        let pipeline = PredictPipeline::from_settings(&settings);
        assert!(pipeline.is_cached());
        assert_eq!(
            pipeline.model_path(),
            Path::new("/srv/scorecast/model.json")
        );
        assert_eq!(
            pipeline.preprocessor_path(),
            Path::new("/srv/scorecast/preprocessor.json")
        );
        assert!(!PredictPipeline::default().is_cached());
    }
}
