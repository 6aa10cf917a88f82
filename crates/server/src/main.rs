//! # scorecast-server
//!
//! Web front-end for the student math-score predictor.
//!
//! Routes:
//! - `GET /`: landing page
//! - `GET /predictdata`: prediction form
//! - `POST /predictdata`: predict from the submitted form
//! - `GET /health`: liveness check

use anyhow::Context;
use common::{ScoreFieldMapping, Settings};
use predictor::PredictPipeline;

mod pages;
mod routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env().context("invalid settings")?;
    let log_file = common::logging::init(&settings.log_dir)
        .with_context(|| format!("cannot create log directory {}", settings.log_dir.display()))?;
    tracing::info!(log_file = %log_file.display(), "logging initialised");

    if settings.score_field_mapping == ScoreFieldMapping::LegacySwapped {
        tracing::warn!(
            "legacy score field mapping is active: the reading_score and writing_score form fields are swapped"
        );
    }

    let pipeline = PredictPipeline::from_settings(&settings);
    tracing::info!(
        preprocessor = %pipeline.preprocessor_path().display(),
        model = %pipeline.model_path().display(),
        cached = pipeline.is_cached(),
        "prediction pipeline configured"
    );

    let app = routes::router(routes::AppState::new(
        pipeline,
        settings.score_field_mapping,
    ));

    let addr = settings.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr.as_str())
        .await
        .with_context(|| format!("cannot bind {addr}"))?;
    tracing::info!("scorecast-server v{} listening on {}", env!("CARGO_PKG_VERSION"), addr);

    axum::serve(listener, app).await?;
    Ok(())
}
