//! Route handlers

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::get,
    Form, Json, Router,
};
use common::{ErrorCategory, LocatedError, ScoreFieldMapping};
use predictor::{CustomData, PredictForm, PredictPipeline};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::pages;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pipeline: Arc<PredictPipeline>,
    mapping: ScoreFieldMapping,
}

impl AppState {
    pub fn new(pipeline: PredictPipeline, mapping: ScoreFieldMapping) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            mapping,
        }
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/predictdata", get(prediction_form).post(predict_datapoint))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

pub async fn index() -> Html<String> {
    Html(pages::index())
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn prediction_form() -> Html<String> {
    Html(pages::home(None, None))
}

pub async fn predict_datapoint(
    State(state): State<AppState>,
    Form(form): Form<PredictForm>,
) -> (StatusCode, Html<String>) {
    let data = match CustomData::from_form(&form, state.mapping) {
        Ok(data) => data,
        Err(e) => return failure(LocatedError::from(e)),
    };
    tracing::info!(?data, "prediction requested");

    let pipeline = Arc::clone(&state.pipeline);
    let outcome = tokio::task::spawn_blocking(move || pipeline.predict(&data)).await;

    match outcome {
        Ok(Ok(prediction)) => (StatusCode::OK, Html(pages::home(Some(prediction), None))),
        Ok(Err(e)) => failure(e),
        Err(join) => {
            tracing::error!(error = %join, "prediction task failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(pages::home(None, Some("The prediction could not be completed."))),
            )
        }
    }
}

/// Render the form with the error; user input is a 400, anything else a 500.
fn failure(error: LocatedError) -> (StatusCode, Html<String>) {
    let status = match error.category() {
        ErrorCategory::UserInput => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Html(pages::home(None, Some(error.message()))))
}
