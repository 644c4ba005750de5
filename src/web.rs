//! HTTP front end: an input form and a results page.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analyzer::PlaylistAnalyzer;
use crate::error::AppError;
use crate::report::page;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<PlaylistAnalyzer>,
}

impl AppState {
    pub fn new(analyzer: PlaylistAnalyzer) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeForm {
    #[serde(default)]
    pub playlist_url: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/analyze", post(analyze))
        .route("/health", get(health_check))
        .with_state(state)
}

/// GET /
pub async fn index() -> Html<String> {
    Html(page::index_page())
}

/// POST /analyze
pub async fn analyze(State(state): State<AppState>, Form(form): Form<AnalyzeForm>) -> Response {
    match state.analyzer.analyze(&form.playlist_url).await {
        Ok(analysis) => {
            info!(
                "Served report for playlist {} ({} tracks)",
                analysis.playlist_id,
                analysis.records.len()
            );
            Html(analysis.to_html()).into_response()
        }
        Err(e) => {
            warn!("Analysis of {:?} failed: {}", form.playlist_url, e);
            (status_for(&e), Html(page::error_page(&e.to_string(), &form.playlist_url))).into_response()
        }
    }
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub fn status_for(error: &AppError) -> StatusCode {
    match error {
        e if e.is_input_error() => StatusCode::BAD_REQUEST,
        e if e.is_upstream_error() => StatusCode::BAD_GATEWAY,
        AppError::MissingFeatures(_) | AppError::MissingData(_) => StatusCode::UNPROCESSABLE_ENTITY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
