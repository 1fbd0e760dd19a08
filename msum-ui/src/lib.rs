//! msum-ui library - web control panel for the meeting summarization pipeline
//!
//! Serves the Run Panel page and the `/api/run` endpoint that maps one form
//! submission to one pipeline invocation.

use std::sync::Arc;

use axum::Router;
use msum_common::config::UiConfig;

pub mod api;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Service configuration: default run paths and ASR command
    pub config: Arc<UiConfig>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: UiConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};
    use tower_http::trace::TraceLayer;

    Router::new()
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        .route("/api/health", get(api::health_check))
        .route("/api/run", post(api::run_pipeline_api))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
