//! msum-ui (Web Control Panel) - browser front end for the meeting
//! summarization pipeline
//!
//! Serves a single-page panel that submits pipeline runs and renders the
//! resulting summary and prosody features.

use anyhow::Result;
use msum_common::config::{load_config, resolve_config_path};
use msum_ui::{build_router, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Build identification first, before any config or bind delays
    info!(
        "Starting Meeting Summarizer UI (msum-ui) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let config_path = resolve_config_path(None, "MSUM_CONFIG");
    match &config_path {
        Some(path) => info!("Config file: {}", path.display()),
        None => info!("No config file found (using compiled defaults)"),
    }
    let config = load_config(config_path.as_deref())?;

    let addr = format!("{}:{}", config.host, config.port);
    let state = AppState::new(config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("msum-ui listening on http://{addr}");
    info!("Health check: http://{addr}/api/health");

    axum::serve(listener, app).await?;

    Ok(())
}
