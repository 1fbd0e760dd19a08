//! Pipeline run endpoint
//!
//! One POST maps to one pipeline invocation. The panel serializes
//! submissions by disabling its trigger while a run is in flight, so this
//! handler holds no cross-request state. The pipeline itself is blocking
//! (file I/O, audio decode, an external ASR process) and runs on the
//! blocking pool.

use std::path::{Path, PathBuf};

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use msum_common::api::types::{RunFiles, RunRequest, RunResponse};
use msum_common::config::UiConfig;
use msum_pl::{run_pipeline, RunOptions, WhisperCommand};
use tracing::{error, info};

use crate::AppState;

/// Blank request fields fall back to the configured defaults; everything
/// else is passed through with surrounding whitespace trimmed.
fn resolve_options(request: &RunRequest, config: &UiConfig) -> RunOptions {
    fn path_or(value: &str, default: &Path) -> PathBuf {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            default.to_path_buf()
        } else {
            PathBuf::from(trimmed)
        }
    }

    RunOptions {
        input_path: path_or(&request.input_path, &config.default_input),
        output_dir: path_or(&request.output_dir, &config.default_output_dir),
        run_asr: request.run_asr,
        enable_engagement: request.enable_engagement,
    }
}

/// POST /api/run
///
/// Runs the pipeline with the request's parameters. Any pipeline failure
/// collapses to `400 {ok: false, error}`, which the panel renders as its
/// error status.
pub async fn run_pipeline_api(
    State(state): State<AppState>,
    Json(request): Json<RunRequest>,
) -> Response {
    let config = state.config.clone();
    let options = resolve_options(&request, &config);
    let run_asr = options.run_asr;
    let enable_engagement = options.enable_engagement;

    info!(
        "Run requested: input={} output={} run_asr={} enable_engagement={}",
        options.input_path.display(),
        options.output_dir.display(),
        run_asr,
        enable_engagement
    );

    let result = tokio::task::spawn_blocking(move || {
        let engine = WhisperCommand::new(&config.asr.command, &config.asr.model_size);
        run_pipeline(&engine, &options)
    })
    .await;

    let run = match result {
        Ok(Ok(run)) => run,
        Ok(Err(e)) => {
            error!("Pipeline run failed: {e}");
            return (StatusCode::BAD_REQUEST, Json(RunResponse::failure(e.to_string())))
                .into_response();
        }
        Err(e) => {
            error!("Pipeline task join error: {e}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(RunResponse::failure("Pipeline run failed.")),
            )
                .into_response();
        }
    };

    let files = RunFiles {
        summary_md: run.output_dir.join("summary.md").exists(),
        prosody_json: run.output_dir.join("prosody.json").exists(),
        segments_json: run.output_dir.join("segments.json").exists(),
    };

    Json(RunResponse {
        ok: true,
        error: None,
        output_dir: Some(run.output_dir.display().to_string()),
        summary_text: Some(run.summary_text),
        run_asr: Some(run_asr),
        enable_engagement: Some(enable_engagement),
        files: Some(files),
        prosody: Some(run.prosody),
    })
    .into_response()
}
