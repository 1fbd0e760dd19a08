//! Integration tests for msum-ui API endpoints
//!
//! Tests cover:
//! - Health endpoint shape
//! - Run Panel page and script serving
//! - POST /api/run success and failure shapes, including the serde and
//!   config-level defaults for blank request fields

use std::path::Path;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use msum_common::config::UiConfig;
use msum_ui::{build_router, AppState};
use serde_json::{json, Value};
use tower::util::ServiceExt; // for `oneshot` method

/// Test helper: app whose configured defaults point into a scratch directory
fn setup_app(dir: &Path) -> axum::Router {
    let config = UiConfig {
        default_input: dir.join("default.wav"),
        default_output_dir: dir.join("default_out"),
        ..UiConfig::default()
    };
    build_router(AppState::new(config))
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Test helper: Extract JSON body from response
async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

// =============================================================================
// Health Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let dir = tempfile::tempdir().unwrap();
    let app = setup_app(dir.path());

    let response = app.oneshot(get_request("/api/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "msum-ui");
    assert!(body["version"].is_string());
}

// =============================================================================
// UI Serving Tests
// =============================================================================

#[tokio::test]
async fn test_index_serves_run_panel() {
    let dir = tempfile::tempdir().unwrap();
    let app = setup_app(dir.path());

    let response = app.oneshot(get_request("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();

    // Element ids the panel script binds to
    for id in [
        "run-form",
        "input-path",
        "output-dir",
        "run-asr",
        "engagement",
        "run-btn",
        "status",
        "summary-view",
        "prosody-meta",
        "prosody-body",
    ] {
        assert!(html.contains(&format!("id=\"{id}\"")), "missing #{id}");
    }
}

#[tokio::test]
async fn test_app_js_served_with_javascript_content_type() {
    let dir = tempfile::tempdir().unwrap();
    let app = setup_app(dir.path());

    let response = app.oneshot(get_request("/static/app.js")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/javascript"
    );

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let js = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(js.contains("class RunPanel"));
    assert!(js.contains("/api/run"));
}

// =============================================================================
// Run Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_run_without_asr_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let app = setup_app(dir.path());
    let output_dir = dir.path().join("out");

    let body = json!({
        "input_path": dir.path().join("missing.wav").display().to_string(),
        "output_dir": output_dir.display().to_string(),
        "run_asr": false,
        "enable_engagement": false,
    });
    let response = app.oneshot(post_json("/api/run", body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["ok"], true);
    assert!(body["error"].is_null());
    assert_eq!(body["output_dir"], output_dir.display().to_string());
    assert_eq!(body["run_asr"], false);

    let summary = body["summary_text"].as_str().unwrap();
    assert!(summary.contains("Meeting Summary (MVP)"));
    assert!(summary.contains("No transcript segments available yet"));

    assert_eq!(body["files"]["summary_md"], true);
    assert_eq!(body["files"]["prosody_json"], true);
    assert_eq!(body["files"]["segments_json"], true);

    // Input audio does not exist: empty features plus a read warning
    assert_eq!(body["prosody"]["features"].as_array().unwrap().len(), 0);
    assert!(body["prosody"]["audio_read_error"]
        .as_str()
        .unwrap()
        .contains("Audio file not found"));
    assert!(body["prosody"]["sample_rate_hz"].is_null());

    assert!(output_dir.join("summary.md").exists());
}

#[tokio::test]
async fn test_run_with_blank_fields_uses_config_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let app = setup_app(dir.path());

    // Bare request body: every field serde-defaults
    let response = app.oneshot(post_json("/api/run", json!({}))).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["ok"], true);
    assert_eq!(
        body["output_dir"],
        dir.path().join("default_out").display().to_string()
    );
    assert!(dir.path().join("default_out").join("summary.md").exists());
}

#[tokio::test]
async fn test_run_with_asr_and_missing_audio_fails() {
    let dir = tempfile::tempdir().unwrap();
    let app = setup_app(dir.path());

    let body = json!({
        "input_path": dir.path().join("missing.wav").display().to_string(),
        "output_dir": dir.path().join("out").display().to_string(),
        "run_asr": true,
        "enable_engagement": false,
    });
    let response = app.oneshot(post_json("/api/run", body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["ok"], false);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Audio file not found"));
    assert!(body["summary_text"].is_null());
    assert!(body["prosody"].is_null());
}

#[tokio::test]
async fn test_run_request_paths_are_trimmed() {
    let dir = tempfile::tempdir().unwrap();
    let app = setup_app(dir.path());
    let output_dir = dir.path().join("trimmed_out");

    let body = json!({
        "input_path": format!("  {}  ", dir.path().join("missing.wav").display()),
        "output_dir": format!(" {} ", output_dir.display()),
        "run_asr": false,
        "enable_engagement": false,
    });
    let response = app.oneshot(post_json("/api/run", body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["output_dir"], output_dir.display().to_string());
    assert!(output_dir.join("summary.md").exists());
}
