//! HTTP API handlers for msum-ui

pub mod health;
pub mod run;
pub mod ui;

pub use health::health_check;
pub use run::run_pipeline_api;
pub use ui::{serve_app_js, serve_index};
