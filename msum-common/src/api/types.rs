//! Request/response types for `POST /api/run`
//!
//! The wire contract consumed by the Run Panel. A success response carries
//! `ok: true` plus the run artifacts; any failure collapses to
//! `{ok: false, error}` regardless of cause. All optional fields serialize as
//! explicit `null` so the panel sees a stable shape.

use serde::{Deserialize, Serialize};

use crate::types::ProsodyResult;

/// One pipeline run request. Every field is defaulted, so a bare `{}` body is
/// a valid request that runs with the service's configured default paths.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RunRequest {
    #[serde(default)]
    pub input_path: String,
    #[serde(default)]
    pub output_dir: String,
    #[serde(default)]
    pub run_asr: bool,
    #[serde(default)]
    pub enable_engagement: bool,
}

/// Which artifacts a run wrote into its output directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunFiles {
    pub summary_md: bool,
    pub prosody_json: bool,
    pub segments_json: bool,
}

/// Response body for `POST /api/run`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunResponse {
    pub ok: bool,
    pub error: Option<String>,
    pub output_dir: Option<String>,
    pub summary_text: Option<String>,
    pub run_asr: Option<bool>,
    pub enable_engagement: Option<bool>,
    pub files: Option<RunFiles>,
    pub prosody: Option<ProsodyResult>,
}

impl RunResponse {
    /// Failure shape: `{ok: false, error}` with everything else null
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(error.into()),
            ..Self::default()
        }
    }
}
