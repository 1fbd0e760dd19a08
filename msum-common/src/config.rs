//! Configuration loading and config file resolution

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Error, Result};

/// Service configuration from the msum TOML config file.
///
/// Every field has a compiled default, so services start with no config file
/// present at all.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Interface the web UI binds to
    pub host: String,
    /// Port the web UI binds to
    pub port: u16,
    /// Input audio used when a run request leaves the path blank
    pub default_input: PathBuf,
    /// Output directory used when a run request leaves it blank
    pub default_output_dir: PathBuf,
    /// Speech-to-text engine settings
    pub asr: AsrConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            default_input: PathBuf::from("data/raw/sample.wav"),
            default_output_dir: PathBuf::from("outputs/web_run"),
            asr: AsrConfig::default(),
        }
    }
}

/// External ASR command settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AsrConfig {
    /// Whisper-style CLI that emits transcript JSON on stdout
    pub command: String,
    /// Model size passed to the command
    pub model_size: String,
}

impl Default for AsrConfig {
    fn default() -> Self {
        Self {
            command: "whisper-json".to_string(),
            model_size: "small".to_string(),
        }
    }
}

/// Config file resolution, in priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable
/// 3. `~/.config/msum/config.toml` (XDG config dir), if it exists
/// 4. None - compiled defaults apply
///
/// Explicitly supplied paths (tiers 1-2) are returned without an existence
/// check so a typo surfaces as a load error instead of silently falling back.
pub fn resolve_config_path(cli_arg: Option<&Path>, env_var_name: &str) -> Option<PathBuf> {
    if let Some(path) = cli_arg {
        return Some(path.to_path_buf());
    }

    if let Ok(path) = std::env::var(env_var_name) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    let candidate = dirs::config_dir()?.join("msum").join("config.toml");
    if candidate.exists() {
        Some(candidate)
    } else {
        None
    }
}

/// Load configuration from an optional config file path.
///
/// `None` yields the compiled defaults. A present path must be readable,
/// valid TOML.
pub fn load_config(path: Option<&Path>) -> Result<UiConfig> {
    let Some(path) = path else {
        return Ok(UiConfig::default());
    };

    tracing::debug!("Loading config from {}", path.display());
    let text = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
    toml::from_str(&text).map_err(|e| Error::Config(format!("invalid {}: {}", path.display(), e)))
}
