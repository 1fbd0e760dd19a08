//! ASR stage: transcript acquisition behind the [`AsrEngine`] seam

use std::path::Path;
use std::process::Command;

use msum_common::types::Transcript;
use msum_common::{Error, Result};
use tracing::info;

/// Speech-to-text engine. The production implementation shells out to an
/// external whisper-style CLI; tests substitute a canned transcript.
pub trait AsrEngine: Send + Sync {
    fn transcribe(&self, audio_path: &Path) -> Result<Transcript>;
}

/// External whisper-style transcriber.
///
/// Invokes `<command> --model <size> --output-format json <audio>` and reads
/// the transcript JSON (`{audio_path, model, language, segments}`) from
/// stdout. The command name and model size come from the `[asr]` config
/// section.
#[derive(Debug, Clone)]
pub struct WhisperCommand {
    command: String,
    model_size: String,
}

impl WhisperCommand {
    pub fn new(command: impl Into<String>, model_size: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            model_size: model_size.into(),
        }
    }
}

impl AsrEngine for WhisperCommand {
    fn transcribe(&self, audio_path: &Path) -> Result<Transcript> {
        if !audio_path.exists() {
            return Err(Error::NotFound(format!(
                "Audio file not found: {}",
                audio_path.display()
            )));
        }

        let program = which::which(&self.command).map_err(|_| {
            Error::Asr(format!("ASR command not found on PATH: {}", self.command))
        })?;

        info!(
            "Transcribing {} with {} (model {})",
            audio_path.display(),
            self.command,
            self.model_size
        );

        let output = Command::new(program)
            .arg("--model")
            .arg(&self.model_size)
            .arg("--output-format")
            .arg("json")
            .arg(audio_path)
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Asr(format!(
                "ASR command exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let mut transcript: Transcript = serde_json::from_slice(&output.stdout)
            .map_err(|e| Error::Asr(format!("ASR output was not transcript JSON: {e}")))?;

        // Fill metadata the external tool may omit
        if transcript.audio_path.is_empty() {
            transcript.audio_path = audio_path.display().to_string();
        }
        if transcript.model.is_empty() {
            transcript.model = self.model_size.clone();
        }

        for (idx, segment) in transcript.segments.iter_mut().enumerate() {
            if segment.id == 0 && idx != 0 {
                segment.id = idx as i64;
            }
            segment.text = segment.text.trim().to_string();
        }

        Ok(transcript)
    }
}
