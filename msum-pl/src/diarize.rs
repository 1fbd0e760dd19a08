//! Baseline diarization stub
//!
//! Placeholder for a real diarization backend: every ASR segment becomes one
//! turn attributed to a single speaker. Downstream alignment and prosody only
//! depend on the turn structure, so they are unaffected when this stub is
//! replaced.

use msum_common::types::{Diarization, Transcript, Turn};

pub const BASELINE_SPEAKER: &str = "SPEAKER_0";
pub const BASELINE_METHOD: &str = "baseline_stub";

/// Derive a single-speaker diarization from transcript segment timing.
pub fn baseline_diarize(transcript: &Transcript) -> Diarization {
    let turns = transcript
        .segments
        .iter()
        .enumerate()
        .map(|(i, segment)| Turn {
            id: i as i64,
            speaker: BASELINE_SPEAKER.to_string(),
            start: segment.start,
            end: segment.end,
        })
        .collect();

    Diarization {
        audio_path: transcript.audio_path.clone(),
        method: BASELINE_METHOD.to_string(),
        speakers: vec![BASELINE_SPEAKER.to_string()],
        turns,
    }
}
