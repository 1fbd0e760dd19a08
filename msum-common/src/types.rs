//! Pipeline artifact types
//!
//! These structs are the JSON artifacts one pipeline run writes into its
//! output directory (`transcript.json`, `diarization.json`, `segments.json`,
//! `prosody.json`) and the shapes the web panel consumes.
//!
//! Optional fields serialize as explicit `null` (never skipped): the panel's
//! renderer distinguishes a null RMS value from a numeric one. Deserialization
//! is lenient (missing fields default) because transcripts may come from
//! external ASR tools that omit metadata.

use serde::{Deserialize, Serialize};

/// One ASR segment: a contiguous stretch of recognized speech.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub start: f64,
    #[serde(default)]
    pub end: f64,
    #[serde(default)]
    pub text: String,
}

/// Raw ASR output for one audio file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    #[serde(default)]
    pub audio_path: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub segments: Vec<TranscriptSegment>,
}

/// One speaker turn produced by diarization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub id: i64,
    pub speaker: String,
    pub start: f64,
    pub end: f64,
}

/// Diarization output: who spoke when.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diarization {
    #[serde(default)]
    pub audio_path: String,
    pub method: String,
    pub speakers: Vec<String>,
    pub turns: Vec<Turn>,
}

/// An ASR segment with its diarization-assigned speaker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedSegment {
    pub id: i64,
    pub start: f64,
    pub end: f64,
    pub speaker: String,
    pub text: String,
    pub asr_segment_id: i64,
    #[serde(default)]
    pub turn_id: Option<i64>,
}

/// Speaker-attributed transcript (`segments.json`), sorted by time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlignedTranscript {
    #[serde(default)]
    pub segments: Vec<AlignedSegment>,
}

/// Per-segment acoustic measurements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProsodyFeature {
    pub segment_id: i64,
    pub start: f64,
    pub end: f64,
    pub speaker: String,
    pub duration_s: f64,
    pub pause_before_s: f64,
    pub pause_after_s: f64,
    pub rms_mean: Option<f64>,
    pub rms_std: Option<f64>,
}

/// Prosody extraction output (`prosody.json`).
///
/// `sample_rate_hz` and the RMS fields are null when the audio could not be
/// read; `audio_read_error` then carries the reason. Pause features are
/// derived from segment timing alone, so they survive a failed audio read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProsodyResult {
    #[serde(default)]
    pub audio_path: String,
    pub method: String,
    pub sample_rate_hz: Option<u32>,
    pub audio_read_error: Option<String>,
    pub features: Vec<ProsodyFeature>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_lenient_deserialization() {
        // External ASR tools may emit only segment timing and text
        let json = r#"{"segments": [{"start": 0.5, "end": 2.0, "text": "hello"}]}"#;
        let transcript: Transcript = serde_json::from_str(json).unwrap();

        assert_eq!(transcript.audio_path, "");
        assert_eq!(transcript.model, "");
        assert_eq!(transcript.language, None);
        assert_eq!(transcript.segments.len(), 1);
        assert_eq!(transcript.segments[0].id, 0);
        assert_eq!(transcript.segments[0].text, "hello");
    }

    #[test]
    fn test_prosody_nulls_serialize_explicitly() {
        let result = ProsodyResult {
            audio_path: "missing.wav".to_string(),
            method: "rms_pause_v1".to_string(),
            sample_rate_hz: None,
            audio_read_error: Some("Audio file not found: missing.wav".to_string()),
            features: vec![ProsodyFeature {
                segment_id: 0,
                start: 0.0,
                end: 1.0,
                speaker: "SPEAKER_0".to_string(),
                duration_s: 1.0,
                pause_before_s: 0.0,
                pause_after_s: 0.0,
                rms_mean: None,
                rms_std: None,
            }],
        };

        let value = serde_json::to_value(&result).unwrap();
        assert!(value["sample_rate_hz"].is_null());
        assert!(value["features"][0]["rms_mean"].is_null());
        assert!(value["features"][0]["rms_std"].is_null());
    }
}
