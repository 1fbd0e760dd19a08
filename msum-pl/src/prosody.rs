//! Prosody extraction stage
//!
//! Segment-level acoustic features: inter-segment pauses from transcript
//! timing, and RMS energy over 20 ms windows of the decoded audio. A failed
//! audio read is not fatal; pause features survive it and the result carries
//! the reason in `audio_read_error`.

use std::cmp::Ordering;
use std::path::Path;

use msum_common::types::{AlignedSegment, AlignedTranscript, ProsodyFeature, ProsodyResult};
use msum_common::{Error, Result};

pub const PROSODY_METHOD: &str = "rms_pause_v1";

/// RMS window length in seconds
const RMS_WINDOW_S: f64 = 0.02;

/// Decode a WAV file into mono samples normalized to [-1, 1].
fn decode_pcm_mono(audio_path: &Path) -> Result<(Vec<f64>, u32)> {
    let mut reader =
        hound::WavReader::open(audio_path).map_err(|e| Error::Audio(e.to_string()))?;
    let spec = reader.spec();
    let channels = spec.channels.max(1) as usize;

    let interleaved: Vec<f64> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map(f64::from))
            .collect::<std::result::Result<_, _>>()
            .map_err(|e| Error::Audio(e.to_string()))?,
        hound::SampleFormat::Int => {
            let max_abs = (1i64 << (spec.bits_per_sample - 1)) as f64;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f64 / max_abs))
                .collect::<std::result::Result<_, _>>()
                .map_err(|e| Error::Audio(e.to_string()))?
        }
    };

    let mono = interleaved
        .chunks(channels)
        .map(|frame| frame.iter().sum::<f64>() / frame.len() as f64)
        .collect();

    Ok((mono, spec.sample_rate))
}

fn windowed_rms(samples: &[f64], window_size: usize) -> Vec<f64> {
    let size = window_size.max(1);
    samples
        .chunks(size)
        .map(|chunk| {
            let mean_sq = chunk.iter().map(|v| v * v).sum::<f64>() / chunk.len() as f64;
            mean_sq.sqrt()
        })
        .collect()
}

fn mean_std(values: &[f64]) -> (Option<f64>, Option<f64>) {
    if values.is_empty() {
        return (None, None);
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    (Some(mean), Some(variance.sqrt()))
}

fn sample_bounds(start_s: f64, end_s: f64, sample_rate: u32, total: usize) -> (usize, usize) {
    let rate = sample_rate as f64;
    let start = ((start_s * rate).floor().max(0.0) as usize).min(total);
    let end = ((end_s * rate).ceil().max(0.0) as usize).clamp(start, total);
    (start, end)
}

/// Compute segment-level prosody features for one run (`prosody.json`).
pub fn extract_prosody(audio_path: &Path, aligned: &AlignedTranscript) -> ProsodyResult {
    let mut segments: Vec<&AlignedSegment> = aligned.segments.iter().collect();
    segments.sort_by(|a, b| {
        (a.start, a.end)
            .partial_cmp(&(b.start, b.end))
            .unwrap_or(Ordering::Equal)
    });

    let (samples, sample_rate, audio_read_error) = if audio_path.exists() {
        match decode_pcm_mono(audio_path) {
            Ok((samples, rate)) => (samples, Some(rate), None),
            Err(e) => (Vec::new(), None, Some(e.to_string())),
        }
    } else {
        (
            Vec::new(),
            None,
            Some(format!("Audio file not found: {}", audio_path.display())),
        )
    };

    let mut features = Vec::with_capacity(segments.len());
    for (idx, segment) in segments.iter().enumerate() {
        let start = segment.start;
        let end = segment.end.max(start);

        let pause_before_s = if idx == 0 {
            0.0
        } else {
            (start - segments[idx - 1].end).max(0.0)
        };
        let pause_after_s = if idx + 1 == segments.len() {
            0.0
        } else {
            (segments[idx + 1].start - end).max(0.0)
        };

        let mut rms_mean = None;
        let mut rms_std = None;
        if let Some(rate) = sample_rate {
            if !samples.is_empty() {
                let (left, right) = sample_bounds(start, end, rate, samples.len());
                let window = (rate as f64 * RMS_WINDOW_S) as usize;
                let values = windowed_rms(&samples[left..right], window);
                (rms_mean, rms_std) = mean_std(&values);
            }
        }

        features.push(ProsodyFeature {
            segment_id: segment.id,
            start,
            end,
            speaker: segment.speaker.clone(),
            duration_s: end - start,
            pause_before_s,
            pause_after_s,
            rms_mean,
            rms_std,
        });
    }

    ProsodyResult {
        audio_path: audio_path.display().to_string(),
        method: PROSODY_METHOD.to_string(),
        sample_rate_hz: sample_rate,
        audio_read_error,
        features,
    }
}
