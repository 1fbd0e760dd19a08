//! Transcript/diarization alignment
//!
//! Assigns each ASR segment the speaker of the diarization turn it overlaps
//! most. Ties keep the first maximal turn (strict-greater comparison).

use std::cmp::Ordering;

use msum_common::types::{AlignedSegment, AlignedTranscript, Diarization, Transcript, Turn};

pub const UNKNOWN_SPEAKER: &str = "UNKNOWN";

/// Overlap duration in seconds between `[a_start, a_end]` and `[b_start, b_end]`.
fn overlap(a_start: f64, a_end: f64, b_start: f64, b_end: f64) -> f64 {
    (a_end.min(b_end) - a_start.max(b_start)).max(0.0)
}

/// Build the speaker-attributed transcript (`segments.json`).
///
/// With no diarization every segment is attributed to `UNKNOWN`. Output is
/// sorted by (start, end).
pub fn align_transcript(
    transcript: &Transcript,
    diarization: Option<&Diarization>,
) -> AlignedTranscript {
    let turns: &[Turn] = diarization.map(|d| d.turns.as_slice()).unwrap_or(&[]);

    let mut segments: Vec<AlignedSegment> = transcript
        .segments
        .iter()
        .map(|segment| {
            let mut speaker = UNKNOWN_SPEAKER.to_string();
            let mut turn_id = None;
            let mut best_overlap = 0.0;

            for turn in turns {
                let ov = overlap(segment.start, segment.end, turn.start, turn.end);
                if ov > best_overlap {
                    best_overlap = ov;
                    turn_id = Some(turn.id);
                    speaker = turn.speaker.clone();
                }
            }

            AlignedSegment {
                id: segment.id,
                start: segment.start,
                end: segment.end,
                speaker,
                text: segment.text.trim().to_string(),
                asr_segment_id: segment.id,
                turn_id,
            }
        })
        .collect();

    segments.sort_by(|a, b| {
        (a.start, a.end)
            .partial_cmp(&(b.start, b.end))
            .unwrap_or(Ordering::Equal)
    });

    AlignedTranscript { segments }
}
