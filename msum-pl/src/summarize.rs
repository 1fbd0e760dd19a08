//! Speech-aware summarization stage
//!
//! Deterministic extractive summary over the aligned transcript. The header
//! and line formats are load-bearing: the web panel and the smoke tests key
//! on them.

use std::path::Path;

use msum_common::types::{AlignedSegment, AlignedTranscript};

const MAX_HIGHLIGHTS: usize = 3;

fn collect_highlights(segments: &[AlignedSegment]) -> Vec<String> {
    segments
        .iter()
        .filter_map(|segment| {
            let text = segment.text.trim();
            if text.is_empty() {
                None
            } else {
                Some(format!("- {}: {}", segment.speaker, text))
            }
        })
        .take(MAX_HIGHLIGHTS)
        .collect()
}

/// Render the summary text written to `summary.md`.
pub fn summarize_segments(input_path: &Path, aligned: &AlignedTranscript) -> String {
    let segments = &aligned.segments;

    if segments.is_empty() {
        return format!(
            "Meeting Summary (MVP)\n\
             - Input: {}\n\
             - No transcript segments available yet (ASR skipped or produced no segments).\n",
            input_path.display()
        );
    }

    let start = segments.iter().map(|s| s.start).fold(f64::INFINITY, f64::min);
    let end = segments
        .iter()
        .map(|s| s.end.max(s.start))
        .fold(f64::NEG_INFINITY, f64::max);
    let duration_s = (end - start).max(0.0);

    let mut speakers: Vec<&str> = segments.iter().map(|s| s.speaker.as_str()).collect();
    speakers.sort_unstable();
    speakers.dedup();

    let mut highlights = collect_highlights(segments);
    if highlights.is_empty() {
        highlights.push("- (No spoken text captured in transcript segments.)".to_string());
    }

    let mut lines = vec![
        "Meeting Summary (MVP)".to_string(),
        format!("- Input: {}", input_path.display()),
        format!("- Segments analyzed: {}", segments.len()),
        format!("- Estimated duration: {duration_s:.1}s"),
        format!("- Speakers detected: {}", speakers.join(", ")),
        String::new(),
        "Top transcript highlights:".to_string(),
    ];
    lines.extend(highlights);

    lines.join("\n") + "\n"
}
