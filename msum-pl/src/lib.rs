//! msum-pl library - meeting summarization pipeline
//!
//! Stage implementations (ASR, baseline diarization, transcript alignment,
//! prosody extraction, summarization) plus the orchestrating
//! [`pipeline::run_pipeline`] that sequences them and writes the run
//! artifacts.

pub mod align;
pub mod diarize;
pub mod pipeline;
pub mod prosody;
pub mod summarize;
pub mod transcribe;

pub use pipeline::{run_pipeline, PipelineRun, RunOptions};
pub use transcribe::{AsrEngine, WhisperCommand};
