//! # Meeting Summarizer Common Library
//!
//! Shared code for the msum services including:
//! - Transcript / diarization / prosody artifact types
//! - API request/response types
//! - Configuration loading
//! - Common error type

pub mod api;
pub mod config;
pub mod error;
pub mod types;

pub use error::{Error, Result};
