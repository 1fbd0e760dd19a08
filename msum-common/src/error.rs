//! Common error types for the meeting summarizer

use thiserror::Error;

/// Common result type for msum operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across msum services
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding/decoding error (wraps serde_json::Error)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested resource not found
    #[error("{0}")]
    NotFound(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Audio decoding error
    #[error("Audio error: {0}")]
    Audio(String),

    /// Speech-to-text engine error
    #[error("ASR error: {0}")]
    Asr(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
