//! Error types for the log book.

use thiserror::Error;

use crate::types::LogHint;

/// Errors that can occur in the log book.
///
/// The write path never returns one of these: logging is best-effort by
/// contract. Only the read, export, import, and configuration paths fail
/// visibly.
#[derive(Debug, Error)]
pub enum LogError {
    /// A typed message could not be serialized.
    #[error("failed to encode log message: {0}")]
    Encode(#[source] serde_json::Error),

    /// A payload could not be decoded under its declared hint.
    #[error("failed to decode {hint} payload: {reason}")]
    Decode {
        /// The hint the payload was declared with.
        hint: LogHint,
        /// Why decoding failed.
        reason: String,
    },

    /// An I/O error occurred while exporting or importing logs.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An export file did not contain valid log records.
    #[error("malformed export file: {0}")]
    MalformedExport(#[source] serde_json::Error),

    /// The export task failed before the file was in place.
    #[error("export failed: {0}")]
    Export(String),

    /// A store configuration was rejected.
    #[error("invalid store configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for log book operations.
pub type Result<T> = std::result::Result<T, LogError>;
