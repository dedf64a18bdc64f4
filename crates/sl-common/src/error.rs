//! Error types for Swolight.

use thiserror::Error;

/// Result type alias for Swolight operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for Swolight.
///
/// Only construction and file loading can fail. Steady-state telemetry
/// reads fall back to defaults and never produce one of these.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors (10-19)
    #[error("invalid configuration: {field}: {reason}")]
    InvalidConfiguration { field: &'static str, reason: String },

    #[error("configuration error: {0}")]
    Config(String),

    // Snapshot errors (20-29)
    #[error("snapshot corrupted: {0}")]
    SnapshotCorrupted(String),

    #[error("unsupported snapshot schema version: {version}")]
    UnsupportedSchema { version: String },

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the error code for this error type.
    /// Used for detailed error reporting in JSON output.
    pub fn code(&self) -> u32 {
        match self {
            Error::InvalidConfiguration { .. } => 10,
            Error::Config(_) => 11,
            Error::SnapshotCorrupted(_) => 20,
            Error::UnsupportedSchema { .. } => 21,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
        }
    }

    /// Whether this error came from configuration (as opposed to I/O or data).
    pub fn is_config(&self) -> bool {
        matches!(self, Error::InvalidConfiguration { .. } | Error::Config(_))
    }
}
