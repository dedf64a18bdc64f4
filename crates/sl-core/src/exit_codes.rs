//! Exit codes for the sl-core CLI.
//!
//! Exit codes communicate operation outcome without requiring output parsing.

use sl_common::Error;

/// Exit codes for sl-core operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Clean = 0,

    /// Configuration invalid or unreadable
    ConfigError = 10,

    /// Snapshot unreadable, corrupt, or of an unsupported version
    IoError = 13,

    /// Internal/unknown error
    InternalError = 99,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Check if this exit code indicates success.
    pub fn is_success(self) -> bool {
        self == ExitCode::Clean
    }

    /// Exit code for a failed operation.
    pub fn from_error(err: &Error) -> Self {
        match err {
            Error::InvalidConfiguration { .. } | Error::Config(_) => ExitCode::ConfigError,
            Error::SnapshotCorrupted(_) | Error::UnsupportedSchema { .. } | Error::Io(_) => {
                ExitCode::IoError
            }
            Error::Json(_) => ExitCode::InternalError,
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}
