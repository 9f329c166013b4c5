//! Error types for ghostie operations.
//!
//! This module defines [`GhostieError`], the error type used throughout the
//! launcher, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every variant is fatal for the current invocation and maps to exit code 1
//! - Permission problems on the target script are never raised as errors
//! - Use `anyhow::Error` (via `GhostieError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for ghostie operations.
#[derive(Debug, Error)]
pub enum GhostieError {
    /// The delegated script is not where the launcher expects it.
    #[error("Ghostie Python script not found at: {}", .path.display())]
    TargetNotFound { path: PathBuf },

    /// The interpreter could not be invoked or reported failure.
    #[error("{runtime} is required but not found in PATH")]
    RuntimeUnavailable { runtime: String },

    /// The interpreter was found but the target could not be launched.
    #[error("Failed to start ghostie: {source}")]
    Spawn {
        runtime: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GhostieError {
    /// Exit status used when an invocation ends with this error.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Result type alias for ghostie operations.
pub type Result<T> = std::result::Result<T, GhostieError>;
