//! Error types for gibo operations.
//!
//! This module defines [`GiboError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - `Environment` errors are fatal; only the binary entry point turns them
//!   into process termination
//! - Everything else propagates to the command layer, which reports it
//! - Use `anyhow::Error` (via `GiboError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for gibo operations.
#[derive(Debug, Error)]
pub enum GiboError {
    /// The host cannot provide a location for the mirror.
    #[error("{message}")]
    Environment { message: String },

    /// The mirror path exists but is not a directory.
    #[error("{path} exists but is not a directory")]
    NotADirectory { path: PathBuf },

    /// A filesystem operation on a specific path failed.
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Talking to the remote origin failed.
    #[error("{operation} failed: {message}")]
    Network { operation: String, message: String },

    /// The mirror's git metadata is missing, corrupt or inconsistent.
    #[error("Repository error: {message}")]
    Repository { message: String },

    /// No boilerplate matches the requested name.
    #[error("{name}: boilerplate not found")]
    NotFound { name: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GiboError {
    /// Whether this error means the tool cannot run at all on this host.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Environment { .. })
    }
}

/// Result type alias for gibo operations.
pub type Result<T> = std::result::Result<T, GiboError>;
