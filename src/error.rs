//! Application-wide error types.
//!
//! Library modules return [`Result`] over the [`Error`] enum below, built
//! with `thiserror`. The HTTP layer maps these onto client-facing payloads
//! in [`crate::api::ApiError`], and the CLI/main wraps them with `anyhow`.
//!
//! # Design
//!
//! - [`Error`]: Top-level error enum for scanning, tagging and lookups
//! - [`ConfigError`]: Config-file specific failures, converted via `From`

use std::path::PathBuf;

use crate::config::ConfigError;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Directory walk failed; partial results are discarded
    #[error("Failed to scan {dir}: {source}")]
    Scan {
        dir: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Metadata reading error
    #[error("Metadata error for {path}: {message}")]
    Metadata { path: PathBuf, message: String },

    /// Station id not present in the config
    #[error("Station not found: {0}")]
    StationNotFound(String),

    /// Station directories contain no playable files
    #[error("No songs found for station {0}")]
    NoSongs(String),

    /// Blocking worker task failed to complete
    #[error("Task join error: {0}")]
    Task(String),
}

impl Error {
    /// Create a metadata error.
    pub fn metadata(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Metadata {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a station-not-found error.
    pub fn station_not_found(id: impl Into<String>) -> Self {
        Self::StationNotFound(id.into())
    }

    /// Create a scan error for the given directory.
    pub fn scan(dir: impl Into<PathBuf>, source: walkdir::Error) -> Self {
        Self::Scan {
            dir: dir.into(),
            source,
        }
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Task(err.to_string())
    }
}
