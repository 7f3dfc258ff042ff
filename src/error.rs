//! Application error types using thiserror
//!
//! Error hierarchy:
//! - AppError: fatal errors that abort the run (missing project root, IO)
//! - ParseError: tool output that could not be decoded
//!
//! Probe failures are not errors here: they are reported as data on the
//! ecosystem result so the run can continue.

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// The project root to analyze does not exist
    #[error("project root not found: {path}")]
    ProjectRootNotFound { path: PathBuf },

    /// Failed to resolve or write a path
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize the report
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors raised while decoding package manager output
#[derive(Error, Debug)]
pub enum ParseError {
    /// The tool succeeded but printed nothing
    #[error("empty output")]
    EmptyOutput,

    /// The output was not valid JSON of the expected shape
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Creates a new ProjectRootNotFound error
    pub fn project_root_not_found(path: impl Into<PathBuf>) -> Self {
        AppError::ProjectRootNotFound { path: path.into() }
    }

    /// Creates a new Io error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }
}
