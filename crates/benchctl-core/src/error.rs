//! Error types for benchctl-core

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while orchestrating benchmark tools
#[derive(Error, Debug)]
pub enum BenchError {
    /// Tool name is not in the supported set
    #[error("Unsupported tool '{name}'. Expected one of: {supported}")]
    UnknownTool { name: String, supported: String },

    /// Configuration file does not exist
    #[error("Configuration file does not exist: {0}")]
    ConfigNotFound(PathBuf),

    /// Artifact directory does not exist
    #[error("Artifact directory does not exist: {0}")]
    ArtifactsDirNotFound(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the core crate
pub type Result<T> = std::result::Result<T, BenchError>;
