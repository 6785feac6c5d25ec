//! Errors reported by the storage adapter
//!
//! Every variant that follows a tool run carries the captured output, since
//! that text is the main diagnostic signal for the Walrus CLI.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("bundle file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("walrus exited with {status}")]
    ProcessFailure { status: ExitStatus, output: String },

    #[error("no JSON array found in walrus output")]
    NoJsonFound { output: String },

    #[error("walrus output contained a malformed JSON array: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
        output: String,
    },

    #[error("unsupported walrus result shape `{shape}`")]
    UnsupportedResultShape { shape: String, output: String },
}

impl StoreError {
    /// Stable snake_case tag for the error class
    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::FileNotFound { .. } => "file_not_found",
            StoreError::Spawn { .. } => "spawn_failure",
            StoreError::ProcessFailure { .. } => "process_failure",
            // An array that does not parse is not a recognizable JSON result
            StoreError::NoJsonFound { .. } | StoreError::InvalidJson { .. } => "no_json_found",
            StoreError::UnsupportedResultShape { .. } => "unsupported_result_shape",
        }
    }

    /// Captured tool output, when the tool actually ran
    pub fn raw_output(&self) -> Option<&str> {
        match self {
            StoreError::ProcessFailure { output, .. }
            | StoreError::NoJsonFound { output }
            | StoreError::InvalidJson { output, .. }
            | StoreError::UnsupportedResultShape { output, .. } => Some(output),
            StoreError::FileNotFound { .. } | StoreError::Spawn { .. } => None,
        }
    }
}

pub type Result<T, E = StoreError> = std::result::Result<T, E>;
