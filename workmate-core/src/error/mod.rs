//! Core error types for Workmate

use crate::types::Origin;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Workmate operations
#[derive(Error, Debug)]
pub enum WorkmateError {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid CSV in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Malformed record #{index}{location}: {reason}")]
    MalformedRecord {
        /// 1-based position in the combined record sequence
        index: usize,
        location: Location,
        reason: String,
    },

    #[error("Report not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for Workmate operations
pub type WorkmateResult<T> = Result<T, WorkmateError>;

/// Where a record came from, rendered as ` (path:line)` or nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location(pub Option<Origin>);

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(origin) => write!(f, " ({})", origin),
            None => Ok(()),
        }
    }
}

impl WorkmateError {
    /// Process exit code for this error class
    pub fn exit_code(&self) -> i32 {
        match self {
            WorkmateError::Usage(_)
            | WorkmateError::NotFound(_)
            | WorkmateError::Configuration(_) => 2,
            WorkmateError::Io { .. } | WorkmateError::Csv { .. } => 3,
            WorkmateError::MalformedRecord { .. } => 4,
            WorkmateError::Serialization(_) => 1,
        }
    }
}

impl From<serde_json::Error> for WorkmateError {
    fn from(err: serde_json::Error) -> Self {
        WorkmateError::Serialization(err.to_string())
    }
}
