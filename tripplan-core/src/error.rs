//! Error types for tripplan.
//!
//! The booking parser never fails; these cover everything around it
//! (configuration, day-plan storage, ICS export, edits).

use thiserror::Error;

/// Errors that can occur in tripplan operations.
#[derive(Error, Debug)]
pub enum TripError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Activity not found: {0}")]
    ActivityNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("ICS generation error: {0}")]
    IcsGenerate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for TripError {
    fn from(e: serde_json::Error) -> Self {
        TripError::Serialization(e.to_string())
    }
}

/// Result type alias for tripplan operations.
pub type TripResult<T> = Result<T, TripError>;
