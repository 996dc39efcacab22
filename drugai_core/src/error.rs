//! Error types for the drugai_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for drugai_core operations
///
/// Calculator validation is not reported here; it is a value
/// (see [`crate::ClearanceOutcome`]). These variants cover the
/// operational failures around the calculators.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Calculator input rejected where the caller asked for a hard failure
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] crate::types::InvalidInput),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
