//! Error types for the address checker.
//!
//! Field validation failures live in [`crate::domain::ValidationError`]; this
//! module covers configuration and the line-checking run.

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur while checking a stream of addresses.
#[derive(Error, Debug)]
pub enum CheckError {
    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to encode a report as JSON
    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CheckError
pub type CheckResult<T> = Result<T, CheckError>;
