//! Configuration management for the address checker.
//!
//! Values come from environment variables, with an optional `.env` file
//! loaded first.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::fmt;
use std::str::FromStr;

/// How the checker writes one report per input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One JSON object per line
    #[default]
    Json,

    /// Human-readable `OK`/`INVALID` lines
    Text,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            other => Err(format!("Must be one of: json, text, got: {}", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Text => write!(f, "text"),
        }
    }
}

/// Configuration for the address checker.
#[derive(Debug, Clone)]
pub struct Config {
    /// Report format (default: json)
    pub output_format: OutputFormat,

    /// Privacy flag given to every parsed address (default: false)
    pub mark_private: bool,

    /// Lines longer than this many bytes are rejected unparsed (default: 1024)
    pub max_line_length: usize,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_CHECK_FORMAT`: `json` or `text` (default: json)
    /// - `ADDRESS_CHECK_PRIVATE`: `true`/`false`/`1`/`0` (default: false)
    /// - `ADDRESS_CHECK_MAX_LINE_LENGTH`: Max line length in bytes (default: 1024)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let output_format = match env::var("ADDRESS_CHECK_FORMAT") {
            Ok(val) => val
                .parse::<OutputFormat>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "ADDRESS_CHECK_FORMAT".to_string(),
                    reason,
                })?,
            Err(_) => OutputFormat::default(),
        };

        let mark_private = Self::parse_env_bool("ADDRESS_CHECK_PRIVATE", false)?;
        let max_line_length = Self::parse_env_usize("ADDRESS_CHECK_MAX_LINE_LENGTH", 1024)?;

        if max_line_length == 0 {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_CHECK_MAX_LINE_LENGTH".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            output_format,
            mark_private,
            max_line_length,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output_format: OutputFormat::Json,
            mark_private: false,
            max_line_length: 1024,
            log_level: "error".to_string(),
        }
    }
}
