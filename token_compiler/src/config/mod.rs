//! Configuration module for the token compiler
//!
//! Three layers: compile-time limits (`constants`), environment-driven
//! runtime preferences (`runtime`), and the optional TOML generator
//! configuration that controls output naming (`generator`).

pub mod constants;
pub mod generator;
pub mod runtime;

pub use generator::{GeneratorConfig, OutputNames, TypeScriptNames};

use crate::logging::codes;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating generator configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read configuration file '{}': {source}", path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML in configuration file '{}': {source}", path.display())]
    ParseFailure {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigError {
    pub fn read_failure(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFailure {
            path: path.into(),
            source,
        }
    }

    pub fn parse_failure(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::ParseFailure {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_value(field: &str, reason: &str) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate error code for global logging system
    pub fn error_code(&self) -> codes::Code {
        match self {
            Self::ReadFailure { .. } => codes::config::CONFIG_READ_FAILURE,
            Self::ParseFailure { .. } => codes::config::CONFIG_PARSE_FAILURE,
            Self::InvalidValue { .. } => codes::config::INVALID_CONFIG_VALUE,
        }
    }
}
