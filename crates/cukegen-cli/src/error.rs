//! Semantic error types for the command-line front end.
//!
//! Configuration problems and runtime failures are kept apart so the binary
//! can map them onto distinct exit codes.

use cukegen::{ParameterTypeError, RegistryError};
use thiserror::Error;

/// Errors that can occur while configuring or running the generator.
#[derive(Debug, Error)]
pub enum CliError {
    /// An invalid configuration value was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A `--parameter-type` definition could not be parsed.
    #[error("invalid parameter type definition '{0}', expected NAME=REGEX")]
    InvalidParameterType(String),

    /// A user-defined parameter type was rejected.
    #[error("parameter type rejected: {0}")]
    ParameterType(#[from] ParameterTypeError),

    /// A user-defined parameter type could not be registered.
    #[error("parameter type not registered: {0}")]
    Registry(#[from] RegistryError),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Output could not be serialised.
    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Whether the error stems from configuration rather than execution.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidConfig(_)
                | Self::InvalidParameterType(_)
                | Self::ParameterType(_)
                | Self::Registry(_)
        )
    }
}
