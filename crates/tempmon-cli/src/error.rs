//! Error types for the tempmon CLI.
//!
//! CliError wraps CoreError from the shared library and adds
//! CLI-specific variants.

use tempmon_core::error::CoreError;
use thiserror::Error;

// Re-export core error types so command modules can use them via crate::error
pub use tempmon_core::error::{ConfigError, MonitorError};

/// Exit codes for the CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NETWORK_ERROR: i32 = 2;
    pub const INVALID_ARGS: i32 = 4;
}

/// Main error type for the CLI
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No temperature source: {0}")]
    NoTemperatureSource(String),

    #[error("{0}")]
    Other(String),
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Core(e) => match e {
                CoreError::Monitor(_) => exit_codes::NETWORK_ERROR,
                CoreError::Config(_) => exit_codes::GENERAL_ERROR,
                CoreError::Io(_) => exit_codes::GENERAL_ERROR,
                CoreError::Other(_) => exit_codes::GENERAL_ERROR,
            },
            CliError::Io(_) => exit_codes::GENERAL_ERROR,
            CliError::InvalidArgument(_) => exit_codes::INVALID_ARGS,
            CliError::NoTemperatureSource(_) => exit_codes::GENERAL_ERROR,
            CliError::Other(_) => exit_codes::GENERAL_ERROR,
        }
    }
}

// Conversions from core error subtypes to CliError
impl From<MonitorError> for CliError {
    fn from(e: MonitorError) -> Self {
        CliError::Core(CoreError::Monitor(e))
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Core(CoreError::Config(e))
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_failure_maps_to_network_exit_code() {
        let err: CliError = MonitorError::Bind {
            port: 9876,
            source: std::io::Error::new(std::io::ErrorKind::AddrInUse, "in use"),
        }
        .into();
        assert_eq!(err.exit_code(), exit_codes::NETWORK_ERROR);
    }

    #[test]
    fn test_invalid_argument_exit_code() {
        let err = CliError::InvalidArgument("--interval 0".to_string());
        assert_eq!(err.exit_code(), exit_codes::INVALID_ARGS);
    }
}
