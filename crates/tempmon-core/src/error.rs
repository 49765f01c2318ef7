//! Error types for the monitoring core.

use thiserror::Error;

/// Core error type for monitoring operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Monitor error: {0}")]
    Monitor(#[from] MonitorError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Listener/scheduler errors.
///
/// Only `Bind` is fatal to the service; everything after a successful
/// bind is logged and survived.
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("Failed to bind UDP port {port}: {source}")]
    Bind {
        port: u16,
        #[source]
        source: std::io::Error,
    },

    #[error("Socket error: {0}")]
    Socket(#[from] std::io::Error),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Why an incoming datagram was dropped by the decoder.
///
/// Decode failures are recoverable by definition: the datagram is
/// discarded, the registry is untouched, and the listener keeps going.
#[derive(Debug, Error)]
pub enum RejectReason {
    #[error("malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("missing message type")]
    MissingType,

    #[error("unexpected message type \"{0}\"")]
    UnexpectedType(String),

    #[error("missing or empty hostname")]
    MissingHostname,

    #[error("missing temperature reading")]
    MissingTemperature,
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_error_display() {
        let err = MonitorError::Bind {
            port: 9876,
            source: std::io::Error::new(std::io::ErrorKind::AddrInUse, "in use"),
        };
        assert!(format!("{}", err).contains("9876"));
    }

    #[test]
    fn test_core_error_from_monitor_error() {
        let err = CoreError::Monitor(MonitorError::Bind {
            port: 1,
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        });
        assert!(format!("{}", err).contains("Failed to bind"));
    }

    #[test]
    fn test_reject_reason_display() {
        let err = RejectReason::UnexpectedType("humidity".to_string());
        assert_eq!(format!("{}", err), "unexpected message type \"humidity\"");
    }
}
