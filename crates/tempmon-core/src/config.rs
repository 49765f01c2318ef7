//! Configuration types and file loading.
//!
//! The config file is a single flat JSON object using the same
//! camelCase keys the display frontends use, e.g.:
//!
//! ```json
//! {
//!   "port": 9876,
//!   "maxDeviceAge": 30000,
//!   "cleanupInterval": 60000,
//!   "sortBy": "temperature",
//!   "tempThresholds": { "hot": 75 }
//! }
//! ```
//!
//! Every field is optional and falls back to its default. The core
//! treats loaded values as immutable for the lifetime of the service.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Settings consumed by the monitor service itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct MonitorConfig {
    /// UDP port to listen on.
    pub port: u16,
    /// Milliseconds a device may go unreported before eviction.
    pub max_device_age: u64,
    /// Milliseconds between stale-device sweeps.
    pub cleanup_interval: u64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            port: 9876,
            max_device_age: 30_000,
            cleanup_interval: 60_000,
        }
    }
}

impl MonitorConfig {
    pub fn max_device_age(&self) -> Duration {
        Duration::from_millis(self.max_device_age)
    }

    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_millis(self.cleanup_interval)
    }
}

/// Sort order for rendered device tables.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Lexicographic by hostname (default).
    Hostname,
    /// Celsius descending, hottest first.
    Temperature,
}

/// Celsius boundaries for temperature color coding, ascending.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct TempThresholds {
    pub normal: f64,
    pub warm: f64,
    pub hot: f64,
    pub very_hot: f64,
    pub critical: f64,
}

impl Default for TempThresholds {
    fn default() -> Self {
        Self {
            normal: 50.0,
            warm: 60.0,
            hot: 70.0,
            very_hot: 80.0,
            critical: 85.0,
        }
    }
}

/// Settings consumed only by the display layer. Advisory to rendering;
/// the monitor loop never reads these.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct DisplayConfig {
    pub show_celsius: bool,
    pub show_fahrenheit: bool,
    pub sort_by: SortBy,
    pub temp_thresholds: TempThresholds,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_celsius: true,
            show_fahrenheit: true,
            sort_by: SortBy::Hostname,
            temp_thresholds: TempThresholds::default(),
        }
    }
}

/// Full application configuration: monitor and display settings in one
/// flat JSON object.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    #[serde(flatten)]
    pub monitor: MonitorConfig,
    #[serde(flatten)]
    pub display: DisplayConfig,
}

impl Config {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }
}
