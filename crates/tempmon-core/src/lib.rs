//! Core library for remote temperature monitoring.
//!
//! Listens for UDP temperature broadcasts from remote devices (Raspberry
//! Pis reporting their CPU temperature) and maintains a live registry of
//! currently-known devices, pruned of entries that stop reporting.
//!
//! The pieces compose bottom-up: [`protocol`] turns raw datagram bytes
//! into validated reports, [`registry`] keeps the latest record per
//! hostname, and [`monitor`] owns the socket and drives both.

pub mod config;
pub mod error;
pub mod monitor;
pub mod protocol;
pub mod registry;
pub mod types;

pub use config::{Config, DisplayConfig, MonitorConfig, SortBy, TempThresholds};
pub use error::{ConfigError, CoreError, MonitorError, RejectReason, Result};
pub use monitor::{MonitorService, ShutdownHandle};
pub use registry::DeviceRegistry;
pub use types::{DeviceRecord, DeviceReport};
