//! UDP monitor module.
//!
//! Owns the broadcast socket and drives the decode → ingest pipeline
//! plus the periodic stale-device sweep.

pub mod service;

pub use service::{create_broadcast_socket, MonitorService, ShutdownHandle, DEFAULT_PORT};
