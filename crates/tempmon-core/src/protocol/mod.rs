//! Wire protocol for temperature broadcasts.
//!
//! Devices broadcast one JSON object per UDP datagram; this module
//! validates raw bytes into a [`DeviceReport`](crate::types::DeviceReport)
//! and builds outgoing messages in the same shape.

pub mod message;

pub use message::{decode, TemperatureMessage, TemperatureReading};
