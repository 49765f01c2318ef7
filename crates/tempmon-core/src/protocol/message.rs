//! Temperature message encoding and validation.

use serde::{Deserialize, Serialize};

use crate::error::RejectReason;
use crate::types::DeviceReport;

/// On-the-wire message shape:
///
/// ```json
/// {
///   "type": "temperature",
///   "hostname": "pi-1",
///   "temperature": { "celsius": 45.2, "fahrenheit": 113.4 },
///   "pi_model": "Raspberry Pi 4 Model B",
///   "pi_ram": "4GB"
/// }
/// ```
///
/// Unknown fields (some broadcasters include a `timestamp`) are
/// ignored; the registry stamps records with the local clock instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemperatureMessage {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<TemperatureReading>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pi_model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pi_ram: Option<String>,
}

/// Temperature pair inside a message. Both scales are reported by the
/// device; neither is derived locally.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TemperatureReading {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub celsius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fahrenheit: Option<f64>,
}

impl TemperatureMessage {
    /// Build an outgoing broadcast message.
    pub fn new(hostname: String, celsius: f64, fahrenheit: f64) -> Self {
        Self {
            kind: Some(MESSAGE_TYPE.to_string()),
            hostname: Some(hostname),
            temperature: Some(TemperatureReading {
                celsius: Some(celsius),
                fahrenheit: Some(fahrenheit),
            }),
            pi_model: None,
            pi_ram: None,
        }
    }
}

/// Message type discriminator for temperature broadcasts.
pub const MESSAGE_TYPE: &str = "temperature";

/// Decode and validate a raw datagram into a device report.
///
/// Pure function over untrusted bytes: no I/O, no side effects. Any
/// failure returns a [`RejectReason`] and the caller drops the
/// datagram.
///
/// A temperature value of exactly 0 is rejected as missing. The
/// deployed broadcaster fleet never reports 0.0 for a running CPU, and
/// receivers have historically treated it as an absent reading, so the
/// check is kept for compatibility.
pub fn decode(raw: &[u8], source_addr: String) -> Result<DeviceReport, RejectReason> {
    let msg: TemperatureMessage = serde_json::from_slice(raw)?;

    match msg.kind {
        None => return Err(RejectReason::MissingType),
        Some(ref kind) if kind != MESSAGE_TYPE => {
            return Err(RejectReason::UnexpectedType(kind.clone()));
        }
        Some(_) => {}
    }

    let hostname = match msg.hostname {
        Some(h) if !h.is_empty() => h,
        _ => return Err(RejectReason::MissingHostname),
    };

    let reading = msg.temperature.ok_or(RejectReason::MissingTemperature)?;
    let celsius = match reading.celsius {
        Some(c) if c != 0.0 => c,
        _ => return Err(RejectReason::MissingTemperature),
    };
    let fahrenheit = match reading.fahrenheit {
        Some(f) if f != 0.0 => f,
        _ => return Err(RejectReason::MissingTemperature),
    };

    Ok(DeviceReport {
        hostname,
        celsius,
        fahrenheit,
        model: msg.pi_model,
        ram: msg.pi_ram,
        source_addr,
    })
}
