//! JSON-formatted output for the device list.

use serde::Serialize;
use serde_json::json;

use super::{sort_devices, OutputFormatter};
use tempmon_core::{DeviceRecord, DisplayConfig};

pub struct JsonOutput;

impl JsonOutput {
    pub fn new() -> Self {
        Self
    }

    fn to_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for JsonOutput {
    fn format_devices(&self, devices: &[DeviceRecord], display: &DisplayConfig) -> String {
        let mut devices = devices.to_vec();
        sort_devices(&mut devices, display.sort_by);

        let output = json!({
            "devices": devices,
            "count": devices.len()
        });
        Self::to_json(&output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_json_shape() {
        let devices = vec![DeviceRecord {
            hostname: "pi-1".to_string(),
            celsius: 45.2,
            fahrenheit: 113.4,
            model: Some("Raspberry Pi 4 Model B".to_string()),
            ram: None,
            source_addr: "192.168.1.50".to_string(),
            last_seen: Utc::now(),
        }];

        let out = JsonOutput::new().format_devices(&devices, &DisplayConfig::default());
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(parsed["count"], 1);
        assert_eq!(parsed["devices"][0]["hostname"], "pi-1");
        assert_eq!(parsed["devices"][0]["celsius"], 45.2);
        assert_eq!(parsed["devices"][0]["model"], "Raspberry Pi 4 Model B");
        assert!(parsed["devices"][0].get("ram").is_none());
    }
}
