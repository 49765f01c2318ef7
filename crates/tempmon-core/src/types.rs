//! Shared data types for device reports and registry records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A validated temperature report decoded from a single datagram.
///
/// Ephemeral: produced by [`crate::protocol::decode`] and consumed
/// immediately by the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceReport {
    /// Device identity as claimed in the datagram. Non-empty, but
    /// otherwise untrusted and arbitrary.
    pub hostname: String,
    pub celsius: f64,
    pub fahrenheit: f64,
    /// Hardware model string, e.g. "Raspberry Pi 4 Model B".
    pub model: Option<String>,
    /// RAM size string, e.g. "4GB".
    pub ram: Option<String>,
    /// Network origin of the datagram, independent of the claimed
    /// hostname.
    pub source_addr: String,
}

/// The latest known state of one reporting device.
///
/// Owned exclusively by the registry; consumers only ever see clones
/// handed out through snapshots. Hostname collisions collapse into a
/// single record (last writer wins) — identity is not verified.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceRecord {
    pub hostname: String,
    pub celsius: f64,
    pub fahrenheit: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ram: Option<String>,
    pub source_addr: String,
    /// Local wall-clock time of the last accepted report. Set at
    /// ingest; any timestamp inside the datagram is ignored.
    pub last_seen: DateTime<Utc>,
}

impl DeviceRecord {
    /// Build a record from a freshly decoded report, stamped with the
    /// local clock.
    pub fn from_report(report: DeviceReport, last_seen: DateTime<Utc>) -> Self {
        Self {
            hostname: report.hostname,
            celsius: report.celsius,
            fahrenheit: report.fahrenheit,
            model: report.model,
            ram: report.ram,
            source_addr: report.source_addr,
            last_seen,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_report_copies_all_fields() {
        let report = DeviceReport {
            hostname: "pi-1".to_string(),
            celsius: 45.2,
            fahrenheit: 113.4,
            model: Some("Raspberry Pi 4 Model B".to_string()),
            ram: Some("4GB".to_string()),
            source_addr: "192.168.1.50".to_string(),
        };
        let stamp = Utc::now();
        let record = DeviceRecord::from_report(report.clone(), stamp);

        assert_eq!(record.hostname, report.hostname);
        assert_eq!(record.celsius, report.celsius);
        assert_eq!(record.fahrenheit, report.fahrenheit);
        assert_eq!(record.model, report.model);
        assert_eq!(record.ram, report.ram);
        assert_eq!(record.source_addr, report.source_addr);
        assert_eq!(record.last_seen, stamp);
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = DeviceRecord {
            hostname: "pi-1".to_string(),
            celsius: 45.2,
            fahrenheit: 113.4,
            model: None,
            ram: None,
            source_addr: "192.168.1.50".to_string(),
            last_seen: Utc::now(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"sourceAddr\""));
        assert!(json.contains("\"lastSeen\""));
        assert!(!json.contains("\"model\""));
    }
}
