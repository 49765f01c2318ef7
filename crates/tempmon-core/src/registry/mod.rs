//! Device registry: latest-record-per-hostname with staleness eviction.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use chrono::Utc;

use crate::types::{DeviceRecord, DeviceReport};

/// Registry of currently-known devices, keyed by claimed hostname.
///
/// Holds at most one record per hostname; a newer report overwrites
/// every field of the previous one. Entries leave the table only
/// through [`sweep`](DeviceRegistry::sweep).
///
/// The table is owned exclusively by this type and has no capacity
/// bound. Hostname identity is untrusted: two devices broadcasting the
/// same hostname collapse into one record.
///
/// Staleness is tracked with the monotonic [`Instant`] passed to
/// `ingest` and `sweep`, so eviction is immune to wall-clock jumps and
/// to any timestamp a datagram might carry.
#[derive(Debug, Default)]
pub struct DeviceRegistry {
    devices: HashMap<String, (DeviceRecord, Instant)>,
}

impl DeviceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the record for the report's hostname.
    ///
    /// Last write wins: no merging of old fields into the new record.
    /// Never fails and never rejects; validation happened at decode.
    pub fn ingest(&mut self, report: DeviceReport, now: Instant) {
        let hostname = report.hostname.clone();
        let record = DeviceRecord::from_report(report, Utc::now());
        self.devices.insert(hostname, (record, now));
    }

    /// Remove every record not refreshed within `max_age` of `now`.
    ///
    /// Returns the number of records removed so the caller can skip
    /// downstream notification when nothing changed. A record at
    /// exactly `max_age` is retained.
    pub fn sweep(&mut self, now: Instant, max_age: Duration) -> usize {
        let before = self.devices.len();
        self.devices.retain(|hostname, (_, seen)| {
            let keep = now.saturating_duration_since(*seen) <= max_age;
            if !keep {
                tracing::info!(hostname = %hostname, "removing stale device");
            }
            keep
        });
        before - self.devices.len()
    }

    /// Point-in-time copy of all current records, in unspecified order.
    /// Sorting is a presentation concern.
    pub fn snapshot(&self) -> Vec<DeviceRecord> {
        self.devices.values().map(|(record, _)| record.clone()).collect()
    }

    pub fn get(&self, hostname: &str) -> Option<&DeviceRecord> {
        self.devices.get(hostname).map(|(record, _)| record)
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX_AGE: Duration = Duration::from_millis(30_000);

    fn report(hostname: &str, celsius: f64) -> DeviceReport {
        DeviceReport {
            hostname: hostname.to_string(),
            celsius,
            fahrenheit: celsius * 9.0 / 5.0 + 32.0,
            model: None,
            ram: None,
            source_addr: "192.168.1.50".to_string(),
        }
    }

    #[test]
    fn test_single_ingest_visible_in_snapshot() {
        let mut registry = DeviceRegistry::new();
        registry.ingest(report("pi-1", 45.2), Instant::now());

        let snapshot = registry.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].hostname, "pi-1");
        assert_eq!(snapshot[0].celsius, 45.2);
        assert_eq!(snapshot[0].fahrenheit, 45.2 * 9.0 / 5.0 + 32.0);
    }

    #[test]
    fn test_reingest_overwrites_all_fields() {
        let mut registry = DeviceRegistry::new();
        let t0 = Instant::now();

        let mut first = report("pi-1", 45.2);
        first.model = Some("Raspberry Pi 3".to_string());
        registry.ingest(first, t0);

        // Second report omits the model; last write wins, so the old
        // model must not survive the overwrite.
        registry.ingest(report("pi-1", 50.0), t0 + Duration::from_secs(5));

        assert_eq!(registry.len(), 1);
        let record = registry.get("pi-1").unwrap();
        assert_eq!(record.celsius, 50.0);
        assert!(record.model.is_none());
    }

    #[test]
    fn test_reingest_refreshes_staleness() {
        let mut registry = DeviceRegistry::new();
        let t0 = Instant::now();
        let t1 = t0 + Duration::from_millis(20_000);

        registry.ingest(report("pi-1", 45.2), t0);
        registry.ingest(report("pi-1", 46.0), t1);

        // t0 + max_age + 1ms: stale relative to t0, fresh relative to t1.
        let removed = registry.sweep(t0 + MAX_AGE + Duration::from_millis(1), MAX_AGE);
        assert_eq!(removed, 0);
        assert_eq!(registry.len(), 1);

        let removed = registry.sweep(t1 + MAX_AGE + Duration::from_millis(1), MAX_AGE);
        assert_eq!(removed, 1);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_sweep_removes_stale_device() {
        let mut registry = DeviceRegistry::new();
        let t0 = Instant::now();
        registry.ingest(report("pi-1", 45.2), t0);

        let removed = registry.sweep(t0 + Duration::from_millis(40_000), MAX_AGE);
        assert_eq!(removed, 1);
        assert!(registry.snapshot().is_empty());
    }

    #[test]
    fn test_sweep_keeps_record_at_exact_max_age() {
        let mut registry = DeviceRegistry::new();
        let t0 = Instant::now();
        registry.ingest(report("pi-1", 45.2), t0);

        // Eviction requires strictly older than max_age.
        assert_eq!(registry.sweep(t0 + MAX_AGE, MAX_AGE), 0);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_sweep_only_removes_stale_entries() {
        let mut registry = DeviceRegistry::new();
        let t0 = Instant::now();
        registry.ingest(report("pi-old", 45.2), t0);
        registry.ingest(report("pi-new", 50.0), t0 + Duration::from_millis(25_000));

        let removed = registry.sweep(t0 + Duration::from_millis(40_000), MAX_AGE);
        assert_eq!(removed, 1);
        assert!(registry.get("pi-old").is_none());
        assert!(registry.get("pi-new").is_some());
    }

    #[test]
    fn test_sweep_on_empty_registry() {
        let mut registry = DeviceRegistry::new();
        assert_eq!(registry.sweep(Instant::now(), MAX_AGE), 0);
    }

    #[test]
    fn test_multiple_devices_tracked_independently() {
        let mut registry = DeviceRegistry::new();
        let now = Instant::now();
        registry.ingest(report("pi-1", 70.0), now);
        registry.ingest(report("pi-2", 50.0), now);

        assert_eq!(registry.len(), 2);
        let snapshot = registry.snapshot();
        assert!(snapshot.iter().any(|d| d.hostname == "pi-1" && d.celsius == 70.0));
        assert!(snapshot.iter().any(|d| d.hostname == "pi-2" && d.celsius == 50.0));
    }

    #[test]
    fn test_hostnames_are_case_sensitive() {
        let mut registry = DeviceRegistry::new();
        let now = Instant::now();
        registry.ingest(report("pi-1", 45.0), now);
        registry.ingest(report("PI-1", 46.0), now);

        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut registry = DeviceRegistry::new();
        registry.ingest(report("pi-1", 45.2), Instant::now());

        let snapshot = registry.snapshot();
        registry.sweep(Instant::now() + Duration::from_millis(60_000), MAX_AGE);

        // The snapshot taken earlier is unaffected by later eviction.
        assert_eq!(snapshot.len(), 1);
        assert!(registry.is_empty());
    }
}
