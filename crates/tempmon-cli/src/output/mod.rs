//! Output formatting for the device table.

pub mod json;
pub mod table;

pub use json::JsonOutput;
pub use table::TableOutput;

use tempmon_core::{DeviceRecord, DisplayConfig, SortBy};

/// Output formatter trait
pub trait OutputFormatter {
    /// Format the current device list
    fn format_devices(&self, devices: &[DeviceRecord], display: &DisplayConfig) -> String;
}

/// Get the appropriate formatter based on JSON flag
pub fn get_formatter(json: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonOutput::new())
    } else {
        Box::new(TableOutput::new())
    }
}

/// Sort a snapshot for display: lexicographic by hostname, or Celsius
/// descending (hottest first).
pub fn sort_devices(devices: &mut [DeviceRecord], sort_by: SortBy) {
    match sort_by {
        SortBy::Hostname => devices.sort_by(|a, b| a.hostname.cmp(&b.hostname)),
        SortBy::Temperature => {
            devices.sort_by(|a, b| b.celsius.partial_cmp(&a.celsius).unwrap_or(std::cmp::Ordering::Equal))
        }
    }
}
