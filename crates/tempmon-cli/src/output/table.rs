//! Table-formatted output for the device list.

use comfy_table::{Cell, Color, ContentArrangement, Table};

use super::{sort_devices, OutputFormatter};
use tempmon_core::{DeviceRecord, DisplayConfig, TempThresholds};

pub struct TableOutput;

impl TableOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TableOutput {
    fn default() -> Self {
        Self::new()
    }
}

/// Color for a temperature cell. Boundaries match the display frontend:
/// below `warm` is green, then yellow, orange, red, and purple at
/// `critical`. The `normal` threshold is carried in config but not a
/// boundary here.
pub fn temp_color(celsius: f64, thresholds: &TempThresholds) -> Color {
    if celsius >= thresholds.critical {
        Color::Magenta
    } else if celsius >= thresholds.very_hot {
        Color::Red
    } else if celsius >= thresholds.hot {
        Color::DarkYellow
    } else if celsius >= thresholds.warm {
        Color::Yellow
    } else {
        Color::Green
    }
}

impl OutputFormatter for TableOutput {
    fn format_devices(&self, devices: &[DeviceRecord], display: &DisplayConfig) -> String {
        if devices.is_empty() {
            return "No temperature monitors found.".to_string();
        }

        let mut devices = devices.to_vec();
        sort_devices(&mut devices, display.sort_by);

        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);

        let mut header = vec!["Device"];
        if display.show_celsius {
            header.push("°C");
        }
        if display.show_fahrenheit {
            header.push("°F");
        }
        table.set_header(header);

        for device in &devices {
            let color = temp_color(device.celsius, &display.temp_thresholds);

            let mut row = vec![Cell::new(&device.hostname)];
            if display.show_celsius {
                row.push(Cell::new(format!("{:.1}", device.celsius)).fg(color));
            }
            if display.show_fahrenheit {
                row.push(Cell::new(format!("{:.1}", device.fahrenheit)).fg(color));
            }
            table.add_row(row);
        }

        format!("{}\n\nFound {} device(s)", table, devices.len())
    }
}
