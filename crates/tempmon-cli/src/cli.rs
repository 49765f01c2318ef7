//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};

use tempmon_core::SortBy;

/// tempmon - live table of temperature reports broadcast by remote devices
#[derive(Parser, Debug)]
#[command(name = "tempmon")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a JSON config file
    #[arg(short, long, global = true, env = "TEMPMON_CONFIG")]
    pub config: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Listen for temperature broadcasts and show a live device table
    Watch(WatchArgs),

    /// Broadcast this machine's CPU temperature
    Send(SendArgs),
}

// ==================== Watch ====================

#[derive(Args, Debug)]
pub struct WatchArgs {
    /// UDP port to listen on (overrides config file)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Sort order for the device table (overrides config file)
    #[arg(long, value_enum)]
    pub sort_by: Option<SortOrder>,

    /// Hide the Celsius column
    #[arg(long)]
    pub hide_celsius: bool,

    /// Hide the Fahrenheit column
    #[arg(long)]
    pub hide_fahrenheit: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum SortOrder {
    Hostname,
    Temperature,
}

impl From<SortOrder> for SortBy {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Hostname => SortBy::Hostname,
            SortOrder::Temperature => SortBy::Temperature,
        }
    }
}

// ==================== Send ====================

#[derive(Args, Debug)]
pub struct SendArgs {
    /// UDP port to broadcast on (overrides config file)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Seconds between broadcasts
    #[arg(short, long, default_value = "5")]
    pub interval: u64,

    /// Broadcast a single report and exit
    #[arg(long)]
    pub once: bool,

    /// Hostname to report (default: this machine's hostname)
    #[arg(long)]
    pub hostname: Option<String>,

    /// Celsius value to report instead of reading the CPU sensor
    #[arg(long)]
    pub celsius: Option<f64>,

    /// Hardware model string to include in reports
    #[arg(long)]
    pub model: Option<String>,

    /// RAM size string to include in reports
    #[arg(long)]
    pub ram: Option<String>,
}
