//! Send command: broadcast this machine's CPU temperature.
//!
//! Counterpart to the watch listener, for Raspberry Pis (or anything
//! exposing a thermal zone) that should appear in the device table.

use std::net::Ipv4Addr;
use std::path::Path;
use std::time::Duration;

use tokio::net::UdpSocket;
use tracing::{info, warn};

use tempmon_core::protocol::TemperatureMessage;
use tempmon_core::Config;

use crate::cli::SendArgs;
use crate::error::CliError;

/// CPU temperature in millidegrees Celsius, as exposed by the kernel.
const THERMAL_ZONE: &str = "/sys/class/thermal/thermal_zone0/temp";

/// Run the send command: broadcast a temperature report every
/// `--interval` seconds, or a single one with `--once`.
pub async fn run_send(args: SendArgs, config: Config) -> Result<(), CliError> {
    if args.interval == 0 && !args.once {
        return Err(CliError::InvalidArgument(
            "--interval must be at least 1 second".to_string(),
        ));
    }

    let port = args.port.unwrap_or(config.monitor.port);
    let hostname = resolve_hostname(args.hostname.clone())?;

    let socket = UdpSocket::bind("0.0.0.0:0").await?;
    socket.set_broadcast(true)?;

    info!(%hostname, port, "starting temperature broadcaster");

    loop {
        match read_celsius(&args) {
            Some(celsius) => {
                let fahrenheit = round1(to_fahrenheit(celsius));
                let mut message = TemperatureMessage::new(hostname.clone(), celsius, fahrenheit);
                message.pi_model = args.model.clone();
                message.pi_ram = args.ram.clone();

                let payload = serde_json::to_vec(&message)
                    .map_err(|e| CliError::Other(format!("Failed to encode message: {}", e)))?;
                socket.send_to(&payload, (Ipv4Addr::BROADCAST, port)).await?;
                info!("broadcast: {} - {:.1}°C ({:.1}°F)", hostname, celsius, fahrenheit);
            }
            None => {
                if args.celsius.is_none() && !Path::new(THERMAL_ZONE).exists() {
                    return Err(CliError::NoTemperatureSource(format!(
                        "{} not found; pass --celsius on machines without a thermal zone",
                        THERMAL_ZONE
                    )));
                }
                warn!("no temperature reading available, skipping broadcast");
            }
        }

        if args.once {
            return Ok(());
        }
        tokio::time::sleep(Duration::from_secs(args.interval)).await;
    }
}

fn read_celsius(args: &SendArgs) -> Option<f64> {
    if let Some(c) = args.celsius {
        return Some(c);
    }
    let raw = std::fs::read_to_string(THERMAL_ZONE).ok()?;
    parse_millidegrees(&raw)
}

/// Parse a thermal-zone reading (millidegrees Celsius) into degrees,
/// rounded to one decimal place.
fn parse_millidegrees(raw: &str) -> Option<f64> {
    let millis: f64 = raw.trim().parse().ok()?;
    Some(round1(millis / 1000.0))
}

fn to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Hostname to report: flag, then $HOSTNAME, then /etc/hostname.
fn resolve_hostname(flag: Option<String>) -> Result<String, CliError> {
    if let Some(name) = flag {
        if name.is_empty() {
            return Err(CliError::InvalidArgument("--hostname cannot be empty".to_string()));
        }
        return Ok(name);
    }

    if let Ok(name) = std::env::var("HOSTNAME") {
        if !name.is_empty() {
            return Ok(name);
        }
    }

    if let Ok(contents) = std::fs::read_to_string("/etc/hostname") {
        let name = contents.trim();
        if !name.is_empty() {
            return Ok(name.to_string());
        }
    }

    Err(CliError::InvalidArgument(
        "hostname could not be determined; pass --hostname".to_string(),
    ))
}
