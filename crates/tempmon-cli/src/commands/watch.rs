//! Watch command: run the listener and render the live device table.

use std::io::{self, Write};

use colored::*;
use tracing::warn;

use tempmon_core::{Config, MonitorService};

use crate::cli::WatchArgs;
use crate::error::CliError;
use crate::output::get_formatter;

/// Run the watch command: bind the UDP listener and redraw the device
/// table on every registry change until Ctrl+C.
pub async fn run_watch(args: WatchArgs, config: Config, json: bool) -> Result<(), CliError> {
    let mut config = config;
    if let Some(port) = args.port {
        config.monitor.port = port;
    }
    if let Some(order) = args.sort_by {
        config.display.sort_by = order.into();
    }
    if args.hide_celsius {
        config.display.show_celsius = false;
    }
    if args.hide_fahrenheit {
        config.display.show_fahrenheit = false;
    }

    let formatter = get_formatter(json);
    let display = config.display.clone();

    let (service, shutdown) = MonitorService::new(&config.monitor)?;

    // Ctrl+C transitions the listener to its closed state; shutdown is
    // idempotent, so a racing second signal is harmless.
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            shutdown.shutdown();
        }
    });

    if !json {
        println!(
            "Listening for temperature broadcasts on port {} (press Ctrl+C to stop)...",
            config.monitor.port
        );
    }

    service
        .run(move |devices| {
            if json {
                println!("{}", formatter.format_devices(devices, &display));
            } else {
                // Clear screen and redraw
                print!("\x1B[2J\x1B[1;1H");
                println!("{}", "Remote Temperature Monitor".bold());
                println!("{}", "Press Ctrl+C to stop".dimmed());
                println!();
                println!("{}", formatter.format_devices(devices, &display));
            }
            if io::stdout().flush().is_err() {
                warn!("failed to flush stdout");
            }
        })
        .await?;

    if !json {
        println!("Listener stopped.");
    }

    Ok(())
}
