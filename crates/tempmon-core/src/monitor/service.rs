//! Framework-agnostic monitor service.
//!
//! Binds the UDP broadcast port, decodes incoming temperature reports
//! into the registry, and sweeps stale devices on an independent timer.
//! Consumers receive registry snapshots through a callback whenever the
//! table changes.

use std::net::SocketAddr;
use std::time::Instant;

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::UdpSocket;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::config::MonitorConfig;
use crate::error::MonitorError;
use crate::protocol;
use crate::registry::DeviceRegistry;
use crate::types::DeviceRecord;

/// Default UDP port for temperature broadcasts.
pub const DEFAULT_PORT: u16 = 9876;

/// Receive buffer size. Reports are a few hundred bytes; anything
/// larger is truncated and will fail decode.
const RECV_BUF_SIZE: usize = 2048;

/// Create a UDP socket with address reuse and broadcast reception.
pub fn create_broadcast_socket(port: u16) -> Result<std::net::UdpSocket, std::io::Error> {
    let socket = Socket::new(Domain::IPV4, Type::DGRAM, Some(Protocol::UDP))?;

    socket.set_reuse_address(true)?;

    #[cfg(unix)]
    socket.set_reuse_port(true)?;

    socket.set_broadcast(true)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    socket.bind(&addr.into())?;

    socket.set_nonblocking(true)?;

    Ok(socket.into())
}

/// Handle for stopping a running [`MonitorService`].
///
/// `shutdown` is idempotent: the first call stops the service, later
/// calls are no-ops. Dropping the handle also stops the service.
#[derive(Debug)]
pub struct ShutdownHandle {
    tx: watch::Sender<bool>,
}

impl ShutdownHandle {
    pub fn shutdown(&self) {
        // Err means the service already exited; nothing left to stop.
        let _ = self.tx.send(true);
    }
}

/// UDP temperature monitor service.
///
/// Lifecycle: [`new`](MonitorService::new) binds the socket (fatal on
/// failure, no rebind retry), [`run`](MonitorService::run) listens
/// until the paired [`ShutdownHandle`] fires.
///
/// The run loop is a single task multiplexing datagram arrival and the
/// sweep timer, so each ingest and each sweep observes a consistent
/// registry.
pub struct MonitorService {
    socket: UdpSocket,
    registry: DeviceRegistry,
    config: MonitorConfig,
    shutdown_rx: watch::Receiver<bool>,
}

impl MonitorService {
    /// Bind the configured port and prepare a service plus its shutdown
    /// handle.
    pub fn new(config: &MonitorConfig) -> Result<(Self, ShutdownHandle), MonitorError> {
        let std_socket = create_broadcast_socket(config.port).map_err(|e| MonitorError::Bind {
            port: config.port,
            source: e,
        })?;
        let socket = UdpSocket::from_std(std_socket)?;
        info!(port = config.port, "UDP temperature listener bound");

        let (tx, rx) = watch::channel(false);

        Ok((
            Self {
                socket,
                registry: DeviceRegistry::new(),
                config: config.clone(),
                shutdown_rx: rx,
            },
            ShutdownHandle { tx },
        ))
    }

    /// Port the socket actually bound to. Differs from the configured
    /// port when binding to 0.
    pub fn local_port(&self) -> Result<u16, MonitorError> {
        Ok(self.socket.local_addr()?.port())
    }

    /// Run the monitor loop, calling `on_update` with a fresh snapshot
    /// whenever the device table changes.
    ///
    /// Snapshots are emitted after every accepted report and after any
    /// sweep that removed at least one device. Decode failures and
    /// post-bind socket errors are logged and survived; only shutdown
    /// ends the loop.
    pub async fn run<F>(mut self, mut on_update: F) -> Result<(), MonitorError>
    where
        F: FnMut(&[DeviceRecord]),
    {
        let mut buf = vec![0u8; RECV_BUF_SIZE];

        let period = self.config.cleanup_interval();
        // First sweep one full period after start, not immediately.
        let mut sweep = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
        sweep.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        let max_age = self.config.max_device_age();

        loop {
            tokio::select! {
                recv = self.socket.recv_from(&mut buf) => match recv {
                    Ok((len, addr)) => {
                        match protocol::decode(&buf[..len], addr.ip().to_string()) {
                            Ok(report) => {
                                debug!(
                                    hostname = %report.hostname,
                                    celsius = report.celsius,
                                    source = %addr,
                                    "temperature report received"
                                );
                                self.registry.ingest(report, Instant::now());
                                on_update(&self.registry.snapshot());
                            }
                            Err(reason) => {
                                debug!(source = %addr, %reason, "dropping datagram");
                            }
                        }
                    }
                    Err(e) => {
                        warn!("UDP receive error: {}", e);
                    }
                },
                _ = sweep.tick() => {
                    let removed = self.registry.sweep(Instant::now(), max_age);
                    if removed > 0 {
                        debug!(removed, "sweep evicted stale devices");
                        on_update(&self.registry.snapshot());
                    }
                },
                // Err means the handle was dropped; treat as shutdown.
                _ = self.shutdown_rx.changed() => break,
            }
        }

        info!("UDP temperature listener stopped");
        Ok(())
    }
}
