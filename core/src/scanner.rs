//! TCP connect scanning over a port range.
//!
//! Every port is one unit of work. Units run as tasks on a [`JoinSet`], with a
//! [`Semaphore`] keeping at most `concurrency` connect attempts in flight.
//! Outcomes are folded by the dispatching loop in completion order, so the
//! only state the workers share is the semaphore itself.
//!
//! Cancellation is cooperative: the [`CancelToken`] is checked before each
//! dispatch, units that have not started are dropped, and units already in
//! flight are left to finish on their own timeout.

use std::collections::BTreeSet;
use std::future::Future;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::{Duration, Instant};

use netkit_common::error::ScanError;
use netkit_common::network::range::PortRange;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::network::tcp::{self, ProbeOutcome};

mod cancel;
pub mod resolver;

pub use cancel::CancelToken;

/// A validated scan request.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    pub host: String,
    pub ports: PortRange,
    pub timeout: Duration,
    pub concurrency: usize,
}

impl ScanRequest {
    pub fn new(
        host: impl Into<String>,
        ports: PortRange,
        timeout: Duration,
        concurrency: usize,
    ) -> Result<Self, ScanError> {
        if concurrency == 0 {
            return Err(ScanError::InvalidConcurrency);
        }
        if timeout.is_zero() {
            return Err(ScanError::InvalidTimeout);
        }
        Ok(Self {
            host: host.into(),
            ports,
            timeout,
            concurrency,
        })
    }

    /// Pool size actually needed; a pool wider than the range never saturates.
    fn pool_size(&self) -> usize {
        self.concurrency.min(self.ports.len())
    }
}

/// Per-outcome tallies, kept for diagnostics only.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeCounts {
    pub open: usize,
    pub closed: usize,
    pub timed_out: usize,
    pub unreachable: usize,
}

impl OutcomeCounts {
    fn record(&mut self, outcome: ProbeOutcome) {
        match outcome {
            ProbeOutcome::Open => self.open += 1,
            ProbeOutcome::Closed => self.closed += 1,
            ProbeOutcome::TimedOut => self.timed_out += 1,
            ProbeOutcome::Unreachable => self.unreachable += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.open + self.closed + self.timed_out + self.unreachable
    }
}

#[derive(Debug, Clone)]
pub struct ScanReport {
    pub address: IpAddr,
    /// Confirmed-open ports, ascending and unique.
    pub open_ports: Vec<u16>,
    pub counts: OutcomeCounts,
    /// Units dropped without being attempted because of cancellation.
    pub skipped: usize,
    pub cancelled: bool,
    pub elapsed: Duration,
}

/// Resolves the request's host and connect-scans its port range.
///
/// `on_result` is called once per finished unit, in completion order.
/// Resolution failure is returned before any port is probed.
pub async fn scan<F>(
    request: &ScanRequest,
    cancel: &CancelToken,
    on_result: F,
) -> Result<ScanReport, ScanError>
where
    F: FnMut(u16, ProbeOutcome),
{
    let address: IpAddr = resolver::lookup(&request.host).await?;
    debug!(
        "Scanning {} ({}) ports {} with {} workers",
        request.host,
        address,
        request.ports,
        request.pool_size()
    );
    Ok(scan_address(address, request, cancel, tcp::handshake_probe, on_result).await)
}

/// Scans an already resolved `address` using `prober` for each unit.
///
/// A failing or panicking unit is logged and never aborts the scan.
pub async fn scan_address<P, Fut, F>(
    address: IpAddr,
    request: &ScanRequest,
    cancel: &CancelToken,
    prober: P,
    mut on_result: F,
) -> ScanReport
where
    P: Fn(SocketAddr, Duration) -> Fut + Clone + Send + 'static,
    Fut: Future<Output = ProbeOutcome> + Send + 'static,
    F: FnMut(u16, ProbeOutcome),
{
    let started: Instant = Instant::now();
    let semaphore = Arc::new(Semaphore::new(request.pool_size()));
    let mut tasks: JoinSet<(u16, ProbeOutcome)> = JoinSet::new();

    let mut pending = request.ports.to_iter();
    let mut next_port: Option<u16> = pending.next();

    let mut open_ports: BTreeSet<u16> = BTreeSet::new();
    let mut counts = OutcomeCounts::default();
    let mut skipped: usize = 0;
    let mut cancelled: bool = false;

    loop {
        tokio::select! {
            biased;

            _ = cancel.cancelled(), if next_port.is_some() => {
                skipped = next_port.take().map_or(0, |_| 1 + pending.by_ref().count());
                cancelled = true;
                debug!("Scan cancelled, dropping {} unstarted ports", skipped);
            }

            Some(joined) = tasks.join_next() => match joined {
                Ok((port, outcome)) => {
                    counts.record(outcome);
                    if outcome.is_open() {
                        open_ports.insert(port);
                    }
                    on_result(port, outcome);
                }
                Err(e) => warn!("Scan unit failed: {}", e),
            },

            permit = semaphore.clone().acquire_owned(), if next_port.is_some() => {
                let Ok(permit) = permit else {
                    break;
                };
                if let Some(port) = next_port {
                    let prober = prober.clone();
                    let addr = SocketAddr::new(address, port);
                    let probe_timeout = request.timeout;
                    tasks.spawn(async move {
                        let _permit = permit;
                        (port, prober(addr, probe_timeout).await)
                    });
                }
                next_port = pending.next();
            }

            else => break,
        }
    }

    ScanReport {
        address,
        open_ports: open_ports.into_iter().collect(),
        counts,
        skipped,
        cancelled,
        elapsed: started.elapsed(),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
