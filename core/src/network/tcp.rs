use std::fmt;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpStream;
use tokio::time::timeout;

/// How a single connect attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeOutcome {
    /// Handshake completed.
    Open,
    /// The target answered with a reset.
    Closed,
    /// No answer before the deadline (usually filtered).
    TimedOut,
    /// Any other network error (no route, host down, ...).
    Unreachable,
}

impl ProbeOutcome {
    pub fn is_open(self) -> bool {
        self == ProbeOutcome::Open
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ProbeOutcome::Open => "open",
            ProbeOutcome::Closed => "closed",
            ProbeOutcome::TimedOut => "timed out",
            ProbeOutcome::Unreachable => "unreachable",
        })
    }
}

/// Attempts a full TCP handshake with `addr`, giving up after `probe_timeout`.
///
/// The stream is dropped before returning on every path.
pub async fn handshake_probe(addr: SocketAddr, probe_timeout: Duration) -> ProbeOutcome {
    match timeout(probe_timeout, TcpStream::connect(addr)).await {
        Ok(Ok(_stream)) => ProbeOutcome::Open,
        Ok(Err(e)) => classify(&e),
        Err(_elapsed) => ProbeOutcome::TimedOut,
    }
}

fn classify(err: &io::Error) -> ProbeOutcome {
    match err.kind() {
        io::ErrorKind::ConnectionRefused | io::ErrorKind::ConnectionReset => ProbeOutcome::Closed,
        io::ErrorKind::TimedOut => ProbeOutcome::TimedOut,
        _ => ProbeOutcome::Unreachable,
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};
    use std::time::Instant;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn handshake_probe_should_report_listening_port_open() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let outcome = handshake_probe(addr, Duration::from_millis(500)).await;
        assert_eq!(outcome, ProbeOutcome::Open);
    }

    #[tokio::test]
    async fn handshake_probe_should_report_released_port_closed() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let outcome = handshake_probe(addr, Duration::from_millis(500)).await;
        assert!(!outcome.is_open());
    }

    #[tokio::test]
    #[ignore]
    async fn handshake_probe_should_timeout_on_unreachable_ip() {
        let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(203, 0, 113, 1)), 443);
        let started = Instant::now();

        let outcome = handshake_probe(addr, Duration::from_millis(100)).await;
        assert!(!outcome.is_open());
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[test]
    fn refused_connections_classify_as_closed() {
        let err = io::Error::from(io::ErrorKind::ConnectionRefused);
        assert_eq!(classify(&err), ProbeOutcome::Closed);
        let err = io::Error::from(io::ErrorKind::AddrNotAvailable);
        assert_eq!(classify(&err), ProbeOutcome::Unreachable);
    }
}
