//! Single-target reachability check.
//!
//! Shells out to the platform `ping`. When the binary is not installed the
//! check degrades to one TCP connect attempt on a well-known port.

use std::process::Stdio;
use std::time::Duration;

use netkit_common::error::ToolError;
use tokio::net::TcpStream;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, warn};

const PING_PROGRAM: &str = "ping";
const FALLBACK_PORT: u16 = 80;

#[cfg(windows)]
const COUNT_FLAG: &str = "-n";
#[cfg(not(windows))]
const COUNT_FLAG: &str = "-c";

#[derive(Debug, Clone)]
pub struct Pinger {
    program: String,
    fallback_port: u16,
}

impl Default for Pinger {
    fn default() -> Self {
        Self::new(PING_PROGRAM, FALLBACK_PORT)
    }
}

impl Pinger {
    pub fn new(program: impl Into<String>, fallback_port: u16) -> Self {
        Self {
            program: program.into(),
            fallback_port,
        }
    }

    /// Returns whether `host` answered any of `attempts` echo requests.
    ///
    /// The whole run is bounded by `timeout` per attempt. Timeouts, non-zero
    /// exits and spawn errors all report the host as unreachable.
    pub async fn probe(&self, host: &str, probe_timeout: Duration, attempts: u32) -> bool {
        // Would otherwise be parsed as an option by the ping binary.
        if host.is_empty() || host.starts_with('-') {
            return false;
        }

        let attempts: u32 = attempts.max(1);
        match self.run_ping(host, probe_timeout.saturating_mul(attempts), attempts).await {
            Ok(reachable) => reachable,
            Err(e) if e.is_missing() => {
                warn!(
                    "{}; falling back to a TCP connect on port {}",
                    e, self.fallback_port
                );
                tcp_reachable(host, self.fallback_port, probe_timeout).await
            }
            Err(e) => {
                debug!("{}", e);
                false
            }
        }
    }

    async fn run_ping(&self, host: &str, deadline: Duration, attempts: u32) -> Result<bool, ToolError> {
        let mut child = Command::new(&self.program)
            .arg(COUNT_FLAG)
            .arg(attempts.to_string())
            .arg(host)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| ToolError::from_spawn(&self.program, e))?;

        let waited = timeout(deadline, child.wait()).await;
        match waited {
            Ok(Ok(status)) => {
                debug!("{} {} exited with {}", self.program, host, status);
                Ok(status.success())
            }
            Ok(Err(source)) => Err(ToolError::Io {
                program: self.program.clone(),
                source,
            }),
            Err(_elapsed) => {
                debug!("{} {} exceeded {:?}", self.program, host, deadline);
                let _ = child.kill().await;
                Ok(false)
            }
        }
    }
}

/// One bounded TCP connect attempt; any failure means unreachable.
pub async fn tcp_reachable(host: &str, port: u16, probe_timeout: Duration) -> bool {
    matches!(
        timeout(probe_timeout, TcpStream::connect((host, port))).await,
        Ok(Ok(_))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;
    use tokio::net::TcpListener;

    const MISSING_PROGRAM: &str = "netkit-test-no-such-ping";

    #[tokio::test]
    async fn missing_ping_falls_back_to_tcp_connect() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let pinger = Pinger::new(MISSING_PROGRAM, port);

        assert!(pinger.probe("127.0.0.1", Duration::from_millis(500), 1).await);
    }

    #[tokio::test]
    async fn fallback_against_closed_port_returns_false_within_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        let pinger = Pinger::new(MISSING_PROGRAM, port);

        let started = Instant::now();
        assert!(!pinger.probe("127.0.0.1", Duration::from_millis(200), 1).await);
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[tokio::test]
    async fn option_like_hosts_are_rejected() {
        let pinger = Pinger::default();
        assert!(!pinger.probe("-f", Duration::from_millis(100), 1).await);
        assert!(!pinger.probe("", Duration::from_millis(100), 1).await);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn non_zero_exit_means_unreachable() {
        let pinger = Pinger::new("false", FALLBACK_PORT);
        assert!(!pinger.probe("127.0.0.1", Duration::from_secs(1), 1).await);
    }

    #[tokio::test]
    #[ignore]
    async fn system_ping_reaches_loopback() {
        let pinger = Pinger::default();
        assert!(pinger.probe("127.0.0.1", Duration::from_secs(3), 1).await);
    }
}
