use std::time::Duration;

pub const DEFAULT_CONCURRENCY: usize = 100;
pub const DEFAULT_SCAN_TIMEOUT: Duration = Duration::from_millis(500);
pub const DEFAULT_PING_TIMEOUT: Duration = Duration::from_millis(3_000);
pub const DEFAULT_PING_COUNT: u32 = 1;
pub const DEFAULT_SAMPLE_DURATION: Duration = Duration::from_secs(1);
pub const DEFAULT_TRAFFIC_THRESHOLD: u64 = 1_000_000;

/// Session-wide settings, resolved once at startup and handed to every operation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Whether ANSI colors may be written to the terminal.
    ///
    /// Already resolved against terminal capabilities; presentation code
    /// never re-detects.
    pub color: bool,

    /// Maximum number of connect attempts in flight during a port scan.
    pub concurrency: usize,

    /// Per-port connect timeout.
    pub scan_timeout: Duration,

    /// Wall-clock bound for one echo request.
    pub ping_timeout: Duration,

    /// Byte count above which a traffic sample raises an alert.
    pub traffic_threshold: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: false,
            concurrency: DEFAULT_CONCURRENCY,
            scan_timeout: DEFAULT_SCAN_TIMEOUT,
            ping_timeout: DEFAULT_PING_TIMEOUT,
            traffic_threshold: DEFAULT_TRAFFIC_THRESHOLD,
        }
    }
}
