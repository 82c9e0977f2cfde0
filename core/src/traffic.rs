//! Byte-rate sampling from host-wide network counters.

use std::time::{Duration, Instant};

use sysinfo::{NetworkExt, NetworksExt, System, SystemExt};
use tracing::debug;

/// Cumulative bytes across all interfaces at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counters {
    pub sent: u64,
    pub received: u64,
}

/// Anything able to report cumulative byte counters.
///
/// `None` means the counters cannot be read on this host.
pub trait CounterSource {
    fn read(&mut self) -> Option<Counters>;
}

/// Counters read through `sysinfo`.
pub struct SystemCounters {
    system: System,
}

impl SystemCounters {
    pub fn new() -> Self {
        Self {
            system: System::new(),
        }
    }

    /// Whether this platform exposes network counters at all.
    pub fn is_supported() -> bool {
        System::IS_SUPPORTED
    }
}

impl Default for SystemCounters {
    fn default() -> Self {
        Self::new()
    }
}

impl CounterSource for SystemCounters {
    fn read(&mut self) -> Option<Counters> {
        if !Self::is_supported() {
            return None;
        }
        self.system.refresh_networks_list();

        let mut interfaces: usize = 0;
        let mut counters = Counters::default();
        for (_name, data) in self.system.networks().iter() {
            interfaces += 1;
            counters.sent = counters.sent.saturating_add(data.total_transmitted());
            counters.received = counters.received.saturating_add(data.total_received());
        }

        (interfaces > 0).then_some(counters)
    }
}

/// Result of one sampling window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrafficSample {
    /// Bytes moved during `interval`. Zero here means no traffic was observed.
    Measured {
        sent: u64,
        received: u64,
        interval: Duration,
    },
    /// No counter source; nothing was measured.
    Unavailable,
}

impl TrafficSample {
    /// `(sent, received)`, reading as zero when nothing could be measured.
    pub fn bytes(&self) -> (u64, u64) {
        match *self {
            TrafficSample::Measured { sent, received, .. } => (sent, received),
            TrafficSample::Unavailable => (0, 0),
        }
    }

    pub fn exceeds(&self, threshold: u64) -> bool {
        let (sent, received) = self.bytes();
        sent > threshold || received > threshold
    }
}

/// Reads `source`, waits `duration`, reads again and returns the difference.
///
/// A counter that went backwards (interface reset) reads as zero.
pub async fn sample<S: CounterSource>(source: &mut S, duration: Duration) -> TrafficSample {
    let Some(before) = source.read() else {
        return TrafficSample::Unavailable;
    };
    let started = Instant::now();
    tokio::time::sleep(duration).await;
    let Some(after) = source.read() else {
        return TrafficSample::Unavailable;
    };

    debug!("Traffic counters before {:?}, after {:?}", before, after);
    TrafficSample::Measured {
        sent: after.sent.saturating_sub(before.sent),
        received: after.received.saturating_sub(before.received),
        interval: started.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct Scripted(VecDeque<Option<Counters>>);

    impl CounterSource for Scripted {
        fn read(&mut self) -> Option<Counters> {
            self.0.pop_front().flatten()
        }
    }

    fn reading(sent: u64, received: u64) -> Option<Counters> {
        Some(Counters { sent, received })
    }

    #[tokio::test]
    async fn reports_delta_between_readings() {
        let mut source = Scripted(VecDeque::from([reading(100, 1_000), reading(350, 4_000)]));
        let sample = sample(&mut source, Duration::ZERO).await;
        assert_eq!(sample.bytes(), (250, 3_000));
        assert!(matches!(sample, TrafficSample::Measured { .. }));
    }

    #[tokio::test]
    async fn decreasing_counters_read_as_zero() {
        let mut source = Scripted(VecDeque::from([reading(5_000, 9_000), reading(10, 9_500)]));
        assert_eq!(sample(&mut source, Duration::ZERO).await.bytes(), (0, 500));
    }

    #[tokio::test]
    async fn missing_source_is_distinct_from_zero_traffic() {
        let mut missing = Scripted(VecDeque::from([None]));
        let unavailable = sample(&mut missing, Duration::ZERO).await;
        assert_eq!(unavailable, TrafficSample::Unavailable);
        assert_eq!(unavailable.bytes(), (0, 0));

        let mut idle = Scripted(VecDeque::from([reading(7, 7), reading(7, 7)]));
        let quiet = sample(&mut idle, Duration::ZERO).await;
        assert_eq!(quiet.bytes(), (0, 0));
        assert_ne!(quiet, TrafficSample::Unavailable);
    }

    #[tokio::test]
    async fn source_lost_between_readings_is_unavailable() {
        let mut source = Scripted(VecDeque::from([reading(1, 1), None]));
        assert_eq!(sample(&mut source, Duration::ZERO).await, TrafficSample::Unavailable);
    }

    #[test]
    fn threshold_applies_to_either_direction() {
        let sample = TrafficSample::Measured {
            sent: 10,
            received: 2_000_000,
            interval: Duration::from_secs(1),
        };
        assert!(sample.exceeds(1_000_000));
        assert!(!sample.exceeds(5_000_000));
        assert!(!TrafficSample::Unavailable.exceeds(0));
    }

    #[tokio::test]
    async fn system_counters_zero_duration_sample_does_not_underflow() {
        let mut source = SystemCounters::new();
        let sample = sample(&mut source, Duration::ZERO).await;
        if let TrafficSample::Measured { sent, received, .. } = sample {
            assert!(sent < u64::MAX && received < u64::MAX);
        }
    }
}
