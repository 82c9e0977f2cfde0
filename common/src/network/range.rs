use std::fmt;
use std::ops::RangeInclusive;

use crate::error::ScanError;

/// An inclusive, non-empty range of TCP ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PortRange {
    start_port: u16,
    end_port: u16,
}

impl PortRange {
    /// Builds a range, rejecting `start_port > end_port`.
    pub fn new(start_port: u16, end_port: u16) -> Result<Self, ScanError> {
        if start_port > end_port {
            return Err(ScanError::InvalidRange {
                start: start_port,
                end: end_port,
            });
        }
        Ok(Self {
            start_port,
            end_port,
        })
    }

    pub fn start(&self) -> u16 {
        self.start_port
    }

    pub fn end(&self) -> u16 {
        self.end_port
    }

    /// Number of ports in the range. Never zero.
    pub fn len(&self) -> usize {
        usize::from(self.end_port - self.start_port) + 1
    }

    pub fn contains(&self, port: u16) -> bool {
        (self.start_port..=self.end_port).contains(&port)
    }

    pub fn to_iter(&self) -> RangeInclusive<u16> {
        self.start_port..=self.end_port
    }
}

impl fmt::Display for PortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start_port, self.end_port)
    }
}
