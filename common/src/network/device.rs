use std::net::Ipv4Addr;

use crate::network::mac::MacAddress;

/// One entry of the local address-resolution cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    pub ip: Ipv4Addr,
    pub mac: MacAddress,
    pub vendor: Option<String>,
}

impl Device {
    pub fn new(ip: Ipv4Addr, mac: MacAddress) -> Self {
        Self {
            ip,
            mac,
            vendor: None,
        }
    }
}
