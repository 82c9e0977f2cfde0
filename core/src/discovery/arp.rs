//! Line matchers for `arp -a` output.
//!
//! Two shapes are recognized:
//!
//! * BSD / Linux: `router.lan (192.168.1.1) at 0:1a:2b:3c:4d:5e [ether] on en0`
//! * Windows: `  192.168.1.1           00-1a-2b-3c-4d-5e     dynamic`
//!
//! Anything else (headers, `<incomplete>` entries, blank lines) is skipped.

use std::net::Ipv4Addr;
use std::sync::LazyLock;

use netkit_common::network::device::Device;
use netkit_common::network::mac::MacAddress;
use regex::{Captures, Regex};

static UNIX_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\((?P<ip>\d{1,3}(?:\.\d{1,3}){3})\)\s+at\s+(?P<mac>(?:[0-9a-fA-F]{1,2}[:-]){5}[0-9a-fA-F]{1,2})\b",
    )
    .expect("unix arp pattern is valid")
});

static WINDOWS_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?P<ip>\d{1,3}(?:\.\d{1,3}){3})\s+(?P<mac>(?:[0-9a-fA-F]{1,2}-){5}[0-9a-fA-F]{1,2})\b",
    )
    .expect("windows arp pattern is valid")
});

/// Extracts every recognized entry, in the order the tool printed them.
pub fn parse_table(output: &str) -> Vec<Device> {
    output.lines().filter_map(parse_line).collect()
}

pub fn parse_line(line: &str) -> Option<Device> {
    match_unix(line).or_else(|| match_windows(line))
}

fn match_unix(line: &str) -> Option<Device> {
    UNIX_LINE.captures(line).and_then(to_device)
}

fn match_windows(line: &str) -> Option<Device> {
    WINDOWS_LINE.captures(line).and_then(to_device)
}

fn to_device(caps: Captures<'_>) -> Option<Device> {
    let ip: Ipv4Addr = caps.name("ip")?.as_str().parse().ok()?;
    let mac: MacAddress = caps.name("mac")?.as_str().parse().ok()?;
    Some(Device::new(ip, mac))
}
