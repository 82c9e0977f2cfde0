use std::net::{IpAddr, SocketAddr};

use netkit_common::error::ScanError;
use tokio::net::lookup_host;
use tracing::debug;

/// Resolves `host` to a single address, preferring IPv4.
///
/// Literal addresses are returned without a lookup.
pub async fn lookup(host: &str) -> Result<IpAddr, ScanError> {
    if let Ok(ip) = host.parse::<IpAddr>() {
        return Ok(ip);
    }

    let resolution_failed = |reason: String| ScanError::Resolution {
        host: host.to_string(),
        reason,
    };

    let addrs: Vec<SocketAddr> = lookup_host((host, 0 /* dummy port */))
        .await
        .map_err(|e| resolution_failed(e.to_string()))?
        .collect();

    let ip = addrs
        .iter()
        .find(|addr| addr.is_ipv4())
        .or_else(|| addrs.first())
        .map(SocketAddr::ip)
        .ok_or_else(|| resolution_failed("no addresses returned".to_string()))?;

    debug!("Resolved `{}` to `{}`", host, ip);
    Ok(ip)
}
