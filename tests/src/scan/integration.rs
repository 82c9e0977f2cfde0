#![cfg(test)]
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use netkit_common::error::ScanError;
use netkit_common::network::range::PortRange;
use netkit_core::scanner::{self, CancelToken, ScanRequest};
use tokio::net::TcpListener;

const TIMEOUT: Duration = Duration::from_millis(500);

async fn listener() -> (TcpListener, u16) {
    let listener: TcpListener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap();
    let port: u16 = listener.local_addr().unwrap().port();
    (listener, port)
}

fn window(port: u16) -> PortRange {
    PortRange::new(port.saturating_sub(8), port.saturating_add(8)).unwrap()
}

/// A real listener on loopback must show up as open.
#[tokio::test]
async fn scan_finds_loopback_listener() {
    let (_listener, port) = listener().await;
    let ports: PortRange = window(port);
    let request = ScanRequest::new("127.0.0.1", ports, TIMEOUT, 4).unwrap();

    let mut reported: usize = 0;
    let report = scanner::scan(&request, &CancelToken::new(), |_, _| reported += 1)
        .await
        .expect("loopback scan failed");

    assert_eq!(report.address, IpAddr::V4(Ipv4Addr::LOCALHOST));
    assert!(report.open_ports.contains(&port), "listener port {port} not reported open");
    assert!(report.open_ports.windows(2).all(|w| w[0] < w[1]), "result not sorted and unique");
    assert!(report.open_ports.iter().all(|p| ports.contains(*p)));
    assert_eq!(reported, ports.len());
    assert_eq!(report.counts.total(), ports.len());
    assert!(!report.cancelled);
}

#[tokio::test]
async fn concurrency_does_not_change_the_result() {
    let (_first, a) = listener().await;
    let (_second, b) = listener().await;

    for owned in [a, b] {
        let serial = ScanRequest::new("127.0.0.1", window(owned), TIMEOUT, 1).unwrap();
        let wide = ScanRequest::new("127.0.0.1", window(owned), TIMEOUT, 500).unwrap();

        let serial = scanner::scan(&serial, &CancelToken::new(), |_, _| {}).await.unwrap();
        let wide = scanner::scan(&wide, &CancelToken::new(), |_, _| {}).await.unwrap();

        assert!(serial.open_ports.contains(&owned), "serial scan missed {owned}");
        assert!(wide.open_ports.contains(&owned), "wide scan missed {owned}");
        assert_eq!(serial.counts.total(), wide.counts.total());
    }
}

#[tokio::test]
async fn localhost_name_resolves_before_scanning() {
    let (_listener, port) = listener().await;
    let request = ScanRequest::new("localhost", PortRange::new(port, port).unwrap(), TIMEOUT, 1).unwrap();

    let report = scanner::scan(&request, &CancelToken::new(), |_, _| {}).await.unwrap();
    assert_eq!(report.open_ports, vec![port]);
}

#[tokio::test]
async fn unresolvable_host_is_not_an_empty_scan() {
    let request = ScanRequest::new("no-such-host.invalid", PortRange::new(1, 10).unwrap(), TIMEOUT, 2).unwrap();

    let mut attempts: usize = 0;
    let result = scanner::scan(&request, &CancelToken::new(), |_, _| attempts += 1).await;

    assert!(matches!(result, Err(ScanError::Resolution { .. })));
    assert_eq!(attempts, 0);
}

#[tokio::test]
async fn cancelled_scan_returns_without_probing() {
    let cancel = CancelToken::new();
    cancel.cancel();
    let request = ScanRequest::new("127.0.0.1", PortRange::new(1, 1024).unwrap(), TIMEOUT, 16).unwrap();

    let report = scanner::scan(&request, &cancel, |_, _| {}).await.unwrap();
    assert!(report.cancelled);
    assert!(report.open_ports.is_empty());
    assert_eq!(report.skipped, 1024);
}
