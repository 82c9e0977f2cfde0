#![cfg(test)]
use std::net::Ipv4Addr;
use std::time::{Duration, Instant};

use netkit_core::ping::{self, Pinger};
use tokio::net::TcpListener;

/// A host without ping installed still gets an answer through the TCP fallback.
#[tokio::test]
async fn fallback_reaches_loopback_listener() {
    let listener: TcpListener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap();
    let port: u16 = listener.local_addr().unwrap().port();
    let pinger = Pinger::new("netkit-test-no-such-ping", port);

    assert!(pinger.probe("127.0.0.1", Duration::from_secs(1), 1).await);
}

#[tokio::test]
async fn unreachable_answer_is_bounded_by_the_timeout() {
    let started = Instant::now();
    let up: bool = ping::tcp_reachable("192.0.2.1", 80, Duration::from_millis(300)).await;

    assert!(!up);
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
#[ignore = "needs the system ping binary"]
async fn system_ping_reaches_loopback() {
    assert!(Pinger::default().probe("127.0.0.1", Duration::from_secs(2), 1).await);
}
