//! Diagnostics behind the `netkit` shell: reachability probing, TCP connect
//! scanning, traffic sampling and neighbor discovery.

pub mod discovery;
pub mod network;
pub mod ping;
pub mod scanner;
pub mod traffic;
pub mod vendors;
