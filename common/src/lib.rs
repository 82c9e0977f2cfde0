//! Shared models, configuration and error types for `netkit`.

pub mod config;
pub mod error;
pub mod log;
pub mod network;
pub mod vendors;
