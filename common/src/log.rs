//! Operator-facing log shorthand over [`tracing`].
//!
//! `success!` is logged at info level under the `netkit::success` target so
//! the binary's formatter can mark it differently from plain info events.

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "netkit::success", $($arg)*)
    };
}
