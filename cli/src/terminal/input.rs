use std::io::{self, BufRead};
use std::thread;

use thiserror::Error;
use tokio::sync::mpsc;

/// The operator is done with the session.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    #[error("interrupted by user")]
    Interrupted,
    #[error("end of input")]
    Closed,
}

/// Line-oriented stdin reader that can be raced against Ctrl-C.
///
/// Stdin is read on a dedicated thread so a pending read never blocks the
/// runtime and never delays shutdown.
pub struct InputHandle {
    rx: mpsc::UnboundedReceiver<String>,
}

impl InputHandle {
    pub fn start() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        thread::spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else {
                    break;
                };
                if tx.send(line).is_err() {
                    break;
                }
            }
        });
        Self { rx }
    }

    /// Waits for the next line, or for the session to end.
    pub async fn next_line(&mut self) -> Result<String, SessionEnd> {
        tokio::select! {
            line = self.rx.recv() => line.ok_or(SessionEnd::Closed),
            _ = tokio::signal::ctrl_c() => Err(SessionEnd::Interrupted),
        }
    }
}

#[cfg(test)]
impl InputHandle {
    /// Handle fed from a fixed script instead of stdin.
    pub fn scripted(lines: &[&str]) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        for line in lines {
            let _ = tx.send(line.to_string());
        }
        Self { rx }
    }
}
