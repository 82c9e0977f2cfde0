use std::process::ExitStatus;

use thiserror::Error;

/// Preconditions that abort a scan before any port is probed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    #[error("invalid port range: start port {start} is greater than end port {end}")]
    InvalidRange { start: u16, end: u16 },
    #[error("concurrency must be at least 1")]
    InvalidConcurrency,
    #[error("timeout must be greater than zero")]
    InvalidTimeout,
    #[error("could not resolve host '{host}': {reason}")]
    Resolution { host: String, reason: String },
}

/// Operator input that could not be turned into a usable value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("no host entered")]
    EmptyHost,
    #[error("'{0}' is not a valid port number")]
    InvalidPort(String),
    #[error("'{0}' is not a menu choice")]
    InvalidChoice(String),
}

/// Failures of the external utilities the diagnostics shell out to.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("'{0}' command not found")]
    Missing(String),
    #[error("'{program}' exited with {status}")]
    Failed { program: String, status: ExitStatus },
    #[error("failed to run '{program}': {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl ToolError {
    /// Classifies a spawn failure, separating a missing binary from other I/O errors.
    pub fn from_spawn(program: &str, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => ToolError::Missing(program.to_string()),
            _ => ToolError::Io {
                program: program.to_string(),
                source,
            },
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, ToolError::Missing(_))
    }
}
