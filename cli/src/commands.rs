pub mod discover;
pub mod ping;
pub mod scan;
pub mod traffic;

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use netkit_common::config::{self, Config};
use netkit_common::error::InputError;

use crate::terminal::colors;
use crate::terminal::input::{InputHandle, SessionEnd};
use crate::terminal::print::Printer;

#[derive(Parser)]
#[command(name = "netkit")]
#[command(version, about = "Interactive network diagnostics: ping, port scan, traffic and neighbors.")]
pub struct CommandLine {
    /// When to use ANSI colors
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Raise diagnostic log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Maximum connect attempts in flight during a port scan
    #[arg(long, default_value_t = config::DEFAULT_CONCURRENCY as u64, value_parser = clap::value_parser!(u64).range(1..=10_000))]
    pub concurrency: u64,

    /// Per-port connect timeout in milliseconds
    #[arg(long, default_value_t = config::DEFAULT_SCAN_TIMEOUT.as_millis() as u64, value_parser = clap::value_parser!(u64).range(1..))]
    pub scan_timeout_ms: u64,

    /// Timeout for one echo request in milliseconds
    #[arg(long, default_value_t = config::DEFAULT_PING_TIMEOUT.as_millis() as u64, value_parser = clap::value_parser!(u64).range(1..))]
    pub ping_timeout_ms: u64,

    /// Bytes in either direction above which a traffic sample raises an alert
    #[arg(long, default_value_t = config::DEFAULT_TRAFFIC_THRESHOLD)]
    pub traffic_threshold: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        let color: bool = match self.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => colors::detect(),
        };
        Config {
            color,
            concurrency: self.concurrency as usize,
            scan_timeout: Duration::from_millis(self.scan_timeout_ms),
            ping_timeout: Duration::from_millis(self.ping_timeout_ms),
            traffic_threshold: self.traffic_threshold,
        }
    }
}

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Ping,
    Scan,
    Traffic,
    Discover,
    Exit,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::Ping,
        Operation::Scan,
        Operation::Traffic,
        Operation::Discover,
        Operation::Exit,
    ];

    pub fn key(self) -> char {
        match self {
            Operation::Ping => '1',
            Operation::Scan => '2',
            Operation::Traffic => '3',
            Operation::Discover => '4',
            Operation::Exit => '5',
        }
    }

    fn name(self) -> &'static str {
        match self {
            Operation::Ping => "ping",
            Operation::Scan => "scan",
            Operation::Traffic => "traffic",
            Operation::Discover => "discover",
            Operation::Exit => "exit",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Operation::Ping => "Ping a host",
            Operation::Scan => "Scan a TCP port range",
            Operation::Traffic => "Sample network traffic",
            Operation::Discover => "Discover local devices (ARP)",
            Operation::Exit => "Exit",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let choice: String = s.trim().to_ascii_lowercase();
        Operation::ALL
            .into_iter()
            .find(|op| choice == op.key().to_string() || choice == op.name())
            .ok_or(InputError::InvalidChoice(s.trim().to_string()))
    }
}

/// Everything an operation needs from the running session.
pub struct Session {
    pub config: Config,
    pub printer: Printer,
    pub input: InputHandle,
}

impl Session {
    pub fn new(config: Config, input: InputHandle) -> Self {
        let printer = Printer::new(config.color);
        Self {
            config,
            printer,
            input,
        }
    }

    /// Shows `text` and reads one line of operator input.
    pub async fn ask(&mut self, text: &str) -> Result<String, SessionEnd> {
        self.printer.prompt(text);
        self.input.next_line().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_accepts_digits_and_names() {
        assert_eq!("1".parse::<Operation>(), Ok(Operation::Ping));
        assert_eq!(" 2 ".parse::<Operation>(), Ok(Operation::Scan));
        assert_eq!("Traffic".parse::<Operation>(), Ok(Operation::Traffic));
        assert_eq!("discover".parse::<Operation>(), Ok(Operation::Discover));
        assert_eq!("5".parse::<Operation>(), Ok(Operation::Exit));
    }

    #[test]
    fn unknown_choice_is_rejected() {
        for raw in ["", "0", "6", "12", "pong"] {
            assert_eq!(
                raw.parse::<Operation>(),
                Err(InputError::InvalidChoice(raw.to_string()))
            );
        }
    }

    #[test]
    fn menu_keys_are_unique_and_ordered() {
        let keys: String = Operation::ALL.iter().map(|op| op.key()).collect();
        assert_eq!(keys, "12345");
    }

    #[test]
    fn flags_resolve_into_config() {
        let cli = CommandLine::parse_from([
            "netkit",
            "--color",
            "never",
            "--concurrency",
            "8",
            "--scan-timeout-ms",
            "250",
            "-vv",
        ]);
        let cfg = cli.to_config();
        assert!(!cfg.color);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cfg.concurrency, 8);
        assert_eq!(cfg.scan_timeout, Duration::from_millis(250));
        assert_eq!(cfg.ping_timeout, config::DEFAULT_PING_TIMEOUT);
        assert_eq!(cfg.traffic_threshold, config::DEFAULT_TRAFFIC_THRESHOLD);
    }

    #[test]
    fn zero_concurrency_is_refused_at_startup() {
        assert!(CommandLine::try_parse_from(["netkit", "--concurrency", "0"]).is_err());
    }

    #[tokio::test]
    async fn session_reads_scripted_answers() {
        let mut session = Session::new(Config::default(), InputHandle::scripted(&["4"]));
        assert_eq!(session.ask("Choice (1-5): ").await.as_deref(), Ok("4"));
        assert_eq!(session.ask("Choice (1-5): ").await, Err(SessionEnd::Closed));
    }
}
