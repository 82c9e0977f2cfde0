use netkit_common::config::DEFAULT_PING_COUNT;
use netkit_core::ping::Pinger;

use crate::commands::Session;
use crate::terminal::colors;
use crate::terminal::print::Printer;
use crate::terminal::prompt::{self, Answer};

pub async fn ping(session: &mut Session) -> anyhow::Result<()> {
    let raw_host: String = session.ask("Host or IP to ping: ").await?;
    let host: String = match prompt::parse_host(&raw_host) {
        Ok(host) => host,
        Err(_) => {
            session.printer.failure("No host entered");
            return Ok(());
        }
    };

    let raw_count: String = session.ask(&format!("Number of pings to send (default {DEFAULT_PING_COUNT}): ")).await?;
    let count: u32 = ping_count(&session.printer, &raw_count);

    session.printer.header("ping");
    session.printer.status(format!(
        "Pinging {} ({} request{})",
        session.printer.paint(&host, colors::IPV4_ADDR),
        count,
        if count == 1 { "" } else { "s" }
    ));

    let pinger = Pinger::default();
    let reachable: bool = tokio::select! {
        up = pinger.probe(&host, session.config.ping_timeout, count) => up,
        _ = tokio::signal::ctrl_c() => {
            session.printer.notice("Ping cancelled");
            return Ok(());
        }
    };

    let state = if reachable {
        session.printer.bold("UP", colors::SUCCESS)
    } else {
        session.printer.bold("DOWN", colors::FAILURE)
    };
    session.printer.aligned_line(&host, state, host.len());

    if !reachable {
        session.printer.alert(&format!("Host {host} did not respond"));
    }
    Ok(())
}

fn ping_count(printer: &Printer, raw: &str) -> u32 {
    match prompt::parse_count(raw) {
        Answer::Given(n) => n,
        Answer::Empty => DEFAULT_PING_COUNT,
        Answer::Invalid => {
            printer.notice(format!("Invalid number, using {DEFAULT_PING_COUNT}"));
            DEFAULT_PING_COUNT
        }
    }
}
