use std::time::Duration;

use colored::*;
use netkit_common::error::InputError;
use netkit_common::network::range::PortRange;
use netkit_common::success;
use netkit_core::scanner::{self, CancelToken, ScanReport, ScanRequest};

use crate::commands::Session;
use crate::terminal::colors;
use crate::terminal::print::Printer;
use crate::terminal::progress::ScanProgress;
use crate::terminal::prompt;

const SUMMARY_KEY_WIDTH: usize = 11;

pub async fn scan(session: &mut Session) -> anyhow::Result<()> {
    let raw_host: String = session.ask("Host or IP to scan: ").await?;
    let host: String = match prompt::parse_host(&raw_host) {
        Ok(host) => host,
        Err(_) => {
            session.printer.failure("No host entered");
            return Ok(());
        }
    };

    let Some(ports) = ask_range(session).await? else {
        return Ok(());
    };

    let request = ScanRequest::new(host, ports, session.config.scan_timeout, session.config.concurrency)?;
    run(&session.printer, &request).await
}

async fn ask_range(session: &mut Session) -> anyhow::Result<Option<PortRange>> {
    let raw_start: String = session.ask("Start port (e.g. 1): ").await?;
    let raw_end: String = session.ask("End port (e.g. 1024): ").await?;

    let bounds: Result<(u16, u16), InputError> =
        prompt::parse_port(&raw_start).and_then(|start| Ok((start, prompt::parse_port(&raw_end)?)));
    let (start, end) = match bounds {
        Ok(bounds) => bounds,
        Err(e) => {
            session.printer.failure(format!("Invalid input: {e}"));
            return Ok(None);
        }
    };

    match PortRange::new(start, end) {
        Ok(range) => Ok(Some(range)),
        Err(_) => {
            session.printer.failure("Invalid port range");
            Ok(None)
        }
    }
}

async fn run(printer: &Printer, request: &ScanRequest) -> anyhow::Result<()> {
    printer.header("port scan");
    printer.status(format!(
        "Scanning {} ports {} with up to {} workers, Ctrl-C stops early",
        printer.paint(&request.host, colors::IPV4_ADDR),
        request.ports,
        request.concurrency
    ));

    let cancel = CancelToken::new();
    let watcher = tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        }
    });

    let progress = ScanProgress::new(request.ports.len(), printer.color_enabled());
    let outcome = scanner::scan(request, &cancel, |port, result| {
        progress.advance();
        if result.is_open() {
            progress.println(format!(
                "{} {}",
                printer.bold(format!("{port:>5}"), colors::ACCENT),
                printer.paint("open", colors::SUCCESS)
            ));
        }
    })
    .await;

    progress.finish();
    watcher.abort();

    match outcome {
        Ok(report) => {
            print_report(printer, request, &report);
            Ok(())
        }
        Err(e) => {
            printer.failure(e.to_string());
            Ok(())
        }
    }
}

fn print_report(printer: &Printer, request: &ScanRequest, report: &ScanReport) {
    if report.cancelled {
        printer.notice("Scan cancelled, showing ports confirmed so far");
    }

    if report.open_ports.is_empty() {
        printer.status(format!("No open ports found on {}", request.host));
    } else {
        let list: String = report
            .open_ports
            .iter()
            .map(|port| port.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        printer.success(format!("Open ports on {}: {list}", request.host));
    }

    printer.fat_separator();
    printer.aligned_line("Address", printer.paint(report.address.to_string(), colors::IPV4_ADDR), SUMMARY_KEY_WIDTH);
    printer.aligned_line("Attempted", report.counts.total(), SUMMARY_KEY_WIDTH);
    printer.aligned_line("Skipped", report.skipped, SUMMARY_KEY_WIDTH);
    printer.aligned_line("Open", report.counts.open, SUMMARY_KEY_WIDTH);
    printer.aligned_line("Closed", report.counts.closed, SUMMARY_KEY_WIDTH);
    printer.aligned_line("Timed out", report.counts.timed_out, SUMMARY_KEY_WIDTH);
    printer.aligned_line("Unreachable", report.counts.unreachable, SUMMARY_KEY_WIDTH);
    printer.aligned_line("Elapsed", format_elapsed(report.elapsed), SUMMARY_KEY_WIDTH);

    let found: ColoredString = printer.bold(format!("{} open", report.open_ports.len()), colors::SUCCESS);
    success!("Scan of {} complete: {} in {}", request.host, found, format_elapsed(report.elapsed));
}

fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.2}s", elapsed.as_secs_f64())
}
