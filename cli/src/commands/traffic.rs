use std::time::Duration;

use netkit_common::config::DEFAULT_SAMPLE_DURATION;
use netkit_core::traffic::{self, SystemCounters, TrafficSample};

use crate::commands::Session;
use crate::terminal::colors;
use crate::terminal::print::Printer;
use crate::terminal::prompt::{self, Answer};

const KEY_WIDTH: usize = 8;

pub async fn traffic(session: &mut Session) -> anyhow::Result<()> {
    if !SystemCounters::is_supported() {
        session
            .printer
            .notice("Network counters are not available on this system; nothing can be measured.");
        let answer: String = session.ask("Continue without measuring? (y/n): ").await?;
        if !prompt::is_yes(&answer) {
            return Ok(());
        }
    }

    let default_secs: u64 = DEFAULT_SAMPLE_DURATION.as_secs();
    let raw: String = session
        .ask(&format!("Duration in seconds to measure (default {default_secs}): "))
        .await?;
    let duration: Duration = sample_duration(&session.printer, &raw);

    session.printer.header("traffic");
    session
        .printer
        .status(format!("Measuring for {:.1}s, Ctrl-C stops early", duration.as_secs_f64()));

    let mut source = SystemCounters::new();
    let sample: TrafficSample = tokio::select! {
        sample = traffic::sample(&mut source, duration) => sample,
        _ = tokio::signal::ctrl_c() => {
            session.printer.notice("Measurement cancelled");
            return Ok(());
        }
    };

    print_sample(&session.printer, &sample, session.config.traffic_threshold);
    Ok(())
}

fn sample_duration(printer: &Printer, raw: &str) -> Duration {
    match prompt::parse_duration(raw) {
        Answer::Given(d) => d,
        Answer::Empty => DEFAULT_SAMPLE_DURATION,
        Answer::Invalid => {
            printer.notice(format!(
                "Invalid duration, using {} second",
                DEFAULT_SAMPLE_DURATION.as_secs()
            ));
            DEFAULT_SAMPLE_DURATION
        }
    }
}

fn print_sample(printer: &Printer, sample: &TrafficSample, threshold: u64) {
    match *sample {
        TrafficSample::Unavailable => {
            printer.notice("No traffic data available (counter source missing)");
        }
        TrafficSample::Measured {
            sent,
            received,
            interval,
        } => {
            printer.aligned_line("Sent", format!("{sent} bytes"), KEY_WIDTH);
            printer.aligned_line("Received", format!("{received} bytes"), KEY_WIDTH);
            printer.aligned_line("Interval", format!("{:.2}s", interval.as_secs_f64()), KEY_WIDTH);
            if sent == 0 && received == 0 {
                printer.status(printer.paint("No traffic observed", colors::TEXT_DEFAULT).to_string());
            }
            if sample.exceeds(threshold) {
                printer.alert(&format!("Traffic above {threshold} bytes in one direction"));
            }
        }
    }
}
