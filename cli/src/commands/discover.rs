use std::time::{Duration, Instant};

use colored::*;
use netkit_common::network::device::Device;
use netkit_common::success;
use netkit_core::discovery::DiscoveryService;
use netkit_core::vendors::MacOuiRepo;

use crate::commands::Session;
use crate::terminal::colors;
use crate::terminal::print::Printer;

type Detail<'a> = (&'a str, ColoredString);

pub async fn discover(session: &mut Session) -> anyhow::Result<()> {
    session.printer.header("local devices");
    session.printer.status("Reading the ARP cache");

    let service = DiscoveryService::new(Box::new(MacOuiRepo));
    let start_time: Instant = Instant::now();
    let result = tokio::select! {
        result = service.perform_discovery() => result,
        _ = tokio::signal::ctrl_c() => {
            session.printer.notice("Discovery cancelled");
            return Ok(());
        }
    };

    match result {
        Ok(devices) => discovery_ends(&session.printer, &devices, start_time.elapsed()),
        Err(e) if e.is_missing() => {
            session.printer.notice(format!("Discovery unavailable: {e}"));
        }
        Err(e) => {
            session.printer.failure(format!("Discovery failed: {e}"));
        }
    }
    Ok(())
}

fn discovery_ends(printer: &Printer, devices: &[Device], total_time: Duration) {
    if devices.is_empty() {
        printer.status("No devices found in the ARP cache");
        return;
    }

    for (idx, device) in devices.iter().enumerate() {
        print_device_tree(printer, idx, device);
        if idx + 1 != devices.len() {
            printer.print("");
        }
    }

    print_summary(printer, devices.len(), total_time);
}

fn print_device_tree(printer: &Printer, idx: usize, device: &Device) {
    printer.tree_head(idx, &device.ip.to_string());
    let mut details: Vec<Detail> = vec![("MAC", printer.paint(device.mac.to_string(), colors::MAC_ADDR))];
    if let Some(vendor) = &device.vendor {
        details.push(("Vendor", printer.paint(vendor, colors::TEXT_DEFAULT)));
    }
    printer.as_tree_one_level(&details);
}

fn print_summary(printer: &Printer, count: usize, total_time: Duration) {
    let found: ColoredString = printer.bold(format!("{count} devices"), colors::SUCCESS);
    let total_time: ColoredString = printer.bold(format!("{:.2}s", total_time.as_secs_f64()), colors::ALERT);

    printer.fat_separator();
    printer.centerln(&format!("Discovery Complete: {found} listed in {total_time}"));
    success!("Discovery listed {} devices", count);
}
