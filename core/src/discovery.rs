//! # Neighbor Discovery Service
//!
//! Lists the devices the host already knows on its local segment by reading
//! the address-resolution cache through `arp -a`, then enriches each entry
//! with a vendor name.

use std::process::Stdio;

use netkit_common::error::ToolError;
use netkit_common::network::device::Device;
use netkit_common::vendors::VendorRepository;
use tokio::process::Command;
use tracing::debug;

pub mod arp;

const ARP_PROGRAM: &str = "arp";

pub struct DiscoveryService {
    vendor_repo: Box<dyn VendorRepository + Send + Sync>,
    program: String,
}

impl DiscoveryService {
    pub fn new(vendor_repo: Box<dyn VendorRepository + Send + Sync>) -> Self {
        Self::with_program(vendor_repo, ARP_PROGRAM)
    }

    pub fn with_program(
        vendor_repo: Box<dyn VendorRepository + Send + Sync>,
        program: impl Into<String>,
    ) -> Self {
        Self {
            vendor_repo,
            program: program.into(),
        }
    }

    /// Reads the cache and returns its entries in the order the tool listed them.
    ///
    /// A missing or failing utility is an error; an empty cache is `Ok(vec![])`.
    pub async fn perform_discovery(&self) -> Result<Vec<Device>, ToolError> {
        let output: String = self.read_cache().await?;
        let mut devices: Vec<Device> = arp::parse_table(&output);
        debug!(
            "Parsed {} entries from {} lines of {} output",
            devices.len(),
            output.lines().count(),
            self.program
        );

        self.enrich_vendors(&mut devices);
        Ok(devices)
    }

    async fn read_cache(&self) -> Result<String, ToolError> {
        let output = Command::new(&self.program)
            .arg("-a")
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| ToolError::from_spawn(&self.program, e))?;

        if !output.status.success() {
            return Err(ToolError::Failed {
                program: self.program.clone(),
                status: output.status,
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn enrich_vendors(&self, devices: &mut [Device]) {
        for device in devices.iter_mut() {
            device.vendor = self.vendor_repo.get_vendor(device.mac);
        }
    }
}
