use std::sync::OnceLock;

use mac_oui::Oui;
use netkit_common::network::mac::MacAddress;
use netkit_common::vendors::VendorRepository;
use tracing::warn;

static OUI_DB: OnceLock<Option<Oui>> = OnceLock::new();

/// Loads the bundled OUI database on first use. A load failure is logged
/// once and disables lookups for the rest of the session.
fn get_oui_db() -> Option<&'static Oui> {
    OUI_DB
        .get_or_init(|| match Oui::default() {
            Ok(db) => Some(db),
            Err(e) => {
                warn!("Vendor lookups disabled, failed to load OUI database: {:?}", e);
                None
            }
        })
        .as_ref()
}

pub struct MacOuiRepo;

impl VendorRepository for MacOuiRepo {
    fn get_vendor(&self, mac: MacAddress) -> Option<String> {
        let db = get_oui_db()?;
        match db.lookup_by_mac(&mac.to_string()) {
            Ok(Some(entry)) => Some(entry.company_name.clone()),
            _ => None,
        }
    }
}
