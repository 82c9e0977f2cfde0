use crate::network::mac::MacAddress;

/// Maps a hardware address to the name of the organization that owns its prefix.
pub trait VendorRepository {
    fn get_vendor(&self, mac: MacAddress) -> Option<String>;
}
