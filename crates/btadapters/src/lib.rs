//! btadapters - Bluetooth adapter discovery over HCI raw sockets
//!
//! This library enumerates the Bluetooth adapters attached to a FreeBSD host
//! through the netgraph HCI raw socket ioctls and turns the kernel's binary
//! node records into plain Rust values.
//!
//! Enumeration is best effort: [`HciEnumerator::enumerate_adapters`] always
//! returns a (possibly empty) [`AdapterMap`] and logs why nodes are missing.

pub mod adapter;
pub mod config;
pub mod error;
pub mod hci;
pub mod platform;

// Re-export common types for convenience
pub use adapter::{AdapterMap, AdapterRecord, BdAddr, DeviceStats, NodeState};
pub use config::EnumeratorConfig;
pub use error::EnumerationError;
pub use hci::{ControlFacility, ControlHandle, HciEnumerator, HciRawFacility, HciRawSocket};
pub use platform::{select_enumerator, Platform};

/// Take one snapshot of the adapters visible through HCI raw sockets
///
/// Only FreeBSD enumerates adapters this way. On any other host no socket
/// is opened and the map is empty.
pub fn get_adapters_from_hci() -> AdapterMap {
    adapters_from_hci_on(Platform::current())
}

fn adapters_from_hci_on(platform: Platform) -> AdapterMap {
    match select_enumerator(platform, EnumeratorConfig::default()) {
        Some(enumerator) => enumerator.enumerate_adapters(),
        None => {
            log::debug!("{} adapters are not enumerated through HCI raw sockets", platform);
            AdapterMap::new()
        }
    }
}
