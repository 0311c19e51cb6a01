//! Host platform detection
//!
//! Each platform discovers adapters through a different host API. Only the
//! FreeBSD raw HCI backend lives in this crate; the others are provided by
//! the caller.

use crate::config::EnumeratorConfig;
use crate::hci::HciEnumerator;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    MacOs,
    FreeBsd,
    Linux,
}

impl Platform {
    /// Map an OS name (as in `std::env::consts::OS` or `uname -s`) to a platform.
    ///
    /// Anything unrecognized is treated as Linux.
    pub fn from_os_name(os: &str) -> Self {
        match os.to_ascii_lowercase().as_str() {
            "windows" => Platform::Windows,
            "macos" | "darwin" => Platform::MacOs,
            "freebsd" => Platform::FreeBsd,
            _ => Platform::Linux,
        }
    }

    /// The platform this binary is running on
    pub fn current() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Whether adapters are enumerated through netgraph HCI raw sockets
    pub fn uses_hci_raw_sockets(self) -> bool {
        matches!(self, Platform::FreeBsd)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Windows => "Windows",
            Platform::MacOs => "macOS",
            Platform::FreeBsd => "FreeBSD",
            Platform::Linux => "Linux",
        };
        f.write_str(name)
    }
}

/// The HCI enumerator for `platform`, or `None` where another backend applies
pub fn select_enumerator(platform: Platform, config: EnumeratorConfig) -> Option<HciEnumerator> {
    platform
        .uses_hci_raw_sockets()
        .then(|| HciEnumerator::with_config(config))
}
