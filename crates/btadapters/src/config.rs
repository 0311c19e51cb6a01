//! Enumerator settings

use crate::hci::constants::HCI_MAX_DEV;

/// Settings for an HCI enumeration pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EnumeratorConfig {
    /// Device slots to request from HCIGETDEVLIST
    pub max_devices: u16,
}

impl Default for EnumeratorConfig {
    fn default() -> Self {
        Self {
            max_devices: HCI_MAX_DEV,
        }
    }
}

impl EnumeratorConfig {
    /// Slot count actually sent to the kernel, always within `1..=HCI_MAX_DEV`
    pub fn slot_count(&self) -> u16 {
        self.max_devices.clamp(1, HCI_MAX_DEV)
    }
}
