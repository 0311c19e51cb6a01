//! Normalized adapter records
//!
//! These are the platform-independent values handed to whatever keeps track
//! of adapters over time. Nothing here borrows from the kernel buffers.

use crate::hci::constants::*;
use bitflags::bitflags;
use std::collections::BTreeMap;
use std::fmt;

/// Adapters keyed by HCI device identifier
pub type AdapterMap = BTreeMap<u16, AdapterRecord>;

/// A Bluetooth device address, stored in wire (little-endian) order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BdAddr {
    pub bytes: [u8; NG_HCI_BDADDR_SIZE],
}

impl BdAddr {
    pub fn new(bytes: [u8; NG_HCI_BDADDR_SIZE]) -> Self {
        Self { bytes }
    }

    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        let bytes = slice.get(..NG_HCI_BDADDR_SIZE)?.try_into().ok()?;
        Some(Self { bytes })
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// True for the all-zero address a node reports before it is initialized
    pub fn is_any(&self) -> bool {
        self.bytes == [0; NG_HCI_BDADDR_SIZE]
    }
}

impl fmt::Display for BdAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            self.bytes[5],
            self.bytes[4],
            self.bytes[3],
            self.bytes[2],
            self.bytes[1],
            self.bytes[0]
        )
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for BdAddr {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

bitflags! {
    /// HCI node state bits
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct NodeState: u32 {
        const CONNECTED = NG_HCI_UNIT_CONNECTED;
        const INITED = NG_HCI_UNIT_INITED;
        const READY = NG_HCI_UNIT_CONNECTED | NG_HCI_UNIT_INITED;
        const COMMAND_PENDING = NG_HCI_UNIT_COMMAND_PENDING;

        // Bits the kernel may set that we don't name
        const _ = !0;
    }
}

impl NodeState {
    pub fn is_ready(&self) -> bool {
        self.contains(Self::READY)
    }
}

/// Traffic counters kept by the HCI node since it was attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DeviceStats {
    pub cmd_sent: u32,
    pub evt_recv: u32,
    pub acl_recv: u32,
    pub acl_sent: u32,
    pub sco_recv: u32,
    pub sco_sent: u32,
    pub bytes_recv: u32,
    pub bytes_sent: u32,
}

/// One Bluetooth adapter as reported by HCIGETDEVINFO
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AdapterRecord {
    pub dev_id: u16,
    /// Node name, e.g. `ubt0hci`
    pub name: String,
    pub address: BdAddr,
    pub state: NodeState,
    /// LMP feature mask as returned by the controller
    pub features: [u8; NG_HCI_FEATURES_SIZE],
    pub packet_type_info: u16,
    pub link_policy_info: u16,
    pub role_switch_info: u16,
    pub acl_size: u16,
    pub acl_pkts: u16,
    pub sco_size: u16,
    pub sco_pkts: u16,
    pub stats: DeviceStats,
}

impl AdapterRecord {
    /// Features as a hex string, lowest byte first
    pub fn features_hex(&self) -> String {
        hex::encode(self.features)
    }

    /// Test a single LMP feature bit (`page` byte, `bit` within it)
    pub fn has_feature(&self, page: usize, bit: u8) -> bool {
        self.features
            .get(page)
            .is_some_and(|byte| bit < 8 && byte & (1 << bit) != 0)
    }
}
