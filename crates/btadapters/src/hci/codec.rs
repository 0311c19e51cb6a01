//! HCI ioctl request/response layout
//!
//! This module is the only place that knows where fields live inside the
//! buffers exchanged with the kernel. Structures follow C layout rules for
//! the host ABI: native byte order, each field aligned to its own width.
//!
//! ```text
//! hci_dev_req        dev_id:u16 | pad:2 | dev_opt:u32                  (8)
//! hci_dev_list_req   dev_num:u16 | pad:2 | hci_dev_req[n]              (4 + 8n)
//! hci_dev_info       devname[32] | bdaddr[6] | pad:2 | state:u32
//!                    | features[8] | packet_type | link_policy | role_switch
//!                    | acl_size | acl_pkts | sco_size | sco_pkts | pad:2
//!                    | stat: 8 x u32                                   (100)
//! ```
//!
//! `hci_dev_info` has no identifier field. The device a request is for
//! travels beside the buffer in [`DeviceInfoBuffer`], never inside it.

use crate::adapter::{AdapterRecord, BdAddr, DeviceStats, NodeState};
use crate::error::{EnumerationError, Result};
use crate::hci::constants::*;
use byteorder::{ByteOrder, NativeEndian};

// hci_dev_req
pub const DEV_REQ_SIZE: usize = 8;
pub const DEV_REQ_ID_OFFSET: usize = 0;
pub const DEV_REQ_OPT_OFFSET: usize = 4;

// hci_dev_list_req
pub const DEV_LIST_NUM_OFFSET: usize = 0;
pub const DEV_LIST_REQ_OFFSET: usize = 4;

// hci_dev_info
pub const DEV_INFO_NAME_OFFSET: usize = 0;
pub const DEV_INFO_BDADDR_OFFSET: usize = DEV_INFO_NAME_OFFSET + NG_NODESIZ;
// 2 bytes of padding at 38..40 align `state`
pub const DEV_INFO_STATE_OFFSET: usize = 40;
pub const DEV_INFO_FEATURES_OFFSET: usize = 44;
pub const DEV_INFO_PACKET_TYPE_OFFSET: usize = DEV_INFO_FEATURES_OFFSET + NG_HCI_FEATURES_SIZE;
pub const DEV_INFO_LINK_POLICY_OFFSET: usize = 54;
pub const DEV_INFO_ROLE_SWITCH_OFFSET: usize = 56;
pub const DEV_INFO_ACL_SIZE_OFFSET: usize = 58;
pub const DEV_INFO_ACL_PKTS_OFFSET: usize = 60;
pub const DEV_INFO_SCO_SIZE_OFFSET: usize = 62;
pub const DEV_INFO_SCO_PKTS_OFFSET: usize = 64;
pub const DEV_INFO_STATS_OFFSET: usize = 68;
pub const DEV_STATS_SIZE: usize = 8 * 4;
pub const DEV_INFO_SIZE: usize = DEV_INFO_STATS_OFFSET + DEV_STATS_SIZE;

/// Buffer for the HCIGETDEVLIST ioctl
#[derive(Debug, Clone)]
pub struct DeviceListBuffer {
    max_slots: u16,
    bytes: Vec<u8>,
}

impl DeviceListBuffer {
    /// Number of request slots the buffer was sized for
    pub fn max_slots(&self) -> u16 {
        self.max_slots
    }

    /// Current value of the `dev_num` counter
    pub fn dev_num(&self) -> u16 {
        NativeEndian::read_u16(&self.bytes[DEV_LIST_NUM_OFFSET..])
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Mutable view handed to the kernel
    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    fn slot(&self, index: usize) -> &[u8] {
        let start = DEV_LIST_REQ_OFFSET + index * DEV_REQ_SIZE;
        &self.bytes[start..start + DEV_REQ_SIZE]
    }

    /// Option bits the kernel returned for slot `index`
    pub fn dev_opt(&self, index: usize) -> Option<u32> {
        (index < self.max_slots as usize)
            .then(|| NativeEndian::read_u32(&self.slot(index)[DEV_REQ_OPT_OFFSET..]))
    }
}

/// Size in bytes of a device list request holding `max_slots` slots
pub fn device_list_request_size(max_slots: u16) -> usize {
    DEV_LIST_REQ_OFFSET + max_slots as usize * DEV_REQ_SIZE
}

/// Build an HCIGETDEVLIST request with room for `max_slots` devices
pub fn encode_device_list_request(max_slots: u16) -> DeviceListBuffer {
    let mut bytes = vec![0u8; device_list_request_size(max_slots)];
    NativeEndian::write_u16(&mut bytes[DEV_LIST_NUM_OFFSET..], max_slots);
    DeviceListBuffer { max_slots, bytes }
}

/// Read the device identifiers the kernel filled in, in slot order
pub fn decode_device_list_response(buffer: &DeviceListBuffer) -> Result<Vec<u16>> {
    let count = buffer.dev_num();
    if count > buffer.max_slots {
        return Err(EnumerationError::ProtocolError {
            count,
            max_slots: buffer.max_slots,
        });
    }

    Ok((0..count as usize)
        .map(|i| NativeEndian::read_u16(&buffer.slot(i)[DEV_REQ_ID_OFFSET..]))
        .collect())
}

/// Buffer for the HCIGETDEVINFO ioctl
#[derive(Debug, Clone)]
pub struct DeviceInfoBuffer {
    dev_id: u16,
    bytes: [u8; DEV_INFO_SIZE],
}

impl DeviceInfoBuffer {
    /// Device this request was built for
    pub fn dev_id(&self) -> u16 {
        self.dev_id
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Mutable view handed to the kernel
    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    fn u16_at(&self, offset: usize) -> u16 {
        NativeEndian::read_u16(&self.bytes[offset..])
    }
}

/// Build an HCIGETDEVINFO request for `dev_id`
pub fn encode_device_info_request(dev_id: u16) -> DeviceInfoBuffer {
    DeviceInfoBuffer {
        dev_id,
        bytes: [0u8; DEV_INFO_SIZE],
    }
}

/// Decode a (possibly partially) kernel-filled HCIGETDEVINFO buffer
pub fn decode_device_info_response(buffer: &DeviceInfoBuffer) -> Result<AdapterRecord> {
    let bytes = &buffer.bytes;

    let name =
        decode_node_name(&bytes[DEV_INFO_NAME_OFFSET..DEV_INFO_NAME_OFFSET + NG_NODESIZ])?;

    let mut addr = [0u8; NG_HCI_BDADDR_SIZE];
    addr.copy_from_slice(
        &bytes[DEV_INFO_BDADDR_OFFSET..DEV_INFO_BDADDR_OFFSET + NG_HCI_BDADDR_SIZE],
    );

    let mut features = [0u8; NG_HCI_FEATURES_SIZE];
    features.copy_from_slice(
        &bytes[DEV_INFO_FEATURES_OFFSET..DEV_INFO_FEATURES_OFFSET + NG_HCI_FEATURES_SIZE],
    );

    Ok(AdapterRecord {
        dev_id: buffer.dev_id(),
        name,
        address: BdAddr::new(addr),
        state: NodeState::from_bits_retain(NativeEndian::read_u32(
            &bytes[DEV_INFO_STATE_OFFSET..],
        )),
        features,
        packet_type_info: buffer.u16_at(DEV_INFO_PACKET_TYPE_OFFSET),
        link_policy_info: buffer.u16_at(DEV_INFO_LINK_POLICY_OFFSET),
        role_switch_info: buffer.u16_at(DEV_INFO_ROLE_SWITCH_OFFSET),
        acl_size: buffer.u16_at(DEV_INFO_ACL_SIZE_OFFSET),
        acl_pkts: buffer.u16_at(DEV_INFO_ACL_PKTS_OFFSET),
        sco_size: buffer.u16_at(DEV_INFO_SCO_SIZE_OFFSET),
        sco_pkts: buffer.u16_at(DEV_INFO_SCO_PKTS_OFFSET),
        stats: decode_stats(
            &bytes[DEV_INFO_STATS_OFFSET..DEV_INFO_STATS_OFFSET + DEV_STATS_SIZE],
        ),
    })
}

/// Decode a fixed-size node name: everything up to the first NUL, strict UTF-8
pub fn decode_node_name(raw: &[u8]) -> Result<String> {
    let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
    Ok(std::str::from_utf8(&raw[..end])?.to_owned())
}

/// Decode the embedded `hci_dev_stats` block
pub fn decode_stats(raw: &[u8]) -> DeviceStats {
    let mut counters = [0u32; DEV_STATS_SIZE / 4];
    NativeEndian::read_u32_into(&raw[..DEV_STATS_SIZE], &mut counters);
    let [cmd_sent, evt_recv, acl_recv, acl_sent, sco_recv, sco_sent, bytes_recv, bytes_sent] =
        counters;

    DeviceStats {
        cmd_sent,
        evt_recv,
        acl_recv,
        acl_sent,
        sco_recv,
        sco_sent,
        bytes_recv,
        bytes_sent,
    }
}
