//! In-memory stand-in for the kernel side of the HCI node ioctls

use crate::adapter::AdapterRecord;
use crate::hci::codec::*;
use crate::hci::constants::*;
use crate::hci::socket::{ControlFacility, ControlHandle};
use byteorder::{ByteOrder, NativeEndian};
use std::cell::{Cell, RefCell};
use std::io;
use std::rc::Rc;

/// Write every field of `record` into an HCIGETDEVINFO buffer, as the kernel would
///
/// `record.dev_id` has no place in the buffer and is not written.
pub fn fill_device_info(buf: &mut [u8], record: &AdapterRecord) {
    write_raw_name(buf, record.name.as_bytes());
    buf[DEV_INFO_BDADDR_OFFSET..DEV_INFO_BDADDR_OFFSET + NG_HCI_BDADDR_SIZE]
        .copy_from_slice(&record.address.bytes);
    NativeEndian::write_u32(&mut buf[DEV_INFO_STATE_OFFSET..], record.state.bits());
    buf[DEV_INFO_FEATURES_OFFSET..DEV_INFO_FEATURES_OFFSET + NG_HCI_FEATURES_SIZE]
        .copy_from_slice(&record.features);

    for (offset, value) in [
        (DEV_INFO_PACKET_TYPE_OFFSET, record.packet_type_info),
        (DEV_INFO_LINK_POLICY_OFFSET, record.link_policy_info),
        (DEV_INFO_ROLE_SWITCH_OFFSET, record.role_switch_info),
        (DEV_INFO_ACL_SIZE_OFFSET, record.acl_size),
        (DEV_INFO_ACL_PKTS_OFFSET, record.acl_pkts),
        (DEV_INFO_SCO_SIZE_OFFSET, record.sco_size),
        (DEV_INFO_SCO_PKTS_OFFSET, record.sco_pkts),
    ] {
        NativeEndian::write_u16(&mut buf[offset..], value);
    }

    let stats = &record.stats;
    NativeEndian::write_u32_into(
        &[
            stats.cmd_sent,
            stats.evt_recv,
            stats.acl_recv,
            stats.acl_sent,
            stats.sco_recv,
            stats.sco_sent,
            stats.bytes_recv,
            stats.bytes_sent,
        ],
        &mut buf[DEV_INFO_STATS_OFFSET..DEV_INFO_STATS_OFFSET + DEV_STATS_SIZE],
    );
}

/// Overwrite the name field with `raw`, NUL padded
pub fn write_raw_name(buf: &mut [u8], raw: &[u8]) {
    let field = &mut buf[DEV_INFO_NAME_OFFSET..DEV_INFO_NAME_OFFSET + NG_NODESIZ];
    field.fill(0);
    let len = raw.len().min(NG_NODESIZ);
    field[..len].copy_from_slice(&raw[..len]);
}

/// What the scripted kernel knows and how it misbehaves
#[derive(Debug, Default)]
pub struct Script {
    pub open_error: Option<io::ErrorKind>,
    pub list_error: Option<io::ErrorKind>,
    /// Count written to `dev_num` instead of the number of nodes
    pub reported_count: Option<u16>,
    pub nodes: Vec<AdapterRecord>,
    /// Nodes whose HCIGETDEVINFO fails without touching the buffer
    pub failing_info: Vec<u16>,
    /// Raw name bytes to report instead of the node's name
    pub raw_names: Vec<(u16, Vec<u8>)>,
}

/// Everything the handles were asked to do
#[derive(Debug, Default)]
pub struct CallLog {
    pub opened: Cell<usize>,
    pub released: Cell<usize>,
    pub list_slots: RefCell<Vec<usize>>,
    pub info_requests: RefCell<Vec<u16>>,
}

pub struct ScriptedFacility {
    script: Rc<Script>,
    pub log: Rc<CallLog>,
}

impl ScriptedFacility {
    pub fn new(script: Script) -> Self {
        Self {
            script: Rc::new(script),
            log: Rc::new(CallLog::default()),
        }
    }
}

impl ControlFacility for ScriptedFacility {
    type Handle = ScriptedHandle;

    fn open(&self) -> io::Result<ScriptedHandle> {
        if let Some(kind) = self.script.open_error {
            return Err(kind.into());
        }

        self.log.opened.set(self.log.opened.get() + 1);
        Ok(ScriptedHandle {
            script: Rc::clone(&self.script),
            log: Rc::clone(&self.log),
            info_calls: 0,
        })
    }
}

/// A scripted control handle
///
/// HCIGETDEVINFO buffers carry no identifier, so the n-th info call on a
/// handle is answered for the n-th listed node.
pub struct ScriptedHandle {
    script: Rc<Script>,
    log: Rc<CallLog>,
    info_calls: usize,
}

impl ScriptedHandle {
    fn list(&self, buf: &mut [u8]) -> io::Result<()> {
        if let Some(kind) = self.script.list_error {
            return Err(kind.into());
        }

        let slots = (buf.len() - DEV_LIST_REQ_OFFSET) / DEV_REQ_SIZE;
        self.log.list_slots.borrow_mut().push(slots);

        let count = self
            .script
            .reported_count
            .unwrap_or(self.script.nodes.len() as u16);
        NativeEndian::write_u16(&mut buf[DEV_LIST_NUM_OFFSET..], count);

        for (i, node) in self.script.nodes.iter().take(slots).enumerate() {
            let slot = DEV_LIST_REQ_OFFSET + i * DEV_REQ_SIZE;
            NativeEndian::write_u16(&mut buf[slot + DEV_REQ_ID_OFFSET..], node.dev_id);
            NativeEndian::write_u32(&mut buf[slot + DEV_REQ_OPT_OFFSET..], 0);
        }

        Ok(())
    }

    fn info(&mut self, buf: &mut [u8]) -> io::Result<()> {
        let index = self.info_calls;
        self.info_calls += 1;

        let node = self
            .script
            .nodes
            .get(index)
            .ok_or(io::ErrorKind::NotFound)?;
        let dev_id = node.dev_id;
        self.log.info_requests.borrow_mut().push(dev_id);

        if self.script.failing_info.contains(&dev_id) {
            return Err(io::ErrorKind::Other.into());
        }

        fill_device_info(buf, node);

        if let Some((_, raw)) = self.script.raw_names.iter().find(|(id, _)| *id == dev_id) {
            write_raw_name(buf, raw);
        }

        Ok(())
    }
}

impl ControlHandle for ScriptedHandle {
    fn control(&mut self, request: u64, buf: &mut [u8]) -> io::Result<()> {
        match request {
            HCIGETDEVLIST => self.list(buf),
            HCIGETDEVINFO => self.info(buf),
            _ => Err(io::ErrorKind::InvalidInput.into()),
        }
    }
}

impl Drop for ScriptedHandle {
    fn drop(&mut self) {
        self.log.released.set(self.log.released.get() + 1);
    }
}
