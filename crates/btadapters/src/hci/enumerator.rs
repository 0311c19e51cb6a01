//! HCI node enumeration
//!
//! Runs the HCIGETDEVLIST / HCIGETDEVINFO exchange on a freshly opened
//! control handle and collects one [`AdapterRecord`] per node. The handle
//! is owned by a single pass and dropped on every exit path.

use crate::adapter::AdapterMap;
use crate::config::EnumeratorConfig;
use crate::error::{EnumerationError, Result};
use crate::hci::codec::*;
use crate::hci::constants::*;
use crate::hci::socket::{ControlFacility, ControlHandle, HciRawFacility};
use log::{debug, error, trace, warn};

/// Enumerates Bluetooth adapters through HCI node ioctls
#[derive(Debug, Clone, Default)]
pub struct HciEnumerator<F = HciRawFacility> {
    facility: F,
    config: EnumeratorConfig,
}

impl HciEnumerator<HciRawFacility> {
    /// Enumerator backed by the kernel's raw HCI sockets
    pub fn new() -> Self {
        Self::with_config(EnumeratorConfig::default())
    }

    pub fn with_config(config: EnumeratorConfig) -> Self {
        Self {
            facility: HciRawFacility,
            config,
        }
    }
}

impl<F: ControlFacility> HciEnumerator<F> {
    /// Enumerator issuing its control calls through `facility`
    pub fn with_facility(facility: F, config: EnumeratorConfig) -> Self {
        Self { facility, config }
    }

    pub fn config(&self) -> &EnumeratorConfig {
        &self.config
    }

    pub fn facility(&self) -> &F {
        &self.facility
    }

    /// Take a best-effort snapshot of the attached adapters.
    ///
    /// Never fails: a missing Bluetooth stack or a failed list call yields an
    /// empty map, and a layout violation part way through keeps whatever was
    /// collected before it. The reason is logged.
    pub fn enumerate_adapters(&self) -> AdapterMap {
        let mut adapters = AdapterMap::new();

        match self.collect(&mut adapters) {
            Ok(()) => {}
            Err(e) if e.is_contract_violation() => {
                error!("Unexpected error while getting HCI devices: {}", e)
            }
            Err(e) => debug!("Error while getting HCI devices: {}", e),
        }

        adapters
    }

    /// Like [`enumerate_adapters`](Self::enumerate_adapters), but report why
    /// the pass stopped.
    ///
    /// A failed HCIGETDEVINFO for one node is still not an error here; that
    /// node is kept with whatever the kernel left in the buffer.
    pub fn try_enumerate(&self) -> Result<AdapterMap> {
        let mut adapters = AdapterMap::new();
        self.collect(&mut adapters)?;
        Ok(adapters)
    }

    fn collect(&self, adapters: &mut AdapterMap) -> Result<()> {
        let mut handle = self
            .facility
            .open()
            .map_err(EnumerationError::FacilityUnavailable)?;

        let mut list = encode_device_list_request(self.config.slot_count());
        handle
            .control(HCIGETDEVLIST, list.as_mut_bytes())
            .map_err(EnumerationError::ListCallFailed)?;

        let dev_ids = decode_device_list_response(&list)?;
        trace!("HCIGETDEVLIST returned {} node(s): {:?}", dev_ids.len(), dev_ids);

        for dev_id in dev_ids {
            let mut info = encode_device_info_request(dev_id);

            // The buffer is decoded even when the call fails.
            if let Err(source) = handle.control(HCIGETDEVINFO, info.as_mut_bytes()) {
                warn!("{}", EnumerationError::InfoCallFailed { dev_id, source });
            }

            let record = decode_device_info_response(&info)?;
            trace!("Node {}: {} ({})", dev_id, record.name, record.address);
            adapters.insert(dev_id, record);
        }

        Ok(())
    }
}
