//! Bluetooth HCI node enumeration
//!
//! This module provides the raw HCI control socket, the layout of the node
//! ioctl buffers, and the enumerator that drives them.

pub mod codec;
pub mod constants;
pub mod enumerator;
pub mod socket;

#[cfg(test)]
pub(crate) mod testing;


pub use codec::{
    decode_device_info_response, decode_device_list_response, encode_device_info_request,
    encode_device_list_request, DeviceInfoBuffer, DeviceListBuffer,
};
pub use enumerator::HciEnumerator;
pub use socket::{ControlFacility, ControlHandle, HciRawFacility, HciRawSocket};
