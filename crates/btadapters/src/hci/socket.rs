//! HCI raw control socket
//!
//! This module wraps the raw `PF_BLUETOOTH` HCI socket used to issue node
//! enumeration ioctls. The [`ControlFacility`] and [`ControlHandle`] traits
//! are the seam the enumerator is written against, so it can be driven
//! without a kernel.

use crate::hci::constants::*;
use std::io;
use std::os::unix::io::{AsRawFd, RawFd};

/// An open handle that accepts device-control requests
///
/// The handle is released when dropped.
pub trait ControlHandle {
    /// Issue `request` with `buf` as the in/out argument
    fn control(&mut self, request: u64, buf: &mut [u8]) -> io::Result<()>;
}

/// Something that can open [`ControlHandle`]s
pub trait ControlFacility {
    type Handle: ControlHandle;

    fn open(&self) -> io::Result<Self::Handle>;
}

/// Opens raw HCI sockets on the running kernel
#[derive(Debug, Clone, Copy, Default)]
pub struct HciRawFacility;

impl ControlFacility for HciRawFacility {
    type Handle = HciRawSocket;

    fn open(&self) -> io::Result<HciRawSocket> {
        HciRawSocket::open()
    }
}

/// A raw, unbound HCI socket
#[derive(Debug)]
pub struct HciRawSocket {
    fd: RawFd,
}

impl HciRawSocket {
    /// Opens a new raw HCI socket
    ///
    /// Fails with `EAFNOSUPPORT`/`EPROTONOSUPPORT` when the kernel has no
    /// Bluetooth socket layer loaded.
    pub fn open() -> io::Result<Self> {
        let fd = unsafe { libc::socket(PF_BLUETOOTH, libc::SOCK_RAW, BLUETOOTH_PROTO_HCI) };

        if fd < 0 {
            return Err(io::Error::last_os_error());
        }

        Ok(HciRawSocket { fd })
    }
}

impl ControlHandle for HciRawSocket {
    fn control(&mut self, request: u64, buf: &mut [u8]) -> io::Result<()> {
        let result = unsafe { libc::ioctl(self.fd, request as _, buf.as_mut_ptr()) };

        if result < 0 {
            return Err(io::Error::last_os_error());
        }

        Ok(())
    }
}

impl AsRawFd for HciRawSocket {
    fn as_raw_fd(&self) -> RawFd {
        self.fd
    }
}

impl Drop for HciRawSocket {
    fn drop(&mut self) {
        unsafe {
            libc::close(self.fd);
        }
    }
}
