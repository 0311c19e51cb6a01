//! Error types for the btadapters library
//!
//! This module defines the error types raised while enumerating HCI nodes.

use thiserror::Error;

/// Errors that can occur while enumerating Bluetooth adapters over HCI
#[derive(Error, Debug)]
pub enum EnumerationError {
    #[error("Bluetooth HCI control socket unavailable: {0}")]
    FacilityUnavailable(#[source] std::io::Error),

    #[error("HCIGETDEVLIST failed: {0}")]
    ListCallFailed(#[source] std::io::Error),

    #[error("HCIGETDEVINFO failed for device {dev_id}: {source}")]
    InfoCallFailed {
        dev_id: u16,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode device name: {0}")]
    DecodeError(#[from] std::str::Utf8Error),

    #[error("Kernel reported {count} devices but only {max_slots} slots were provided")]
    ProtocolError { count: u16, max_slots: u16 },
}

impl EnumerationError {
    /// Whether this error means the kernel broke the layout contract, as
    /// opposed to an absent facility or device.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::DecodeError(_) | Self::ProtocolError { .. })
    }
}

/// Result type for enumeration operations
pub type Result<T> = std::result::Result<T, EnumerationError>;
