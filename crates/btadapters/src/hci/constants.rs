//! HCI raw socket constants
//!
//! Values mirror the FreeBSD netgraph Bluetooth headers
//! (`sys/socket.h`, `ng_btsocket.h`, `ng_hci.h`, `lib/libbluetooth/bluetooth.h`).

// Socket family and protocol
pub const AF_BLUETOOTH: i32 = 36;
pub const PF_BLUETOOTH: i32 = AF_BLUETOOTH;
pub const BLUETOOTH_PROTO_HCI: i32 = 134;

// Maximum number of nodes requested per HCIGETDEVLIST call
pub const HCI_MAX_DEV: u16 = 16;

// _IOWR('b', NGM_HCI_NODE_LIST_NAMES, ...)
pub const HCIGETDEVLIST: u64 = 0xC010_62C8;
// _IOWR('b', NGM_HCI_NODE_GET_CON_LIST, ...)
pub const HCIGETDEVINFO: u64 = 0xC010_626F;

// Fixed array sizes
pub const NG_NODESIZ: usize = 32;
pub const NG_HCI_FEATURES_SIZE: usize = 8;
pub const NG_HCI_BDADDR_SIZE: usize = 6;

// Node state bits
pub const NG_HCI_UNIT_CONNECTED: u32 = 0x01;
pub const NG_HCI_UNIT_INITED: u32 = 0x02;
pub const NG_HCI_UNIT_COMMAND_PENDING: u32 = 0x04;
