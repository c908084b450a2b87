//! Arp protocol.
//!
//! The wire format is an 8-byte fixed header followed by four variable-length
//! address fields, all big-endian:
//!
//! ```text
//! +-----------------+-----------------+
//! | hardware type   | protocol type   |  2 + 2 bytes
//! +--------+--------+-----------------+
//! | hlen H | plen L | operation       |  1 + 1 + 2 bytes
//! +--------+--------+-----------------+
//! | sender hardware address (H)       |
//! | sender protocol address (L)       |
//! | target hardware address (H)       |
//! | target protocol address (L)       |
//! +-----------------------------------+
//! ```

use core::fmt;

enum_sim! {
    /// Hardware type of the arp protocol.
    pub struct Hardware (u16) {
        /// The contained hardware address is Ethernet address.
        ETHERNET = 1,
        /// The contained hardware address is an IEEE 802 network address.
        IEEE802 = 6
    }
}

enum_sim! {
    /// Operation type of the arp protocol.
    ///
    /// Values other than the named ones are carried through unchanged.
    pub struct Operation (u16) {
        /// Arp request.
        REQUEST = 1,
        /// Arp response.
        REPLY = 2
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Operation::REQUEST => f.write_str("request"),
            Operation::REPLY => f.write_str("reply"),
            Operation(other) => write!(f, "unknown({})", other),
        }
    }
}

/// Byte length of the fixed part of the arp header.
pub const ARP_FIXED_HEADER_LEN: usize = 8;

/// Byte length of an arp packet carrying Ethernet and IPv4 addresses.
pub const ARP_ETHER_IPV4_LEN: usize = 28;

/// Total wire length of an arp packet with hardware address length `hlen`
/// and protocol address length `plen`.
#[inline]
pub const fn packet_len(hlen: u8, plen: u8) -> usize {
    ARP_FIXED_HEADER_LEN + 2 * (hlen as usize) + 2 * (plen as usize)
}

mod packet;
pub use packet::{Packet, MIN_HARDWARE_ADDR_LEN};

mod view;
pub use view::PacketView;
