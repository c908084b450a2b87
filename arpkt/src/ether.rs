//! Ethernet protocol identifiers used by arp.

enum_sim! {
    /// An enum-like type for representing Ethertype in Ethernet frame.
    ///
    /// Arp reuses these values in its protocol type field.
    pub struct EtherType (u16) {
        /// Frame payload is Arp protocol.
        ARP =  0x0806,
        /// Frame payload is Ipv4 protocol.
        IPV4 = 0x0800,
        /// Frame payload is Ipv6 protocol.
        IPV6 = 0x86DD,
    }
}
