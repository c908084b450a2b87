use core::fmt;
use std::net::Ipv4Addr;

byte_addr! {
    /// A link-layer address carried in the sender/target hardware address
    /// fields of an arp packet.
    ///
    /// The length is decided at runtime by the packet's hardware address
    /// length field, so a 6-byte Ethernet address is only the common case.
    pub struct HardwareAddr;
}

byte_addr! {
    /// A network-layer address carried in the sender/target protocol address
    /// fields of an arp packet.
    pub struct ProtocolAddr;
}

fn write_hex(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            f.write_str(":")?;
        }
        write!(f, "{:02x}", b)?;
    }
    Ok(())
}

/// Read a 4-byte address as IPv4.
#[inline]
pub(crate) fn ipv4_from_bytes(bytes: &[u8]) -> Option<Ipv4Addr> {
    let octets: [u8; 4] = bytes.try_into().ok()?;
    Some(Ipv4Addr::from(octets))
}

impl HardwareAddr {
    /// Parse a string with the form 'Aa:0b:Cc:11:02:33' into `HardwareAddr`.
    ///
    /// Octets may also be separated by '-'. Any number of octets is accepted,
    /// each written as exactly two hex digits.
    pub fn parse_from<T: AsRef<str>>(s: T) -> Option<Self> {
        let s = s.as_ref();
        let sep = if s.contains(':') { ':' } else { '-' };

        let mut result = Vec::with_capacity((s.len() + 1) / 3);
        for part in s.split(sep) {
            let mut hex = part.chars();
            let high = hex.next()?.to_digit(16)?;
            let low = hex.next()?.to_digit(16)?;
            if hex.next().is_some() {
                return None;
            }
            result.push(((high << 4) | low) as u8);
        }
        Some(Self(result))
    }
}

impl fmt::Display for HardwareAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, &self.0)
    }
}

impl ProtocolAddr {
    /// Interpret the address as IPv4, if it is exactly 4 bytes long.
    pub fn to_ipv4(&self) -> Option<Ipv4Addr> {
        ipv4_from_bytes(&self.0)
    }
}

impl From<Ipv4Addr> for ProtocolAddr {
    #[inline]
    fn from(value: Ipv4Addr) -> Self {
        Self(value.octets().to_vec())
    }
}

impl fmt::Display for ProtocolAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_ipv4() {
            Some(ip) => write!(f, "{}", ip),
            None => write_hex(f, &self.0),
        }
    }
}
