use core::fmt;
use std::io::IoSlice;
use std::net::{IpAddr, Ipv4Addr};

use bytes::{Buf, BufMut};

use crate::ether::EtherType;
use crate::network_rw::write_2_bytes;
use crate::{Error, HardwareAddr, ProtocolAddr, Result};

use super::{packet_len, Hardware, Operation, PacketView, ARP_FIXED_HEADER_LEN};

/// The shortest hardware address accepted by [`Packet::new`].
pub const MIN_HARDWARE_ADDR_LEN: usize = 6;

/// An owned arp packet, as described in RFC 826.
///
/// A packet built by [`Packet::new`] always satisfies the length invariants:
/// both hardware addresses are `hardware_addr_length` bytes long and both
/// protocol addresses are `ip_length` bytes long. The fields are public, so a
/// hand-built packet may break them; the serializer then trusts the length
/// fields and truncates or zero-fills the address bytes to fit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Packet {
    /// IANA hardware type.
    pub hardware_type: Hardware,
    /// The internetwork protocol the addresses belong to, usually IPv4.
    pub protocol_type: EtherType,
    /// Length of each hardware address.
    pub hardware_addr_length: u8,
    /// Length of each protocol address.
    pub ip_length: u8,
    /// Request, reply, or any other value found on the wire.
    pub operation: Operation,
    /// Hardware address of the sender.
    pub sender_hardware_addr: HardwareAddr,
    /// Protocol address of the sender.
    pub sender_ip: ProtocolAddr,
    /// Hardware address of the target.
    pub target_hardware_addr: HardwareAddr,
    /// Protocol address of the target.
    pub target_ip: ProtocolAddr,
}

impl Packet {
    /// Build a packet for IPv4 over a link with `sender_hw`-sized addresses.
    ///
    /// Both hardware addresses must be at least 6 bytes and equally long,
    /// otherwise [`Error::InvalidHardwareAddr`] is returned. Addresses longer
    /// than 255 bytes do not fit the 1-byte length field and are rejected with
    /// [`Error::InvalidHardwareAddr`] as well. Both IP addresses
    /// must be IPv4 or IPv4-mapped IPv6, otherwise [`Error::InvalidIp`] is
    /// returned. `operation` is taken as is.
    ///
    /// The hardware type is set to Ethernet and the protocol type to IPv4.
    pub fn new(
        operation: Operation,
        sender_hw: &[u8],
        sender_ip: impl Into<IpAddr>,
        target_hw: &[u8],
        target_ip: impl Into<IpAddr>,
    ) -> Result<Packet> {
        let invalid_hw = || {
            arp_trace!(
                sender_len = sender_hw.len(),
                target_len = target_hw.len(),
                "rejecting hardware addresses"
            );
            Error::InvalidHardwareAddr {
                sender_len: sender_hw.len(),
                target_len: target_hw.len(),
            }
        };

        if sender_hw.len() < MIN_HARDWARE_ADDR_LEN || target_hw.len() < MIN_HARDWARE_ADDR_LEN {
            return Err(invalid_hw());
        }
        if sender_hw.len() != target_hw.len() {
            return Err(invalid_hw());
        }
        let hardware_addr_length = u8::try_from(sender_hw.len()).map_err(|_| invalid_hw())?;

        let sender_ip = reduce_to_ipv4(sender_ip.into())?;
        let target_ip = reduce_to_ipv4(target_ip.into())?;

        Ok(Packet {
            // There is no portable way to learn the hardware type of an
            // interface, Ethernet is the default.
            hardware_type: Hardware::ETHERNET,
            protocol_type: EtherType::IPV4,
            hardware_addr_length,
            ip_length: 4,
            operation,
            sender_hardware_addr: sender_hw.into(),
            sender_ip: sender_ip.into(),
            target_hardware_addr: target_hw.into(),
            target_ip: target_ip.into(),
        })
    }

    /// Wire length of the packet, as declared by its two length fields.
    #[inline]
    pub fn buffer_len(&self) -> usize {
        packet_len(self.hardware_addr_length, self.ip_length)
    }

    /// Encode the packet into a freshly allocated buffer of exactly
    /// [`Packet::buffer_len`] bytes.
    pub fn serialize(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.buffer_len());
        self.emit(&mut buf);
        buf
    }

    /// Append the encoded packet to `buf`.
    ///
    /// # Panics
    /// It panics if `buf` has less than [`Packet::buffer_len`] bytes of
    /// remaining capacity and can not grow.
    pub fn emit<B: BufMut>(&self, buf: &mut B) {
        let mut header = [0; ARP_FIXED_HEADER_LEN];
        write_2_bytes(&mut header[0..2], self.hardware_type.raw());
        write_2_bytes(&mut header[2..4], self.protocol_type.raw());
        header[4] = self.hardware_addr_length;
        header[5] = self.ip_length;
        write_2_bytes(&mut header[6..8], self.operation.raw());
        buf.put_slice(&header[..]);

        let hlen = usize::from(self.hardware_addr_length);
        let plen = usize::from(self.ip_length);
        put_field(buf, &self.sender_hardware_addr, hlen);
        put_field(buf, &self.sender_ip, plen);
        put_field(buf, &self.target_hardware_addr, hlen);
        put_field(buf, &self.target_ip, plen);
    }

    /// Parse a packet from the front of `buf`, copying every field.
    ///
    /// Fails with [`Error::UnexpectedEof`] if `buf` is too short for the
    /// fixed header or for the addresses the header declares. Trailing bytes
    /// are ignored.
    pub fn deserialize(buf: &[u8]) -> Result<Packet> {
        PacketView::parse(buf).map(|view| view.to_packet())
    }

    /// Parse a packet from the front of `buf` and advance `buf` past it.
    ///
    /// The packet may span several chunks of `buf`; the length checks use
    /// `buf.remaining()`. Bytes after the packet stay in `buf`. On error `buf`
    /// is not advanced, except when its front chunk is shorter than the fixed
    /// header and the rest of the header can not be reached through
    /// `chunks_vectored`: the header is then consumed to learn the packet
    /// length.
    pub fn decode<B: Buf>(buf: &mut B) -> Result<Packet> {
        let got = buf.remaining();
        if got < ARP_FIXED_HEADER_LEN {
            arp_trace!(got, "arp buffer shorter than the fixed header");
            return Err(Error::UnexpectedEof {
                needed: ARP_FIXED_HEADER_LEN,
                got,
            });
        }

        let mut header = [0; ARP_FIXED_HEADER_LEN];
        let peeked = peek_header(buf, &mut header);
        if !peeked {
            buf.copy_to_slice(&mut header[..]);
        }

        let needed = PacketView::parse_unchecked(&header[..]).packet_len();
        if got < needed {
            arp_trace!(needed, got, "arp buffer shorter than the declared addresses");
            return Err(Error::UnexpectedEof { needed, got });
        }

        if !peeked {
            let mut bytes = Vec::with_capacity(needed);
            bytes.extend_from_slice(&header[..]);
            bytes.extend_from_slice(&buf.copy_to_bytes(needed - ARP_FIXED_HEADER_LEN));
            return Ok(PacketView::parse_unchecked(&bytes[..]).to_packet());
        }

        if buf.chunk().len() >= needed {
            let packet = PacketView::parse_unchecked(&buf.chunk()[..needed]).to_packet();
            buf.advance(needed);
            Ok(packet)
        } else {
            let bytes = buf.copy_to_bytes(needed);
            Ok(PacketView::parse_unchecked(&bytes[..]).to_packet())
        }
    }

    /// The sender protocol address as IPv4, if it is 4 bytes long.
    #[inline]
    pub fn sender_ipv4(&self) -> Option<Ipv4Addr> {
        self.sender_ip.to_ipv4()
    }

    /// The target protocol address as IPv4, if it is 4 bytes long.
    #[inline]
    pub fn target_ipv4(&self) -> Option<Ipv4Addr> {
        self.target_ip.to_ipv4()
    }

    /// Whether this is an arp request.
    #[inline]
    pub fn is_request(&self) -> bool {
        self.operation == Operation::REQUEST
    }

    /// Whether this is an arp reply.
    #[inline]
    pub fn is_reply(&self) -> bool {
        self.operation == Operation::REPLY
    }
}

impl fmt::Display for Packet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ARP htype={} ptype={:#06x} op={} sha={} spa={} tha={} tpa={}",
            self.hardware_type.raw(),
            self.protocol_type.raw(),
            self.operation,
            self.sender_hardware_addr,
            self.sender_ip,
            self.target_hardware_addr,
            self.target_ip
        )
    }
}

fn reduce_to_ipv4(addr: IpAddr) -> Result<Ipv4Addr> {
    let reduced = match addr {
        IpAddr::V4(ip) => Some(ip),
        IpAddr::V6(ip) => ip.to_ipv4_mapped(),
    };
    reduced.ok_or_else(|| {
        arp_trace!(%addr, "rejecting non-IPv4 address");
        Error::InvalidIp(addr)
    })
}

// Copy the fixed header out of `buf` without advancing it. Returns false if
// the chunks `buf` exposes hold fewer than the header bytes.
fn peek_header<B: Buf>(buf: &B, header: &mut [u8; ARP_FIXED_HEADER_LEN]) -> bool {
    let chunk = buf.chunk();
    if chunk.len() >= ARP_FIXED_HEADER_LEN {
        header.copy_from_slice(&chunk[..ARP_FIXED_HEADER_LEN]);
        return true;
    }

    let mut slices = [IoSlice::new(&[]); ARP_FIXED_HEADER_LEN];
    let n = buf.chunks_vectored(&mut slices[..]);
    let mut filled = 0;
    for slice in &slices[..n] {
        let copied = slice.len().min(ARP_FIXED_HEADER_LEN - filled);
        header[filled..filled + copied].copy_from_slice(&slice[..copied]);
        filled += copied;
        if filled == ARP_FIXED_HEADER_LEN {
            return true;
        }
    }
    false
}

// Write exactly `len` bytes of `field`, padding with zeros if it is short.
fn put_field<B: BufMut>(buf: &mut B, field: &[u8], len: usize) {
    let copied = field.len().min(len);
    buf.put_slice(&field[..copied]);
    buf.put_bytes(0, len - copied);
}
