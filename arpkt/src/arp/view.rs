#![allow(missing_docs)]

use std::net::Ipv4Addr;

use crate::addr::ipv4_from_bytes;
use crate::ether::EtherType;
use crate::network_rw::{read_1_byte, read_2_bytes};
use crate::{Error, Result};

use super::{packet_len, Hardware, Operation, Packet, ARP_FIXED_HEADER_LEN};

/// A read-only view of an arp packet stored in a byte buffer.
///
/// The buffer is never copied. Addresses are handed out as slices borrowed
/// from it, and [`PacketView::to_packet`] copies them into an owned [`Packet`].
#[derive(Debug, Clone, Copy)]
pub struct PacketView<T> {
    buf: T,
}

impl<T: AsRef<[u8]>> PacketView<T> {
    /// Wrap `buf` without checking its length.
    ///
    /// The accessors panic if `buf` is shorter than the packet it declares.
    #[inline]
    pub fn parse_unchecked(buf: T) -> Self {
        Self { buf }
    }

    /// Wrap `buf` after checking that it holds the fixed header and all four
    /// address fields the header declares.
    ///
    /// Bytes past the end of the packet are left alone and can be read back
    /// through [`PacketView::trailer`].
    pub fn parse(buf: T) -> Result<Self> {
        let got = buf.as_ref().len();
        if got < ARP_FIXED_HEADER_LEN {
            arp_trace!(got, "arp buffer shorter than the fixed header");
            return Err(Error::UnexpectedEof {
                needed: ARP_FIXED_HEADER_LEN,
                got,
            });
        }

        let container = Self { buf };
        let needed = container.packet_len();
        if got < needed {
            arp_trace!(needed, got, "arp buffer shorter than the declared addresses");
            return Err(Error::UnexpectedEof { needed, got });
        }
        Ok(container)
    }

    #[inline]
    pub fn buf(&self) -> &T {
        &self.buf
    }

    #[inline]
    pub fn release(self) -> T {
        self.buf
    }

    #[inline]
    pub fn hardware_type(&self) -> Hardware {
        Hardware::from(read_2_bytes(&self.buf.as_ref()[0..2]))
    }

    #[inline]
    pub fn protocol_type(&self) -> EtherType {
        EtherType::from(read_2_bytes(&self.buf.as_ref()[2..4]))
    }

    #[inline]
    pub fn hardware_addr_len(&self) -> u8 {
        read_1_byte(&self.buf.as_ref()[4..])
    }

    #[inline]
    pub fn protocol_addr_len(&self) -> u8 {
        read_1_byte(&self.buf.as_ref()[5..])
    }

    #[inline]
    pub fn operation(&self) -> Operation {
        Operation::from(read_2_bytes(&self.buf.as_ref()[6..8]))
    }

    /// Wire length of the packet, as declared by its two length fields.
    #[inline]
    pub fn packet_len(&self) -> usize {
        packet_len(self.hardware_addr_len(), self.protocol_addr_len())
    }

    #[inline]
    pub fn sender_hardware_addr(&self) -> &[u8] {
        let start = ARP_FIXED_HEADER_LEN;
        &self.buf.as_ref()[start..start + self.hlen()]
    }

    #[inline]
    pub fn sender_protocol_addr(&self) -> &[u8] {
        let start = ARP_FIXED_HEADER_LEN + self.hlen();
        &self.buf.as_ref()[start..start + self.plen()]
    }

    #[inline]
    pub fn target_hardware_addr(&self) -> &[u8] {
        let start = ARP_FIXED_HEADER_LEN + self.hlen() + self.plen();
        &self.buf.as_ref()[start..start + self.hlen()]
    }

    #[inline]
    pub fn target_protocol_addr(&self) -> &[u8] {
        let start = ARP_FIXED_HEADER_LEN + 2 * self.hlen() + self.plen();
        &self.buf.as_ref()[start..start + self.plen()]
    }

    /// The sender protocol address as IPv4, if it is 4 bytes long.
    #[inline]
    pub fn sender_ipv4(&self) -> Option<Ipv4Addr> {
        ipv4_from_bytes(self.sender_protocol_addr())
    }

    /// The target protocol address as IPv4, if it is 4 bytes long.
    #[inline]
    pub fn target_ipv4(&self) -> Option<Ipv4Addr> {
        ipv4_from_bytes(self.target_protocol_addr())
    }

    /// Bytes that follow the packet in the buffer.
    #[inline]
    pub fn trailer(&self) -> &[u8] {
        &self.buf.as_ref()[self.packet_len()..]
    }

    /// Copy the packet out of the buffer.
    pub fn to_packet(&self) -> Packet {
        Packet {
            hardware_type: self.hardware_type(),
            protocol_type: self.protocol_type(),
            hardware_addr_length: self.hardware_addr_len(),
            ip_length: self.protocol_addr_len(),
            operation: self.operation(),
            sender_hardware_addr: self.sender_hardware_addr().into(),
            sender_ip: self.sender_protocol_addr().into(),
            target_hardware_addr: self.target_hardware_addr().into(),
            target_ip: self.target_protocol_addr().into(),
        }
    }

    #[inline]
    fn hlen(&self) -> usize {
        usize::from(self.hardware_addr_len())
    }

    #[inline]
    fn plen(&self) -> usize {
        usize::from(self.protocol_addr_len())
    }
}
