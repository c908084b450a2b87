//! Provide utilities to read/write network bytes.
//! The provided APIs follow the style of the `byteorder` crate.

use byteorder::{BigEndian, ByteOrder};

/// Read 1 byte from the start of `buf`.
///
/// # Panics
/// It panics if `buf` size is 0.
#[inline]
pub(crate) fn read_1_byte(buf: &[u8]) -> u8 {
    buf[0]
}

/// Read 2 bytes from the start of `buf`.
///
/// It assumes that the starting 2 bytes are stored
/// in big-endian format.
///
/// # Panics
/// It panics if `buf` size is smaller than 2.
#[inline]
pub(crate) fn read_2_bytes(buf: &[u8]) -> u16 {
    BigEndian::read_u16(buf)
}

/// Write `value` to the start of `buf` in big-endian format.
///
/// # Panics
/// It panics if `buf` size is smaller than 2.
#[inline]
pub(crate) fn write_2_bytes(buf: &mut [u8], value: u16) {
    BigEndian::write_u16(buf, value)
}
