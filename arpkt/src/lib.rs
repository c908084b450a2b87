#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]

//! Provide an RFC 826 arp packet codec.
//!
//! An owned [`arp::Packet`] can be built from sender/target address pairs,
//! serialized to its exact wire encoding and parsed back from raw bytes.
//! [`arp::PacketView`] gives zero-copy access to a packet that still lives
//! in a receive buffer.

#[macro_use]
extern crate quick_error;

#[macro_use]
mod macros;

mod error;
pub use error::{Error, Result};

mod addr;
pub use addr::{HardwareAddr, ProtocolAddr};

pub mod arp;
pub mod ether;

mod network_rw;

pub use bytes::{Buf, BufMut};
