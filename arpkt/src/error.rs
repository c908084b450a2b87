use std::net::IpAddr;

/// A specialized `Result` type for arp codec operations.
pub type Result<T> = std::result::Result<T, Error>;

quick_error! {
    /// Errors reported while building or parsing an arp packet.
    ///
    /// All of them are detected locally and returned to the caller; nothing is
    /// partially built when one is produced.
    #[allow(missing_docs)]
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Error {
        /// A hardware address is shorter than 6 bytes, longer than the length
        /// field can describe, or the sender and target lengths differ.
        ///
        /// `sender_len` and `target_len` are the lengths that were passed in.
        InvalidHardwareAddr { sender_len: usize, target_len: usize } {
            display("invalid hardware address: sender is {} bytes, target is {} bytes",
                sender_len, target_len)
        }
        /// An address can not be reduced to a 4-byte IPv4 address.
        InvalidIp(addr: IpAddr) {
            display("invalid IPv4 address: {}", addr)
        }
        /// The buffer ends before the header or one of the address fields.
        ///
        /// `needed` is the length the packet requires so far, `got` is the
        /// number of bytes that were available.
        UnexpectedEof { needed: usize, got: usize } {
            display("unexpected end of buffer: need {} bytes, got {}", needed, got)
        }
    }
}
