//! Field offset definitions for DHCPv6 option wire structures.
//!
//! Following the smoltcp pattern, all offsets are defined as const ranges or
//! const functions to enable compile-time optimization.
//!
//! # Wire Format Structure
//!
//! DHCPv6 option (RFC 8415, section 21.1):
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          option-code          |           option-len          |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          option-data                          |
//! |                      (option-len octets)                      |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```

#![allow(non_snake_case)]

/// Type alias for a byte range (slice index range).
pub type Field = ::core::ops::Range<usize>;

/// Option header field offsets (4 bytes total).
///
/// Every DHCPv6 option starts with this header.
pub mod option_header {
    use crate::field::Field;

    /// Option code (2 bytes at offset 0-1).
    pub const CODE: Field = 0..2;

    /// Length of option data excluding header (2 bytes at offset 2-3).
    pub const LENGTH: Field = 2..4;

    /// Header length in bytes.
    pub const HEADER_LEN: usize = LENGTH.end;

    /// Largest option data length the option-len field can carry.
    pub const MAX_DATA_LEN: usize = u16::MAX as usize;

    /// Option data field (variable length after the header).
    ///
    /// # Parameters
    ///
    /// * `length` - The option-len value from the header
    ///
    /// # Returns
    ///
    /// Field range covering the option data
    pub const fn DATA(length: usize) -> Field {
        HEADER_LEN..(HEADER_LEN + length)
    }
}

/// V6 Prefix64 option value offsets (RFC 8115, section 3).
///
/// Offsets are relative to the start of the option data. The unicast
/// prefix is variable length, so its range depends on the unicast-length.
pub mod v6_prefix64 {
    use crate::field::Field;

    /// ASM prefix length (1 byte at offset 0). Always 96.
    pub const ASM_LENGTH: Field = 0..1;

    /// ASM multicast prefix (12 bytes at offset 1-12).
    pub const ASM_MPREFIX64: Field = 1..13;

    /// SSM prefix length (1 byte at offset 13). Always 96.
    pub const SSM_LENGTH: Field = 13..14;

    /// SSM multicast prefix (12 bytes at offset 14-25).
    pub const SSM_MPREFIX64: Field = 14..26;

    /// Unicast prefix length (1 byte at offset 26).
    pub const UNICAST_LENGTH: Field = 26..27;

    /// Unicast prefix (variable length at offset 27).
    ///
    /// # Parameters
    ///
    /// * `bits` - The unicast-length value in bits
    ///
    /// # Returns
    ///
    /// Field range covering the unicast prefix bytes
    pub const fn UPREFIX64(bits: u8) -> Field {
        UNICAST_LENGTH.end..(UNICAST_LENGTH.end + bits as usize / 8)
    }
}
