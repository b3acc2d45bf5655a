//! IPv6 prefixes carried as truncated address bytes.
//!
//! On the wire a prefix is only its leading `len / 8` octets. An all-zero run
//! is read as "no prefix". That makes a genuine all-zero prefix such as
//! `::/32` indistinguishable from an absent one; the ambiguity is part of the
//! option format and is kept as is.

use crate::error::{Error, Result};
use core::fmt;
use core::net::Ipv6Addr;

/// An IPv6 address together with a prefix length in bits.
///
/// Host bits beyond the prefix length are always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv6Prefix {
    address: Ipv6Addr,
    len: u8,
}

impl Ipv6Prefix {
    /// Create a prefix, clearing host bits of `address`.
    ///
    /// # Parameters
    /// * `address` - The prefix address
    /// * `len` - Prefix length in bits (0 to 128)
    ///
    /// # Returns
    /// * `Ok(Ipv6Prefix)` if `len` is at most 128
    /// * `Err(Error::InvalidPrefixLength)` otherwise
    ///
    /// # Example
    /// ```
    /// use core::net::Ipv6Addr;
    /// use dhcpv6_option_wire::prefix::Ipv6Prefix;
    ///
    /// let addr: Ipv6Addr = "2001:db8:ffff::1".parse().unwrap();
    /// let prefix = Ipv6Prefix::new(addr, 32).unwrap();
    /// assert_eq!(prefix.to_string(), "2001:db8::/32");
    /// ```
    pub fn new(address: Ipv6Addr, len: u8) -> Result<Self> {
        if len > 128 {
            return Err(Error::InvalidPrefixLength(len));
        }
        let mask = u128::MAX.checked_shl(128 - len as u32).unwrap_or(0);
        Ok(Ipv6Prefix {
            address: Ipv6Addr::from(address.to_bits() & mask),
            len,
        })
    }

    /// The (masked) prefix address.
    pub fn address(&self) -> Ipv6Addr {
        self.address
    }

    /// Prefix length in bits.
    pub fn prefix_len(&self) -> u8 {
        self.len
    }

    /// The leading `bits / 8` octets of the address, as written on the wire.
    pub fn leading_octets(&self, bits: u8) -> [u8; 16] {
        let mut octets = [0u8; 16];
        let n = (bits as usize / 8).min(16);
        octets[..n].copy_from_slice(&self.address.octets()[..n]);
        octets
    }
}

impl fmt::Display for Ipv6Prefix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.len)
    }
}

/// True if every byte is zero (also true for an empty slice).
pub fn is_all_zero(data: &[u8]) -> bool {
    data.iter().all(|&b| b == 0)
}

/// Interpret a wire byte run as a prefix of `len` bits.
///
/// The bytes fill the high-order octets of the address.
///
/// # Returns
/// * `None` if `bytes` is all zero (absent prefix)
/// * `Some(Ipv6Prefix)` otherwise
pub fn prefix_from_bytes(bytes: &[u8], len: u8) -> Option<Ipv6Prefix> {
    if is_all_zero(bytes) {
        return None;
    }
    let mut octets = [0u8; 16];
    let n = bytes.len().min(16);
    octets[..n].copy_from_slice(&bytes[..n]);
    Ipv6Prefix::new(Ipv6Addr::from(octets), len).ok()
}
