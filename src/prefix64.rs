//! V6 Prefix64 option (RFC 8115, section 3).
//!
//! Carries the IPv4-embedded IPv6 prefixes a host uses to synthesize
//! multicast group and source addresses: an ASM multicast prefix, an SSM
//! multicast prefix and a unicast prefix. Each is a length byte followed by
//! `length / 8` prefix bytes.
//!
//! Wire format:
//! ```text
//! offset  size  field
//! 0       1     asm-length      (96)
//! 1       12    asm-mprefix64
//! 13      1     ssm-length      (96)
//! 14      12    ssm-mprefix64
//! 26      1     unicast-length  (32, 40, 48, 56, 64 or 96)
//! 27      L/8   uprefix64
//! ```
//!
//! An absent prefix is written as zeros of the full field width, and an
//! all-zero field reads back as absent.

use crate::buffer::{Decoder, Encoder};
use crate::error::{Error, Result};
use crate::field;
use crate::options::{OptionCode, OptionRepr};
use crate::prefix::{Ipv6Prefix, prefix_from_bytes};
use alloc::vec::Vec;
use core::fmt;
use core::net::Ipv6Addr;

/// Length in bits of the ASM and SSM multicast prefixes.
pub const MULTICAST_PREFIX64_BITS: u8 = 96;

/// Length in bytes of the ASM and SSM multicast prefixes.
pub const MULTICAST_PREFIX64_LENGTH: usize = 12;

/// Unicast prefix lengths permitted by RFC 6052.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum UnicastLength {
    /// /32
    Bits32 = 32,
    /// /40
    Bits40 = 40,
    /// /48
    Bits48 = 48,
    /// /56
    Bits56 = 56,
    /// /64
    Bits64 = 64,
    /// /96
    Bits96 = 96,
}

impl UnicastLength {
    /// Every valid length, shortest first.
    pub const ALL: [UnicastLength; 6] = [
        UnicastLength::Bits32,
        UnicastLength::Bits40,
        UnicastLength::Bits48,
        UnicastLength::Bits56,
        UnicastLength::Bits64,
        UnicastLength::Bits96,
    ];

    /// Convert a u8 value to a UnicastLength.
    ///
    /// # Returns
    /// * `Some(UnicastLength)` if value is 32, 40, 48, 56, 64 or 96
    /// * `None` otherwise
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            32 => Some(UnicastLength::Bits32),
            40 => Some(UnicastLength::Bits40),
            48 => Some(UnicastLength::Bits48),
            56 => Some(UnicastLength::Bits56),
            64 => Some(UnicastLength::Bits64),
            96 => Some(UnicastLength::Bits96),
            _ => None,
        }
    }

    /// Length in bits.
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    /// Width of the prefix field in bytes.
    pub fn bytes(&self) -> usize {
        self.as_u8() as usize / 8
    }
}

/// The V6 Prefix64 option.
///
/// The unicast length is always present, even when the unicast prefix
/// itself is absent, because the wire format carries it either way.
///
/// # Example
/// ```
/// use dhcpv6_option_wire::options::OptionRepr;
/// use dhcpv6_option_wire::prefix64::{UnicastLength, V6Prefix64};
///
/// let option = V6Prefix64::unicast(UnicastLength::Bits32, Some("2001:db8::".parse().unwrap()));
/// let bytes = option.to_bytes();
/// assert_eq!(bytes.len(), 31);
/// assert_eq!(&bytes[26..], &[32, 0x20, 0x01, 0x0d, 0xb8]);
/// assert_eq!(V6Prefix64::from_bytes(&bytes).unwrap(), option);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct V6Prefix64 {
    asm_mprefix64: Option<Ipv6Prefix>,
    ssm_mprefix64: Option<Ipv6Prefix>,
    unicast_length: UnicastLength,
    uprefix64: Option<Ipv6Prefix>,
}

fn multicast_prefix(address: Option<Ipv6Addr>) -> Option<Ipv6Prefix> {
    address.and_then(|a| Ipv6Prefix::new(a, MULTICAST_PREFIX64_BITS).ok())
}

impl V6Prefix64 {
    /// Create the option from its three prefixes.
    ///
    /// Addresses are truncated to their prefix length: 96 bits for the
    /// multicast prefixes and `unicast_length` for the unicast prefix.
    pub fn new(
        asm_mprefix64: Option<Ipv6Addr>,
        ssm_mprefix64: Option<Ipv6Addr>,
        unicast_length: UnicastLength,
        uprefix64: Option<Ipv6Addr>,
    ) -> Self {
        V6Prefix64 {
            asm_mprefix64: multicast_prefix(asm_mprefix64),
            ssm_mprefix64: multicast_prefix(ssm_mprefix64),
            unicast_length,
            uprefix64: uprefix64.and_then(|a| Ipv6Prefix::new(a, unicast_length.as_u8()).ok()),
        }
    }

    /// Create the option with only a unicast prefix; both multicast
    /// prefixes are absent.
    pub fn unicast(unicast_length: UnicastLength, uprefix64: Option<Ipv6Addr>) -> Self {
        Self::new(None, None, unicast_length, uprefix64)
    }

    /// ASM multicast prefix (always /96).
    pub fn asm_mprefix64(&self) -> Option<Ipv6Prefix> {
        self.asm_mprefix64
    }

    /// SSM multicast prefix (always /96).
    pub fn ssm_mprefix64(&self) -> Option<Ipv6Prefix> {
        self.ssm_mprefix64
    }

    /// Declared unicast prefix length.
    pub fn unicast_length(&self) -> UnicastLength {
        self.unicast_length
    }

    /// Unicast prefix.
    pub fn uprefix64(&self) -> Option<Ipv6Prefix> {
        self.uprefix64
    }

    /// Encoded value length in bytes. Depends only on the unicast length.
    pub fn buffer_len(&self) -> usize {
        field::v6_prefix64::UPREFIX64(self.unicast_length.as_u8()).end
    }
}

fn write_multicast(encoder: &mut Encoder, prefix: Option<Ipv6Prefix>) {
    encoder.write_u8(MULTICAST_PREFIX64_BITS);
    match prefix {
        Some(p) => encoder.write_bytes(&p.leading_octets(MULTICAST_PREFIX64_BITS)[..MULTICAST_PREFIX64_LENGTH]),
        None => encoder.write_zero_96(),
    }
}

/// Append an all-zero prefix of `length` bits.
///
/// Stands in for an absent prefix so the field keeps its declared width.
pub fn write_zero_prefix(encoder: &mut Encoder, length: UnicastLength) {
    match length {
        UnicastLength::Bits32 => encoder.write_u32(0),
        UnicastLength::Bits40 => encoder.write_zero_40(),
        UnicastLength::Bits48 => encoder.write_zero_48(),
        UnicastLength::Bits56 => encoder.write_zero_56(),
        UnicastLength::Bits64 => encoder.write_u64(0),
        UnicastLength::Bits96 => encoder.write_zero_96(),
    }
}

// A missing length byte reads as 0; report the truncation rather than the 0.
fn read_length(decoder: &mut Decoder<'_>) -> Result<u8> {
    let length = decoder.read_u8();
    match decoder.error() {
        Some(err) => Err(err),
        None => Ok(length),
    }
}

impl OptionRepr for V6Prefix64 {
    fn code(&self) -> OptionCode {
        OptionCode::V6Prefix64
    }

    fn to_bytes(&self) -> Vec<u8> {
        let mut encoder = Encoder::with_capacity(self.buffer_len());
        write_multicast(&mut encoder, self.asm_mprefix64);
        write_multicast(&mut encoder, self.ssm_mprefix64);

        let bits = self.unicast_length.as_u8();
        encoder.write_u8(bits);
        match self.uprefix64 {
            Some(p) => encoder.write_bytes(&p.leading_octets(bits)[..self.unicast_length.bytes()]),
            None => write_zero_prefix(&mut encoder, self.unicast_length),
        }
        encoder.into_inner()
    }

    fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut decoder = Decoder::new(data);

        let asm_length = read_length(&mut decoder)?;
        if asm_length != MULTICAST_PREFIX64_BITS {
            return Err(Error::InvalidAsmLength(asm_length));
        }
        let asm_mprefix64 = prefix_from_bytes(
            decoder.read_bytes(MULTICAST_PREFIX64_LENGTH),
            MULTICAST_PREFIX64_BITS,
        );

        let ssm_length = read_length(&mut decoder)?;
        if ssm_length != MULTICAST_PREFIX64_BITS {
            return Err(Error::InvalidSsmLength(ssm_length));
        }
        let ssm_mprefix64 = prefix_from_bytes(
            decoder.read_bytes(MULTICAST_PREFIX64_LENGTH),
            MULTICAST_PREFIX64_BITS,
        );

        let bits = read_length(&mut decoder)?;
        let unicast_length = UnicastLength::from_u8(bits).ok_or(Error::InvalidUnicastLength(bits))?;
        let uprefix64 = prefix_from_bytes(decoder.read_bytes(unicast_length.bytes()), bits);

        decoder.finish()?;

        Ok(V6Prefix64 {
            asm_mprefix64,
            ssm_mprefix64,
            unicast_length,
            uprefix64,
        })
    }
}

impl fmt::Display for V6Prefix64 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(p) = self.uprefix64 {
            write!(f, "V6 PREFIX64 UPREFIX64: {}", p)
        } else if let Some(p) = self.ssm_mprefix64 {
            write!(f, "V6 PREFIX64 SSM MPREFIX64: {}", p)
        } else if let Some(p) = self.asm_mprefix64 {
            write!(f, "V6 PREFIX64 ASM MPREFIX64: {}", p)
        } else {
            write!(f, "V6 PREFIX64")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: [u8; 31] = [
        96, // asm-length
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // asm-mprefix64
        96, // ssm-length
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // ssm-mprefix64
        32, // unicast-length
        0x20, 0x01, 0x0d, 0xb8, // uprefix64
    ];

    fn addr(s: &str) -> Ipv6Addr {
        s.parse().unwrap()
    }

    #[test]
    fn test_zero_prefix_widths() {
        for length in UnicastLength::ALL {
            let mut encoder = Encoder::with_capacity(12);
            write_zero_prefix(&mut encoder, length);
            assert_eq!(encoder.len(), length.bytes(), "width for {}", length.as_u8());
            assert!(encoder.as_slice().iter().all(|&b| b == 0));
        }
    }

    fn value(asm: [u8; 12], ssm: [u8; 12], unicast_length: u8, uprefix: &[u8]) -> Vec<u8> {
        let mut v = Vec::new();
        v.push(96);
        v.extend_from_slice(&asm);
        v.push(96);
        v.extend_from_slice(&ssm);
        v.push(unicast_length);
        v.extend_from_slice(uprefix);
        v
    }

    #[test]
    fn test_decode_example() {
        let option = V6Prefix64::from_bytes(&EXAMPLE).unwrap();
        assert_eq!(option.asm_mprefix64(), None);
        assert_eq!(option.ssm_mprefix64(), None);
        assert_eq!(option.unicast_length(), UnicastLength::Bits32);

        let uprefix = option.uprefix64().unwrap();
        assert_eq!(uprefix.address(), addr("2001:db8::"));
        assert_eq!(uprefix.prefix_len(), 32);

        assert_eq!(option.to_bytes(), EXAMPLE);
    }

    #[test]
    fn test_roundtrip_all_present() {
        let option = V6Prefix64::new(
            Some(addr("ff3e:1:2:3:4:5::")),
            Some(addr("ff3e:a:b:c:d:e::")),
            UnicastLength::Bits64,
            Some(addr("2001:db8:1:2::")),
        );
        let bytes = option.to_bytes();
        assert_eq!(bytes.len(), 35);
        assert_eq!(&bytes[1..5], &[0xff, 0x3e, 0x00, 0x01]);
        assert_eq!(V6Prefix64::from_bytes(&bytes).unwrap(), option);
    }

    #[test]
    fn test_roundtrip_presence_combinations() {
        let asm = [None, Some(addr("ff3e:1::"))];
        let ssm = [None, Some(addr("ff3e:2::"))];
        let uni = [None, Some(addr("2001:db8:aa00::"))];
        for a in asm {
            for s in ssm {
                for u in uni {
                    let option = V6Prefix64::new(a, s, UnicastLength::Bits40, u);
                    let decoded = V6Prefix64::from_bytes(&option.to_bytes()).unwrap();
                    assert_eq!(decoded, option);
                    assert_eq!(decoded.asm_mprefix64().is_some(), a.is_some());
                    assert_eq!(decoded.ssm_mprefix64().is_some(), s.is_some());
                    assert_eq!(decoded.uprefix64().is_some(), u.is_some());
                }
            }
        }
    }

    #[test]
    fn test_absent_prefixes_encode_as_zero_runs() {
        for length in UnicastLength::ALL {
            let option = V6Prefix64::unicast(length, None);
            let bytes = option.to_bytes();
            assert_eq!(bytes.len(), 27 + length.bytes());
            assert_eq!(bytes.len(), option.buffer_len());
            assert_eq!(bytes[0], 96);
            assert_eq!(bytes[13], 96);
            assert_eq!(bytes[26], length.as_u8());
            assert!(bytes[1..13].iter().all(|&b| b == 0));
            assert!(bytes[14..26].iter().all(|&b| b == 0));
            assert!(bytes[27..].iter().all(|&b| b == 0));

            // Length survives even though the prefix is absent
            let decoded = V6Prefix64::from_bytes(&bytes).unwrap();
            assert_eq!(decoded.unicast_length(), length);
            assert_eq!(decoded.uprefix64(), None);
        }
    }

    #[test]
    fn test_every_valid_unicast_length_decodes() {
        for length in UnicastLength::ALL {
            let mut uprefix = [0u8; 12];
            uprefix[0] = 0x20;
            uprefix[length.bytes() - 1] |= 0x01;
            let bytes = value([0; 12], [0; 12], length.as_u8(), &uprefix[..length.bytes()]);

            let option = V6Prefix64::from_bytes(&bytes).unwrap();
            assert_eq!(option.unicast_length(), length);
            assert_eq!(option.uprefix64().unwrap().prefix_len(), length.as_u8());
            assert_eq!(option.to_bytes(), bytes);
        }
    }

    #[test]
    fn test_invalid_asm_length() {
        let mut bytes = EXAMPLE;
        bytes[0] = 95;
        assert_eq!(V6Prefix64::from_bytes(&bytes), Err(Error::InvalidAsmLength(95)));
        bytes[0] = 0;
        assert_eq!(V6Prefix64::from_bytes(&bytes), Err(Error::InvalidAsmLength(0)));
    }

    #[test]
    fn test_invalid_ssm_length() {
        let mut bytes = EXAMPLE;
        bytes[13] = 128;
        assert_eq!(V6Prefix64::from_bytes(&bytes), Err(Error::InvalidSsmLength(128)));
    }

    #[test]
    fn test_invalid_unicast_length() {
        let mut bytes = EXAMPLE.to_vec();
        bytes[26] = 33;
        assert_eq!(V6Prefix64::from_bytes(&bytes), Err(Error::InvalidUnicastLength(33)));

        for bad in [0u8, 8, 16, 24, 72, 80, 88, 104, 128, 255] {
            bytes[26] = bad;
            assert_eq!(V6Prefix64::from_bytes(&bytes), Err(Error::InvalidUnicastLength(bad)));
        }
    }

    #[test]
    fn test_truncated_input() {
        assert_eq!(V6Prefix64::from_bytes(&[]), Err(Error::LengthMismatch));
        assert_eq!(V6Prefix64::from_bytes(&EXAMPLE[..1]), Err(Error::LengthMismatch));
        assert_eq!(V6Prefix64::from_bytes(&EXAMPLE[..13]), Err(Error::LengthMismatch));
        assert_eq!(V6Prefix64::from_bytes(&EXAMPLE[..26]), Err(Error::LengthMismatch));
        assert_eq!(V6Prefix64::from_bytes(&EXAMPLE[..30]), Err(Error::LengthMismatch));
    }

    #[test]
    fn test_trailing_bytes() {
        let mut bytes = EXAMPLE.to_vec();
        bytes.push(0);
        assert_eq!(V6Prefix64::from_bytes(&bytes), Err(Error::LengthMismatch));
    }

    #[test]
    fn test_all_zero_prefix_reads_as_absent() {
        // ::/32 cannot be told apart from "no unicast prefix"
        let option = V6Prefix64::unicast(UnicastLength::Bits32, Some(Ipv6Addr::UNSPECIFIED));
        assert!(option.uprefix64().is_some());
        let decoded = V6Prefix64::from_bytes(&option.to_bytes()).unwrap();
        assert_eq!(decoded.uprefix64(), None);
    }

    #[test]
    fn test_constructor_truncates_host_bits() {
        let option = V6Prefix64::unicast(UnicastLength::Bits48, Some(addr("2001:db8:1:ffff::1")));
        assert_eq!(option.uprefix64().unwrap().address(), addr("2001:db8:1::"));
        assert_eq!(V6Prefix64::from_bytes(&option.to_bytes()).unwrap(), option);
    }

    #[test]
    fn test_display_precedence() {
        let none = V6Prefix64::unicast(UnicastLength::Bits96, None);
        assert_eq!(none.to_string(), "V6 PREFIX64");

        let asm = V6Prefix64::new(Some(addr("ff3e:1::")), None, UnicastLength::Bits96, None);
        assert_eq!(asm.to_string(), "V6 PREFIX64 ASM MPREFIX64: ff3e:1::/96");

        let ssm = V6Prefix64::new(
            Some(addr("ff3e:1::")),
            Some(addr("ff3e:2::")),
            UnicastLength::Bits96,
            None,
        );
        assert_eq!(ssm.to_string(), "V6 PREFIX64 SSM MPREFIX64: ff3e:2::/96");

        let all = V6Prefix64::new(
            Some(addr("ff3e:1::")),
            Some(addr("ff3e:2::")),
            UnicastLength::Bits32,
            Some(addr("2001:db8::")),
        );
        assert_eq!(all.to_string(), "V6 PREFIX64 UPREFIX64: 2001:db8::/32");
    }

    #[test]
    fn test_unicast_length_conversion() {
        for length in UnicastLength::ALL {
            assert_eq!(UnicastLength::from_u8(length.as_u8()), Some(length));
        }
        assert_eq!(UnicastLength::from_u8(33), None);
        assert_eq!(UnicastLength::Bits56.bytes(), 7);
    }
}
