/// Option framing for DHCPv6
///
/// This module provides the option code enumeration, the [`OptionRepr`]
/// codec contract every option type implements, and a zero-copy wrapper
/// around the `code | length | data` option header.

use crate::error::{Error, Result};
use crate::field;
use alloc::vec::Vec;
use byteorder::{ByteOrder, NetworkEndian};
use core::fmt;

/// Option code enumeration for the DHCPv6 options this crate decodes.
///
/// Codes are assigned by IANA in the DHCPv6 option code registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum OptionCode {
    /// Captive-portal URL option (103) - RFC 8910
    CaptivePortal = 103,
    /// V6 Prefix64 option (113) - RFC 8115
    V6Prefix64 = 113,
}

impl OptionCode {
    /// Convert a u16 value to an OptionCode.
    ///
    /// # Parameters
    /// * `value` - The option code from the wire
    ///
    /// # Returns
    /// * `Some(OptionCode)` if value matches a supported option
    /// * `None` if the option is not decoded by this crate
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            103 => Some(OptionCode::CaptivePortal),
            113 => Some(OptionCode::V6Prefix64),
            _ => None,
        }
    }

    /// Convert the OptionCode to its u16 representation.
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }
}

impl fmt::Display for OptionCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OptionCode::CaptivePortal => write!(f, "Captive Portal"),
            OptionCode::V6Prefix64 => write!(f, "V6 Prefix64"),
        }
    }
}

/// Encode/decode contract shared by every option type.
///
/// The bytes handled here are the option value only: the code and length
/// header are added and stripped by [`MessageOptions`](crate::repr::MessageOptions).
pub trait OptionRepr: fmt::Display + Sized {
    /// The option code this type is registered under.
    fn code(&self) -> OptionCode;

    /// Serialize the option value. Never fails.
    fn to_bytes(&self) -> Vec<u8>;

    /// Decode an option value.
    ///
    /// # Errors
    /// Returns the first layout or validation error encountered. No partially
    /// decoded value is ever produced.
    fn from_bytes(data: &[u8]) -> Result<Self>;
}

/// Zero-copy wrapper around a DHCPv6 option (4-byte header plus data).
///
/// Wire format:
/// ```text
/// 0               1               2               3
/// 0 1 2 3 4 5 6 7 0 1 2 3 4 5 6 7 0 1 2 3 4 5 6 7 0 1 2 3 4 5 6 7
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |          option-code          |           option-len          |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                    option-data (option-len)                   |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Debug, Clone, Copy)]
pub struct OptionHeader<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> OptionHeader<T> {
    /// Option header wire format size in bytes.
    pub const LENGTH: usize = field::option_header::HEADER_LEN;

    /// Create an OptionHeader without validation.
    ///
    /// This does not validate buffer length. Use `new_checked` for validation.
    pub fn new_unchecked(buffer: T) -> Self {
        OptionHeader { buffer }
    }

    /// Create an OptionHeader from a buffer with length validation.
    ///
    /// # Returns
    /// * `Ok(OptionHeader)` if the buffer holds the header and the declared data
    /// * `Err(Error::LengthMismatch)` otherwise
    pub fn new_checked(buffer: T) -> Result<Self> {
        let header = Self::new_unchecked(buffer);
        header.check_len()?;
        Ok(header)
    }

    /// Validate that the buffer holds the header and `length()` data bytes.
    pub fn check_len(&self) -> Result<()> {
        let len = self.buffer.as_ref().len();
        if len < Self::LENGTH {
            return Err(Error::LengthMismatch);
        }
        if len < self.total_len() {
            return Err(Error::LengthMismatch);
        }
        Ok(())
    }

    /// Get the option-code field (2 bytes at offset 0-1, network byte order).
    pub fn code(&self) -> u16 {
        NetworkEndian::read_u16(&self.buffer.as_ref()[field::option_header::CODE])
    }

    /// Get the option-len field (2 bytes at offset 2-3, network byte order).
    ///
    /// # Returns
    /// Length of the option data (excluding the 4-byte header itself)
    pub fn length(&self) -> u16 {
        NetworkEndian::read_u16(&self.buffer.as_ref()[field::option_header::LENGTH])
    }

    /// Get the option data.
    pub fn data(&self) -> &[u8] {
        &self.buffer.as_ref()[field::option_header::DATA(self.length() as usize)]
    }

    /// Header plus data length in bytes.
    pub fn total_len(&self) -> usize {
        field::option_header::DATA(self.length() as usize).end
    }
}

impl<T: AsRef<[u8]> + AsMut<[u8]>> OptionHeader<T> {
    /// Set the option-code field (2 bytes at offset 0-1, network byte order).
    pub fn set_code(&mut self, value: u16) {
        NetworkEndian::write_u16(&mut self.buffer.as_mut()[field::option_header::CODE], value);
    }

    /// Set the option-len field (2 bytes at offset 2-3, network byte order).
    pub fn set_length(&mut self, value: u16) {
        NetworkEndian::write_u16(&mut self.buffer.as_mut()[field::option_header::LENGTH], value);
    }

    /// Get a mutable view of the option data, sized by `length()`.
    pub fn data_mut(&mut self) -> &mut [u8] {
        let range = field::option_header::DATA(self.length() as usize);
        &mut self.buffer.as_mut()[range]
    }
}
