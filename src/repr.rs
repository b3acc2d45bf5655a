use crate::captive_portal::CaptivePortal;
use crate::error::{Error, Result};
use crate::field;
use crate::options::{OptionCode, OptionHeader, OptionRepr};
use crate::prefix64::V6Prefix64;
use alloc::vec::Vec;
use core::fmt;

/// A decoded DHCPv6 option.
///
/// The set of decoded options is closed: codes without a codec in this crate
/// are kept as [`DhcpOption::Unknown`] with their value bytes untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DhcpOption {
    /// Captive-portal URL (103)
    CaptivePortal(CaptivePortal),
    /// V6 Prefix64 (113)
    V6Prefix64(V6Prefix64),
    /// Any other option code, value kept verbatim
    Unknown(UnknownOption),
}

/// An option whose code has no codec in this crate.
///
/// The code is never 103 or 113; those always decode to their typed option.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnknownOption {
    code: u16,
    data: Vec<u8>,
}

impl UnknownOption {
    /// Create an opaque option.
    ///
    /// # Errors
    /// * `Error::ReservedOptionCode` if `code` belongs to a typed option
    /// * `Error::ValueTooLong` if `data` is longer than 65535 bytes
    pub fn new(code: u16, data: impl Into<Vec<u8>>) -> Result<Self> {
        if OptionCode::from_u16(code).is_some() {
            return Err(Error::ReservedOptionCode(code));
        }
        let data = data.into();
        if data.len() > field::option_header::MAX_DATA_LEN {
            return Err(Error::ValueTooLong(data.len()));
        }
        Ok(UnknownOption { code, data })
    }

    /// Option code
    pub fn code(&self) -> u16 {
        self.code
    }

    /// Option value
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl DhcpOption {
    /// Decode an option value according to its code.
    ///
    /// # Parameters
    /// * `code` - The option-code from the header
    /// * `data` - The option value, header already stripped
    ///
    /// # Errors
    /// Whatever the matching codec reports. Unknown codes fail only on a
    /// value longer than 65535 bytes.
    pub fn parse(code: u16, data: &[u8]) -> Result<Self> {
        match OptionCode::from_u16(code) {
            Some(OptionCode::CaptivePortal) => CaptivePortal::from_bytes(data).map(DhcpOption::CaptivePortal),
            Some(OptionCode::V6Prefix64) => V6Prefix64::from_bytes(data).map(DhcpOption::V6Prefix64),
            None => {
                wire_trace!("keeping unknown option {} ({} bytes) opaque", code, data.len());
                UnknownOption::new(code, data).map(DhcpOption::Unknown)
            }
        }
    }

    /// The numeric option code.
    pub fn code(&self) -> u16 {
        match self {
            DhcpOption::CaptivePortal(o) => o.code().as_u16(),
            DhcpOption::V6Prefix64(o) => o.code().as_u16(),
            DhcpOption::Unknown(o) => o.code(),
        }
    }

    /// Serialize the option value (without header).
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            DhcpOption::CaptivePortal(o) => o.to_bytes(),
            DhcpOption::V6Prefix64(o) => o.to_bytes(),
            DhcpOption::Unknown(o) => o.data().to_vec(),
        }
    }
}

impl From<CaptivePortal> for DhcpOption {
    fn from(option: CaptivePortal) -> Self {
        DhcpOption::CaptivePortal(option)
    }
}

impl From<V6Prefix64> for DhcpOption {
    fn from(option: V6Prefix64) -> Self {
        DhcpOption::V6Prefix64(option)
    }
}

impl From<UnknownOption> for DhcpOption {
    fn from(option: UnknownOption) -> Self {
        DhcpOption::Unknown(option)
    }
}

impl fmt::Display for DhcpOption {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DhcpOption::CaptivePortal(o) => fmt::Display::fmt(o, f),
            DhcpOption::V6Prefix64(o) => fmt::Display::fmt(o, f),
            DhcpOption::Unknown(o) => write!(f, "unknown option {}: {} bytes", o.code(), o.data().len()),
        }
    }
}

/// The options carried by one DHCPv6 message, in wire order.
///
/// # Example
/// ```
/// use dhcpv6_option_wire::captive_portal::CaptivePortal;
/// use dhcpv6_option_wire::repr::MessageOptions;
///
/// let mut options = MessageOptions::new();
/// options.add(CaptivePortal::new("http://portal.org").unwrap());
/// let bytes = options.to_bytes();
/// assert_eq!(&bytes[..4], &[0, 103, 0, 17]);
///
/// let parsed = MessageOptions::from_bytes(&bytes).unwrap();
/// assert_eq!(parsed.captive_portal().unwrap().as_str(), Some("http://portal.org"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageOptions {
    options: Vec<DhcpOption>,
}

impl MessageOptions {
    /// Create an empty option set.
    pub fn new() -> Self {
        MessageOptions { options: Vec::new() }
    }

    /// Append an option.
    pub fn add(&mut self, option: impl Into<DhcpOption>) {
        self.options.push(option.into());
    }

    /// Iterate over options in wire order.
    pub fn iter(&self) -> core::slice::Iter<'_, DhcpOption> {
        self.options.iter()
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// True when there are no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// First option with the given code.
    pub fn get(&self, code: u16) -> Option<&DhcpOption> {
        self.options.iter().find(|o| o.code() == code)
    }

    /// First captive-portal option, if any.
    pub fn captive_portal(&self) -> Option<&CaptivePortal> {
        self.options.iter().find_map(|o| match o {
            DhcpOption::CaptivePortal(cp) => Some(cp),
            _ => None,
        })
    }

    /// First V6 Prefix64 option, if any.
    pub fn v6_prefix64(&self) -> Option<&V6Prefix64> {
        self.options.iter().find_map(|o| match o {
            DhcpOption::V6Prefix64(p) => Some(p),
            _ => None,
        })
    }

    /// Serialize every option with its code and length header.
    ///
    /// Every option type bounds its value to 65535 bytes when it is built,
    /// so the length always fits the header.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for option in &self.options {
            let value = option.to_bytes();
            let start = out.len();
            out.resize(start + field::option_header::HEADER_LEN, 0);

            let mut header = OptionHeader::new_unchecked(&mut out[start..]);
            header.set_code(option.code());
            header.set_length(value.len() as u16);
            out.extend_from_slice(&value);
        }
        out
    }

    /// Total encoded size in bytes, headers included.
    pub fn buffer_len(&self) -> usize {
        self.options
            .iter()
            .map(|o| field::option_header::HEADER_LEN + o.to_bytes().len())
            .sum()
    }

    /// Decode a sequence of options.
    ///
    /// # Errors
    /// * `Error::LengthMismatch` if a header is cut short or a length runs
    ///   past the end of the input
    /// * Any error from an option codec; one bad option fails the whole set
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut options = Vec::new();
        let mut rest = data;
        while !rest.is_empty() {
            let header = OptionHeader::new_checked(rest).inspect_err(|err| {
                wire_debug!("option header at offset {}: {}", data.len() - rest.len(), err);
            })?;
            let option = DhcpOption::parse(header.code(), header.data()).inspect_err(|err| {
                wire_debug!("failed to parse option {}: {}", header.code(), err);
            })?;
            options.push(option);
            rest = &rest[header.total_len()..];
        }
        Ok(MessageOptions { options })
    }
}

impl<'a> IntoIterator for &'a MessageOptions {
    type Item = &'a DhcpOption;
    type IntoIter = core::slice::Iter<'a, DhcpOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for MessageOptions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Options: [")?;
        for (i, option) in self.options.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", option)?;
        }
        write!(f, "]")
    }
}
