/// Error type for DHCPv6 option decoding and validation.
///
/// Encoding never fails: every value that can be constructed can be
/// serialized. Decoding reports the first violated constraint and never
/// yields a partially decoded option.
///
/// # Examples
///
/// ```
/// use dhcpv6_option_wire::error::Error;
/// use dhcpv6_option_wire::prefix64::V6Prefix64;
/// use dhcpv6_option_wire::options::OptionRepr;
///
/// let result = V6Prefix64::from_bytes(&[95]);
/// assert_eq!(result, Err(Error::InvalidAsmLength(95)));
/// ```
#[derive(PartialEq, Debug, Clone, Copy, Eq)]
pub enum Error {
    /// The value bytes do not match the length the layout declares.
    ///
    /// This occurs when:
    /// - A field runs past the end of the input
    /// - Bytes remain after the last field of an option
    /// - An option header is cut short, or its length exceeds the remaining buffer
    LengthMismatch,

    /// ASM prefix length is not 96.
    InvalidAsmLength(u8),

    /// SSM prefix length is not 96.
    InvalidSsmLength(u8),

    /// Unicast prefix length is not one of 32, 40, 48, 56, 64 or 96.
    InvalidUnicastLength(u8),

    /// IPv6 prefix length exceeds 128 bits.
    InvalidPrefixLength(u8),

    /// Option value is longer than the 16-bit option-len field can describe.
    ValueTooLong(usize),

    /// Option code has a codec in this crate and cannot be carried as an
    /// opaque value.
    ReservedOptionCode(u16),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::LengthMismatch => write!(f, "value length does not match option layout"),
            Error::InvalidAsmLength(l) => write!(f, "invalid asm length {}, expected 96", l),
            Error::InvalidSsmLength(l) => write!(f, "invalid ssm length {}, expected 96", l),
            Error::InvalidUnicastLength(l) => {
                write!(f, "invalid unicast length {}, not in [32, 40, 48, 56, 64, 96]", l)
            }
            Error::InvalidPrefixLength(l) => write!(f, "invalid prefix length {}, maximum is 128", l),
            Error::ValueTooLong(l) => write!(f, "option value of {} bytes exceeds 65535", l),
            Error::ReservedOptionCode(c) => write!(f, "option code {} must use its typed option", c),
        }
    }
}

impl core::error::Error for Error {}

/// Result type alias using the crate's Error type.
pub type Result<T> = core::result::Result<T, Error>;
