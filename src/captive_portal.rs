use crate::error::{Error, Result};
use crate::field;
use crate::options::{OptionCode, OptionRepr};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Captive-portal URL option (RFC 8910, section 2.2).
///
/// The value is the URL itself with no framing of its own. The bytes are
/// kept verbatim: any byte sequence, including one that is not UTF-8, is a
/// valid value and round-trips unchanged. The only limit is the 65535-byte
/// option-len field, checked on construction.
///
/// # Example
/// ```
/// use dhcpv6_option_wire::captive_portal::CaptivePortal;
/// use dhcpv6_option_wire::options::OptionRepr;
///
/// let option = CaptivePortal::from_bytes(b"http://portal.org").unwrap();
/// assert_eq!(option.as_str(), Some("http://portal.org"));
/// assert_eq!(option.to_bytes(), b"http://portal.org");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CaptivePortal {
    url: Vec<u8>,
}

impl CaptivePortal {
    /// Create the option from a URL.
    ///
    /// # Errors
    /// `Error::ValueTooLong` if the URL is longer than 65535 bytes.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        Self::from_raw(url.into().into_bytes())
    }

    /// Create the option from raw URL bytes.
    ///
    /// # Errors
    /// `Error::ValueTooLong` if the URL is longer than 65535 bytes.
    pub fn from_raw(url: impl Into<Vec<u8>>) -> Result<Self> {
        let url = url.into();
        if url.len() > field::option_header::MAX_DATA_LEN {
            return Err(Error::ValueTooLong(url.len()));
        }
        Ok(CaptivePortal { url })
    }

    /// The URL bytes as received.
    pub fn url(&self) -> &[u8] {
        &self.url
    }

    /// The URL, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.url).ok()
    }
}

impl OptionRepr for CaptivePortal {
    fn code(&self) -> OptionCode {
        OptionCode::CaptivePortal
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.url.clone()
    }

    fn from_bytes(data: &[u8]) -> Result<Self> {
        CaptivePortal::from_raw(data)
    }
}

impl fmt::Display for CaptivePortal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.code(), String::from_utf8_lossy(&self.url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captive_portal_roundtrip() {
        let option = CaptivePortal::new("https://insomniac.slackware.it").unwrap();
        let bytes = option.to_bytes();
        assert_eq!(bytes, b"https://insomniac.slackware.it");
        assert_eq!(CaptivePortal::from_bytes(&bytes).unwrap(), option);
    }

    #[test]
    fn test_captive_portal_empty() {
        let option = CaptivePortal::from_bytes(&[]).unwrap();
        assert_eq!(option.url(), b"");
        assert_eq!(option.as_str(), Some(""));
        assert!(option.to_bytes().is_empty());
    }

    #[test]
    fn test_captive_portal_non_utf8() {
        let raw = [b'h', 0xff, 0xfe, 0x00, b'x'];
        let option = CaptivePortal::from_bytes(&raw).unwrap();
        assert_eq!(option.as_str(), None);
        assert_eq!(option.to_bytes(), raw);
    }

    #[test]
    fn test_captive_portal_length_limit() {
        let longest = vec![b'a'; 65535];
        assert_eq!(CaptivePortal::from_raw(longest.clone()).unwrap().url().len(), 65535);

        let mut too_long = longest;
        too_long.push(b'a');
        assert_eq!(CaptivePortal::from_raw(too_long.clone()), Err(Error::ValueTooLong(65536)));
        assert_eq!(CaptivePortal::from_bytes(&too_long), Err(Error::ValueTooLong(65536)));
        assert_eq!(
            CaptivePortal::new("x".repeat(70000)),
            Err(Error::ValueTooLong(70000))
        );
    }

    #[test]
    fn test_captive_portal_display() {
        let option = CaptivePortal::new("https://insomniac.slackware.it").unwrap();
        assert_eq!(option.code(), OptionCode::CaptivePortal);
        assert_eq!(
            option.to_string(),
            "Captive Portal: https://insomniac.slackware.it"
        );
    }
}
