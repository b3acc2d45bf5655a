//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate,
//! allowing for convenient glob imports:
//!
//! ```
//! use dhcpv6_option_wire::prelude::*;
//! ```

pub use crate::buffer::{Decoder, Encoder};
pub use crate::captive_portal::CaptivePortal;
pub use crate::error::Error;
pub use crate::options::{OptionCode, OptionHeader, OptionRepr};
pub use crate::prefix::Ipv6Prefix;
pub use crate::prefix64::{UnicastLength, V6Prefix64};
pub use crate::repr::{DhcpOption, MessageOptions, UnknownOption};
