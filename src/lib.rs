#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

//! # dhcpv6-option-wire
//!
//! This crate provides the means for decoding DHCPv6 option values into typed
//! representations, and encoding them back byte for byte. It is `no_std` and
//! needs only `alloc`.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - Strict decoding: too few or too many bytes, and out-of-range length
//!   fields, are errors; no partially decoded option is ever returned
//! - Deterministic encoding: absent sub-fields are written as zeros of the
//!   full field width
//! - Closed enum dispatch over supported option codes, unknown codes kept opaque
//! - `log` feature (default) for decode diagnostics
//!
//! ## Architecture
//!
//! - `buffer` - Sequential encoder/decoder with a single terminal length check
//! - `prefix` - IPv6 prefixes read from truncated address bytes
//! - `options` - Option codes, the codec trait and the zero-copy option header
//! - `captive_portal` - Captive-portal URL option (RFC 8910)
//! - `prefix64` - V6 Prefix64 option (RFC 8115)
//! - `repr` - Options container: framing and dispatch
//! - `field` - Field offset definitions
//!
//! ## Example
//!
//! ```
//! use dhcpv6_option_wire::prelude::*;
//!
//! let bytes = [
//!     0, 113, 0, 31, // V6 Prefix64, 31 bytes
//!     96, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
//!     96, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
//!     32, 0x20, 0x01, 0x0d, 0xb8,
//! ];
//! let options = MessageOptions::from_bytes(&bytes).unwrap();
//! let prefix64 = options.v6_prefix64().unwrap();
//! assert_eq!(prefix64.to_string(), "V6 PREFIX64 UPREFIX64: 2001:db8::/32");
//! assert_eq!(options.to_bytes(), bytes);
//! ```

extern crate alloc;

#[macro_use]
mod macros;

/// Sequential big-endian encoder and decoder.
pub mod buffer;

/// Captive-portal URL option.
pub mod captive_portal;

/// Error type for decoding and validation failures.
pub mod error;

/// Field offset definitions for option wire structures.
pub mod field;

/// Option codes, codec trait and option header wrapper.
pub mod options;

/// IPv6 prefix helpers.
pub mod prefix;

/// V6 Prefix64 option.
pub mod prefix64;

/// Options container for a whole message.
pub mod repr;

/// Prelude module for convenient imports.
pub mod prelude;
