//! Sequential big-endian cursors used by every option codec.
//!
//! [`Decoder`] reads fields in order and defers failures: a read past the end
//! of the input records a sticky error and returns zero, so a codec can read
//! all of its fields unconditionally and check once with
//! [`Decoder::finish`]. [`Encoder`] appends to a growable buffer and cannot
//! fail.

use crate::error::{Error, Result};
use alloc::vec::Vec;
use byteorder::{ByteOrder, NetworkEndian};

/// Position-tracking reader over option value bytes.
///
/// # Examples
///
/// ```
/// use dhcpv6_option_wire::buffer::Decoder;
/// use dhcpv6_option_wire::error::Error;
///
/// let mut decoder = Decoder::new(&[0x20, 0x01]);
/// assert_eq!(decoder.read_u16(), 0x2001);
/// assert_eq!(decoder.read_u8(), 0); // past the end
/// assert_eq!(decoder.finish(), Err(Error::LengthMismatch));
/// ```
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    data: &'a [u8],
    pos: usize,
    err: Option<Error>,
}

impl<'a> Decoder<'a> {
    /// Create a decoder positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Decoder { data, pos: 0, err: None }
    }

    fn consume(&mut self, n: usize) -> Option<&'a [u8]> {
        if self.err.is_some() {
            return None;
        }
        if self.remaining() < n {
            self.err = Some(Error::LengthMismatch);
            return None;
        }
        let bytes = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Some(bytes)
    }

    /// Read one byte, or 0 once the input is exhausted.
    pub fn read_u8(&mut self) -> u8 {
        self.consume(1).map_or(0, |b| b[0])
    }

    /// Read a big-endian u16, or 0 once the input is exhausted.
    pub fn read_u16(&mut self) -> u16 {
        self.consume(2).map_or(0, NetworkEndian::read_u16)
    }

    /// Read a big-endian u32, or 0 once the input is exhausted.
    pub fn read_u32(&mut self) -> u32 {
        self.consume(4).map_or(0, NetworkEndian::read_u32)
    }

    /// Read a big-endian u64, or 0 once the input is exhausted.
    pub fn read_u64(&mut self) -> u64 {
        self.consume(8).map_or(0, NetworkEndian::read_u64)
    }

    /// Read exactly `n` raw bytes.
    ///
    /// # Returns
    /// The next `n` bytes, or an empty slice if fewer than `n` remain (the
    /// shortfall is reported by [`Decoder::finish`]).
    pub fn read_bytes(&mut self, n: usize) -> &'a [u8] {
        self.consume(n).unwrap_or(&[])
    }

    /// Number of bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// True when every byte has been consumed.
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// The deferred error recorded by an earlier read, if any.
    pub fn error(&self) -> Option<Error> {
        self.err
    }

    /// Terminal check after all fields have been read.
    ///
    /// # Returns
    /// * `Ok(())` if every read was satisfied and no bytes remain
    /// * `Err(Error::LengthMismatch)` on an earlier shortfall or on unread bytes
    pub fn finish(self) -> Result<()> {
        if let Some(err) = self.err {
            return Err(err);
        }
        if !self.is_empty() {
            return Err(Error::LengthMismatch);
        }
        Ok(())
    }
}

/// Append-only big-endian writer for option values.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Encoder {
    buffer: Vec<u8>,
}

impl Encoder {
    /// Create an empty encoder.
    pub fn new() -> Self {
        Encoder { buffer: Vec::new() }
    }

    /// Create an empty encoder with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Encoder { buffer: Vec::with_capacity(capacity) }
    }

    /// Append one byte.
    pub fn write_u8(&mut self, value: u8) {
        self.buffer.push(value);
    }

    /// Append a big-endian u16.
    pub fn write_u16(&mut self, value: u16) {
        let mut bytes = [0u8; 2];
        NetworkEndian::write_u16(&mut bytes, value);
        self.buffer.extend_from_slice(&bytes);
    }

    /// Append a big-endian u32.
    pub fn write_u32(&mut self, value: u32) {
        let mut bytes = [0u8; 4];
        NetworkEndian::write_u32(&mut bytes, value);
        self.buffer.extend_from_slice(&bytes);
    }

    /// Append a big-endian u64.
    pub fn write_u64(&mut self, value: u64) {
        let mut bytes = [0u8; 8];
        NetworkEndian::write_u64(&mut bytes, value);
        self.buffer.extend_from_slice(&bytes);
    }

    /// Append raw bytes verbatim.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    /// Append 5 zero bytes.
    pub fn write_zero_40(&mut self) {
        self.write_u32(0);
        self.write_u8(0);
    }

    /// Append 6 zero bytes.
    pub fn write_zero_48(&mut self) {
        self.write_u32(0);
        self.write_u16(0);
    }

    /// Append 7 zero bytes.
    pub fn write_zero_56(&mut self) {
        self.write_u32(0);
        self.write_u16(0);
        self.write_u8(0);
    }

    /// Append 12 zero bytes.
    pub fn write_zero_96(&mut self) {
        self.write_u64(0);
        self.write_u32(0);
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// True when nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// The bytes written so far.
    pub fn as_slice(&self) -> &[u8] {
        &self.buffer
    }

    /// Consume the encoder, returning the written bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }
}
