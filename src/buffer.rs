//! # Byte Buffer
//!
//! Growable byte buffer with sequential big-endian encode/decode and an
//! absolute-index peek. This is the unit of message assembly and parsing
//! for the wire protocol.
//!
//! A buffer pairs an append-only write side with a cursor-based read side
//! over the same storage. Writes never move the cursor; reads never modify
//! previously written bytes. The intended lifecycle is one buffer per
//! message: build it and hand the bytes to transport, or seed it from a
//! received frame and read it through once.
//!
//! ## Wire Format
//! All multi-byte values are big-endian. Strings carry a u16 byte-length
//! prefix followed by their UTF-8 bytes. Raw spans carry no length; the
//! surrounding protocol delimits them.
//!
//! ## Usage
//! ```
//! use wirebuf::ByteBuffer;
//!
//! let mut msg = ByteBuffer::new();
//! msg.write_u16(500);
//! msg.write_i32(-7);
//! msg.write_bool(true);
//!
//! let mut parse = ByteBuffer::from_slice(msg.as_slice());
//! assert_eq!(parse.read_u16()?, 500);
//! assert_eq!(parse.read_i32()?, -7);
//! assert!(parse.read_bool()?);
//! assert_eq!(parse.remaining(), 0);
//! # Ok::<(), wirebuf::BufferError>(())
//! ```

use crate::error::{BufferError, Result};
use bytes::{Buf, BufMut, Bytes, BytesMut};
use std::ops::Index;

/// Growable byte buffer with an append-only write side and a forward-only
/// read cursor.
///
/// The cursor starts at 0, advances only on successful reads, and never
/// decrements. Written bytes are never removed or compacted, so the
/// extraction helpers ([`as_slice`](Self::as_slice), [`to_vec`](Self::to_vec),
/// [`into_bytes`](Self::into_bytes)) always see the full sequence regardless
/// of how far the cursor has moved.
///
/// A buffer is exclusively owned by whichever component is assembling or
/// parsing one message; every mutating operation takes `&mut self`, so the
/// single-writer contract is enforced at compile time.
#[derive(Debug, Clone, Default)]
pub struct ByteBuffer {
    storage: BytesMut,
    position: usize,
}

impl ByteBuffer {
    /// Create an empty buffer with the cursor at 0.
    pub fn new() -> Self {
        Self {
            storage: BytesMut::new(),
            position: 0,
        }
    }

    /// Create an empty buffer with `capacity` bytes pre-reserved.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: BytesMut::with_capacity(capacity),
            position: 0,
        }
    }

    /// Create a buffer seeded with a copy of `bytes`, cursor at 0.
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self {
            storage: BytesMut::from(bytes),
            position: 0,
        }
    }

    /// Total number of bytes written so far, independent of the cursor.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// True when nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Current read cursor offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bytes left between the cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.storage.len() - self.position
    }

    /// Peek the byte at an absolute index without touching the cursor.
    ///
    /// Bounds-checked against the total length only, never against the
    /// cursor; returns `None` past the end. Indexing (`buf[i]`) gives the
    /// panicking slice contract instead.
    pub fn get(&self, index: usize) -> Option<u8> {
        self.storage.get(index).copied()
    }

    /// View the full written sequence.
    pub fn as_slice(&self) -> &[u8] {
        &self.storage
    }

    /// Copy the full written sequence into an owned `Vec`.
    pub fn to_vec(&self) -> Vec<u8> {
        self.storage.to_vec()
    }

    /// Consume the buffer and freeze its storage for zero-copy hand-off to
    /// transport.
    pub fn into_bytes(self) -> Bytes {
        self.storage.freeze()
    }

    /// Append an unsigned 8-bit value.
    pub fn write_u8(&mut self, value: u8) {
        self.storage.put_u8(value);
    }

    /// Append a signed 16-bit value, big-endian.
    pub fn write_i16(&mut self, value: i16) {
        self.storage.put_i16(value);
    }

    /// Append an unsigned 16-bit value, big-endian.
    pub fn write_u16(&mut self, value: u16) {
        self.storage.put_u16(value);
    }

    /// Append a signed 32-bit value, big-endian.
    pub fn write_i32(&mut self, value: i32) {
        self.storage.put_i32(value);
    }

    /// Append an unsigned 32-bit value, big-endian.
    pub fn write_u32(&mut self, value: u32) {
        self.storage.put_u32(value);
    }

    /// Append a signed 64-bit value, big-endian.
    pub fn write_i64(&mut self, value: i64) {
        self.storage.put_i64(value);
    }

    /// Append an unsigned 64-bit value, big-endian.
    pub fn write_u64(&mut self, value: u64) {
        self.storage.put_u64(value);
    }

    /// Append an IEEE-754 single-precision value, big-endian.
    pub fn write_f32(&mut self, value: f32) {
        self.storage.put_f32(value);
    }

    /// Append an IEEE-754 double-precision value, big-endian.
    pub fn write_f64(&mut self, value: f64) {
        self.storage.put_f64(value);
    }

    /// Append a bool as a single byte, 0x01 for true and 0x00 for false.
    pub fn write_bool(&mut self, value: bool) {
        self.storage.put_u8(u8::from(value));
    }

    /// Append a char truncated to its low byte.
    ///
    /// The protocol's char fields are single octets; codepoints above
    /// U+00FF lose their upper bits.
    pub fn write_char(&mut self, value: char) {
        self.storage.put_u8(value as u8);
    }

    /// Append raw bytes verbatim, with no length prefix.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.storage.put_slice(bytes);
    }

    /// Append a string as a u16 big-endian length prefix followed by its
    /// UTF-8 bytes. The prefix counts encoded bytes, not characters.
    ///
    /// # Errors
    /// Returns [`BufferError::StringTooLong`] when the UTF-8 encoding is
    /// longer than 65 535 bytes and cannot be represented in the prefix.
    pub fn write_str(&mut self, value: &str) -> Result<()> {
        let prefix = u16::try_from(value.len()).map_err(|_| BufferError::StringTooLong {
            length: value.len(),
        })?;
        self.storage.put_u16(prefix);
        self.storage.put_slice(value.as_bytes());
        Ok(())
    }

    /// Read an unsigned 8-bit value at the cursor.
    pub fn read_u8(&mut self) -> Result<u8> {
        self.consume(1).map(|bytes| bytes[0])
    }

    /// Read a signed 16-bit big-endian value at the cursor.
    pub fn read_i16(&mut self) -> Result<i16> {
        self.consume(2).map(|mut bytes| bytes.get_i16())
    }

    /// Read an unsigned 16-bit big-endian value at the cursor.
    pub fn read_u16(&mut self) -> Result<u16> {
        self.consume(2).map(|mut bytes| bytes.get_u16())
    }

    /// Read a signed 32-bit big-endian value at the cursor.
    pub fn read_i32(&mut self) -> Result<i32> {
        self.consume(4).map(|mut bytes| bytes.get_i32())
    }

    /// Read an unsigned 32-bit big-endian value at the cursor.
    pub fn read_u32(&mut self) -> Result<u32> {
        self.consume(4).map(|mut bytes| bytes.get_u32())
    }

    /// Read a signed 64-bit big-endian value at the cursor.
    pub fn read_i64(&mut self) -> Result<i64> {
        self.consume(8).map(|mut bytes| bytes.get_i64())
    }

    /// Read an unsigned 64-bit big-endian value at the cursor.
    pub fn read_u64(&mut self) -> Result<u64> {
        self.consume(8).map(|mut bytes| bytes.get_u64())
    }

    /// Read an IEEE-754 single-precision big-endian value at the cursor.
    pub fn read_f32(&mut self) -> Result<f32> {
        self.consume(4).map(|mut bytes| bytes.get_f32())
    }

    /// Read an IEEE-754 double-precision big-endian value at the cursor.
    pub fn read_f64(&mut self) -> Result<f64> {
        self.consume(8).map(|mut bytes| bytes.get_f64())
    }

    /// Read a bool at the cursor; any nonzero byte decodes as true.
    pub fn read_bool(&mut self) -> Result<bool> {
        self.consume(1).map(|bytes| bytes[0] != 0)
    }

    /// Read a single-octet char at the cursor (codepoints U+0000..=U+00FF).
    pub fn read_char(&mut self) -> Result<char> {
        self.read_u8().map(char::from)
    }

    /// Read `len` raw bytes at the cursor into an owned copy.
    pub fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        self.consume(len).map(|bytes| bytes.to_vec())
    }

    /// Read a u16 length prefix at the cursor, then that many UTF-8 bytes.
    ///
    /// Invalid UTF-8 decodes lossily (invalid sequences become U+FFFD); a
    /// malformed string is not a protocol error, a short one is.
    pub fn read_str(&mut self) -> Result<String> {
        let len = self.read_u16()? as usize;
        self.read_str_exact(len)
    }

    /// Read exactly `len` UTF-8 bytes at the cursor as a string, bypassing
    /// any length prefix. For string fields whose size is carried elsewhere
    /// in the message.
    pub fn read_str_exact(&mut self, len: usize) -> Result<String> {
        self.consume(len)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// Consume `len` bytes at the cursor and advance it.
    ///
    /// Fails without advancing when fewer than `len` bytes remain past the
    /// cursor; the returned slice is exactly `len` bytes.
    fn consume(&mut self, len: usize) -> Result<&[u8]> {
        match self.position.checked_add(len) {
            Some(end) if end <= self.storage.len() => {
                let bytes = &self.storage[self.position..end];
                self.position = end;
                Ok(bytes)
            }
            _ => Err(BufferError::OutOfRange {
                length: self.storage.len(),
                position: self.position,
                requested: len,
            }),
        }
    }
}

impl Index<usize> for ByteBuffer {
    type Output = u8;

    /// Absolute-index peek with the slice contract: panics past the end,
    /// never consults or moves the cursor.
    fn index(&self, index: usize) -> &u8 {
        &self.storage[index]
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_slice(&bytes)
    }
}

impl From<&[u8]> for ByteBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self::from_slice(bytes)
    }
}
