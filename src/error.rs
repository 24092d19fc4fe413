//! # Error Types
//!
//! Error handling for buffer encode and decode operations.
//!
//! The read side raises exactly one error, [`BufferError::OutOfRange`],
//! carrying a structured diagnostic trio (total length, cursor position,
//! requested size) so callers can branch on the fields instead of parsing a
//! formatted message. The write side is infallible except for
//! [`BufferError::StringTooLong`], raised when a string's UTF-8 encoding
//! does not fit the protocol's 16-bit length prefix.
//!
//! Errors are fatal for the message being built or parsed: the caller is
//! expected to abort that message (and usually drop the session that
//! produced malformed data), never to retry or resume mid-message.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by [`ByteBuffer`](crate::ByteBuffer) operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BufferError {
    /// A sequential read would consume bytes beyond the stored sequence.
    ///
    /// Raised on malformed or truncated input, or on reading past a message
    /// boundary. The cursor is left exactly where it was.
    #[error("read out of range: length={length}, position={position}, requested={requested}")]
    OutOfRange {
        /// Total number of bytes currently stored.
        length: usize,
        /// Read cursor offset at the time of the failed read.
        position: usize,
        /// Number of bytes the read asked for.
        requested: usize,
    },

    /// A string's UTF-8 encoding is too long for the u16 length prefix.
    #[error("string of {length} bytes exceeds the u16 length prefix")]
    StringTooLong {
        /// Encoded UTF-8 byte length of the rejected string.
        length: usize,
    },
}

/// Type alias for Results using BufferError
pub type Result<T> = std::result::Result<T, BufferError>;
