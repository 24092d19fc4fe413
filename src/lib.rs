//! # wirebuf
//!
//! Big-endian byte buffer core for binary game-protocol messages.
//!
//! Game clients and servers exchange compact binary messages: fixed-width
//! integers and floats, single-byte flags, and length-prefixed UTF-8
//! strings, all big-endian on the wire. This crate is the codec layer
//! those messages are built on.
//!
//! ## Components
//! - **[`ByteBuffer`]**: growable byte sequence with an append-only write
//!   side, a forward-only read cursor, and absolute-index peeks
//! - **[`FrameState`]**: declared-length / readiness bookkeeping shared
//!   between a framer and a message consumer
//!
//! ## Wire Format
//! ```text
//! integers/floats   big-endian, 1/2/4/8 bytes
//! bool              1 byte, 0x00 or 0x01
//! string            [u16 byte length][UTF-8 bytes]
//! raw span          verbatim, caller-delimited
//! ```
//!
//! ## Usage
//! ```
//! use wirebuf::ByteBuffer;
//!
//! let mut msg = ByteBuffer::new();
//! msg.write_u16(500);
//! msg.write_str("hi")?;
//!
//! let mut parse = ByteBuffer::from_slice(msg.as_slice());
//! assert_eq!(parse.read_u16()?, 500);
//! assert_eq!(parse.read_str()?, "hi");
//! # Ok::<(), wirebuf::BufferError>(())
//! ```
//!
//! ## Error Handling
//! Reads past the end of the buffer fail with
//! [`BufferError::OutOfRange`], carrying the buffer length, cursor
//! position, and requested size; the cursor never partially advances.
//! Errors are fatal for the message being parsed, never retried
//! internally.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(missing_docs)]

pub mod buffer;
pub mod error;
pub mod framing;

pub use buffer::ByteBuffer;
pub use error::{BufferError, Result};
pub use framing::FrameState;
