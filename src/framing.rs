//! # Frame Readiness
//!
//! Bookkeeping for length-prefixed framing: a framing layer records how
//! many bytes the next complete message is declared to occupy, and a
//! dispatch layer polls the readiness flag before attempting a parse pass
//! over a fresh [`ByteBuffer`](crate::ByteBuffer).
//!
//! [`FrameState`] holds no bytes. It does not validate the declared length
//! against anything; supplying a correctly sized byte region is the
//! collaborator's responsibility.
//!
//! ## Usage
//! ```
//! use wirebuf::FrameState;
//!
//! let mut frame = FrameState::new();
//! assert!(!frame.is_ready());
//!
//! // Framing layer decodes a length header from the stream
//! frame.set_length(128);
//! assert!(frame.is_ready());
//! assert_eq!(frame.declared_len(), 128);
//!
//! // Message consumed, wait for the next header
//! frame.reset();
//! assert!(!frame.is_ready());
//! ```

use tracing::trace;

/// Declared-length / readiness signal shared between a framer and a
/// message consumer.
///
/// `ready` is true iff the declared length is nonzero; a declared length
/// of 0 is never ready. The two fields only change together, through
/// [`set_length`](Self::set_length) and [`reset`](Self::reset).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameState {
    declared_len: usize,
    ready: bool,
}

impl FrameState {
    /// Create a state with no declared length, not ready.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the expected size of the next complete message.
    ///
    /// Readiness follows the length: nonzero means ready, zero means not.
    pub fn set_length(&mut self, len: usize) {
        self.declared_len = len;
        self.ready = len > 0;
        trace!(declared_len = len, ready = self.ready, "Frame length set");
    }

    /// Return both fields to their defaults (length 0, not ready).
    pub fn reset(&mut self) {
        self.declared_len = 0;
        self.ready = false;
        trace!("Frame state reset");
    }

    /// Size declared for the next message, 0 when none has been set.
    pub fn declared_len(&self) -> usize {
        self.declared_len
    }

    /// True when a nonzero length has been declared and not yet reset.
    pub fn is_ready(&self) -> bool {
        self.ready
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_not_ready() {
        let frame = FrameState::new();
        assert_eq!(frame.declared_len(), 0);
        assert!(!frame.is_ready());
        assert_eq!(frame, FrameState::default());
    }

    #[test]
    fn test_nonzero_length_is_ready() {
        let mut frame = FrameState::new();
        frame.set_length(1);
        assert!(frame.is_ready());
        assert_eq!(frame.declared_len(), 1);

        frame.set_length(usize::MAX);
        assert!(frame.is_ready());
        assert_eq!(frame.declared_len(), usize::MAX);
    }

    #[test]
    fn test_zero_length_is_never_ready() {
        let mut frame = FrameState::new();
        frame.set_length(42);
        frame.set_length(0);
        assert!(!frame.is_ready());
        assert_eq!(frame.declared_len(), 0);
    }

    #[test]
    fn test_reset_clears_both_fields() {
        let mut frame = FrameState::new();
        frame.set_length(512);
        frame.reset();
        assert_eq!(frame.declared_len(), 0);
        assert!(!frame.is_ready());
    }
}
