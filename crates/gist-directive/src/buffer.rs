//! Streamed turn buffering
//!
//! Tag matching assumes the whole turn is in hand, so streamed chunks are
//! collected here and only released once the turn is known complete.

use crate::error::DirectiveError;

/// Default upper bound for one assistant turn
pub const DEFAULT_MAX_TURN_BYTES: usize = 256 * 1024;

/// Accumulates streamed chunks of one assistant turn
///
/// The text can only be taken out through [`TurnBuffer::finish`], which
/// consumes the buffer. Dropping the buffer or calling
/// [`TurnBuffer::cancel`] discards the pending turn.
#[derive(Debug, Clone)]
pub struct TurnBuffer {
    text: String,
    max_bytes: usize,
}

impl Default for TurnBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnBuffer {
    /// Create buffer with the default size limit
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_MAX_TURN_BYTES)
    }

    /// Create buffer with an explicit size limit
    #[inline]
    #[must_use]
    pub fn with_limit(max_bytes: usize) -> Self {
        Self {
            text: String::new(),
            max_bytes,
        }
    }

    /// Append a streamed chunk
    ///
    /// # Errors
    /// Returns [`DirectiveError::TurnTooLarge`] if the chunk would push the
    /// turn past the limit; the buffer is left unchanged.
    pub fn push(&mut self, chunk: &str) -> Result<(), DirectiveError> {
        let attempted = self.text.len() + chunk.len();
        if attempted > self.max_bytes {
            return Err(DirectiveError::TurnTooLarge {
                limit: self.max_bytes,
                attempted,
            });
        }
        self.text.push_str(chunk);
        Ok(())
    }

    /// Bytes received so far
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether nothing has been received
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Complete the turn and release its text for extraction
    #[inline]
    #[must_use]
    pub fn finish(self) -> String {
        self.text
    }

    /// Abandon the turn
    #[inline]
    pub fn cancel(self) {
        tracing::debug!("Discarding {} bytes of cancelled turn", self.text.len());
    }
}
