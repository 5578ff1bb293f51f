//! Length-checked binary log payload

use super::error::{LoggerError, Result};
use super::limits::LOG_LINE_SIZE_MAX;
use std::ops::Deref;

/// An opaque byte payload for the binary log path.
///
/// Construction rejects anything longer than [`LOG_LINE_SIZE_MAX`], so the
/// length always fits the 16-bit field loggers carry it in. Oversized
/// payloads are never truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryPayload<'a> {
    bytes: &'a [u8],
}

impl<'a> BinaryPayload<'a> {
    /// Largest accepted payload, in bytes.
    pub const MAX_LEN: usize = LOG_LINE_SIZE_MAX;

    /// # Errors
    ///
    /// Returns [`LoggerError::PayloadTooLarge`] if `bytes` exceeds [`Self::MAX_LEN`].
    pub fn new(bytes: &'a [u8]) -> Result<Self> {
        if bytes.len() > Self::MAX_LEN {
            return Err(LoggerError::payload_too_large(bytes.len(), Self::MAX_LEN));
        }
        Ok(Self { bytes })
    }

    /// Payload length as carried on the wire.
    #[inline]
    pub fn len(&self) -> u16 {
        // MAX_LEN <= u16::MAX is checked in limits.rs
        self.bytes.len() as u16
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

impl Deref for BinaryPayload<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.bytes
    }
}

impl<'a> TryFrom<&'a [u8]> for BinaryPayload<'a> {
    type Error = LoggerError;

    fn try_from(bytes: &'a [u8]) -> Result<Self> {
        Self::new(bytes)
    }
}
