//! Dispatch counters
//!
//! Tracks what the dispatch layer did with calls that passed the gate:
//! forwarded them, rejected a binary payload, or caught a panicking logger.
//! Filtered calls are not counted; the gate does no work past the predicate.

use std::sync::atomic::{AtomicU64, Ordering};

/// # Example
///
/// ```
/// use rust_log_facade::DispatchMetrics;
///
/// let metrics = DispatchMetrics::new();
/// metrics.record_dispatched();
/// metrics.record_dispatched();
/// metrics.record_logger_panic();
///
/// assert_eq!(metrics.dispatched_count(), 2);
/// assert_eq!(metrics.panic_rate(), 50.0);
/// ```
#[derive(Debug)]
pub struct DispatchMetrics {
    /// Calls that passed the gate and reached an emission entry point
    dispatched: AtomicU64,

    /// Binary calls dropped because the payload was too large
    rejected_payloads: AtomicU64,

    /// Emission calls that panicked inside the logger
    logger_panics: AtomicU64,
}

impl DispatchMetrics {
    pub const fn new() -> Self {
        Self {
            dispatched: AtomicU64::new(0),
            rejected_payloads: AtomicU64::new(0),
            logger_panics: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn dispatched_count(&self) -> u64 {
        self.dispatched.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn rejected_payload_count(&self) -> u64 {
        self.rejected_payloads.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn logger_panic_count(&self) -> u64 {
        self.logger_panics.load(Ordering::Relaxed)
    }

    /// Returns the previous value, like the other `record_*` methods.
    #[inline]
    pub fn record_dispatched(&self) -> u64 {
        self.dispatched.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_rejected_payload(&self) -> u64 {
        self.rejected_payloads.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_logger_panic(&self) -> u64 {
        self.logger_panics.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of dispatched calls whose logger panicked, as a percentage (0.0 - 100.0)
    pub fn panic_rate(&self) -> f64 {
        let dispatched = self.dispatched_count() as f64;
        if dispatched == 0.0 {
            0.0
        } else {
            (self.logger_panic_count() as f64 / dispatched) * 100.0
        }
    }

    pub fn reset(&self) {
        self.dispatched.store(0, Ordering::Relaxed);
        self.rejected_payloads.store(0, Ordering::Relaxed);
        self.logger_panics.store(0, Ordering::Relaxed);
    }
}

impl Default for DispatchMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for DispatchMetrics {
    /// Snapshot of the current values
    fn clone(&self) -> Self {
        Self {
            dispatched: AtomicU64::new(self.dispatched_count()),
            rejected_payloads: AtomicU64::new(self.rejected_payload_count()),
            logger_panics: AtomicU64::new(self.logger_panic_count()),
        }
    }
}
