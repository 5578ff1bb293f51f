//! Logger that keeps every inert default

use crate::core::Logger;

/// Emits nothing: every predicate is false and every member a no-op.
///
/// Install it to silence the fallback output entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardLogger;

impl Logger for DiscardLogger {
    fn name(&self) -> &str {
        "discard"
    }
}
