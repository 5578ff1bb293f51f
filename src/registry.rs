//! Process-wide logger handle
//!
//! The handle starts empty. While it is empty, [`logger`] hands out a shared
//! [`FallbackLogger`] that writes every text record to stdout, so callers
//! never branch on whether setup has run yet. [`replace_fallback`] points
//! that sentinel at another writer.
//!
//! The lock guards only the `Arc` swap. Readers clone the `Arc` and release
//! the lock before gating or formatting anything.

use crate::core::{Logger, LoggerError, Result};
use crate::loggers::FallbackLogger;
use parking_lot::RwLock;
use std::sync::Arc;

static INSTALLED: RwLock<Option<Arc<dyn Logger>>> = RwLock::new(None);
static FALLBACK: RwLock<Option<Arc<FallbackLogger>>> = RwLock::new(None);

/// Serializes unit tests that touch the global handle.
#[cfg(test)]
pub(crate) static TEST_LOCK: parking_lot::Mutex<()> = parking_lot::Mutex::new(());

/// Install `logger`, returning whichever logger it replaces.
///
/// # Examples
///
/// ```
/// use rust_log_facade::prelude::*;
/// use std::sync::Arc;
///
/// let memory = Arc::new(MemoryLogger::new());
/// rust_log_facade::registry::install(memory.clone());
///
/// rust_log_facade::warn!(module: "net", "peer {} unreachable", "10.0.0.7");
/// assert_eq!(memory.messages(), vec!["peer 10.0.0.7 unreachable\n"]);
///
/// rust_log_facade::registry::uninstall();
/// ```
pub fn install(logger: Arc<dyn Logger>) -> Option<Arc<dyn Logger>> {
    INSTALLED.write().replace(logger)
}

/// Install `logger` only if the handle is still empty.
///
/// # Errors
///
/// Returns [`LoggerError::AlreadyInstalled`] and leaves the current logger in
/// place if one is already installed.
pub fn try_install(logger: Arc<dyn Logger>) -> Result<()> {
    let mut slot = INSTALLED.write();
    if slot.is_some() {
        return Err(LoggerError::AlreadyInstalled);
    }
    *slot = Some(logger);
    Ok(())
}

/// Empty the handle. Later calls go to the fallback again.
pub fn uninstall() -> Option<Arc<dyn Logger>> {
    INSTALLED.write().take()
}

pub fn is_installed() -> bool {
    INSTALLED.read().is_some()
}

/// The installed logger, if any.
pub fn installed() -> Option<Arc<dyn Logger>> {
    INSTALLED.read().clone()
}

/// The logger that log calls currently go to.
#[inline]
pub fn logger() -> Arc<dyn Logger> {
    match INSTALLED.read().as_ref() {
        Some(logger) => Arc::clone(logger),
        None => fallback(),
    }
}

/// The shared sentinel used while nothing is installed. Writes to stdout
/// unless [`replace_fallback`] has swapped it.
pub fn fallback() -> Arc<dyn Logger> {
    if let Some(fallback) = FALLBACK.read().as_ref() {
        return Arc::clone(fallback) as Arc<dyn Logger>;
    }
    let mut slot = FALLBACK.write();
    let fallback = slot.get_or_insert_with(|| Arc::new(FallbackLogger::stdout()));
    Arc::clone(fallback) as Arc<dyn Logger>
}

/// Swap the sentinel, returning the previous one if it had been created.
/// Restore bootstrap output with `replace_fallback(FallbackLogger::stdout())`.
///
/// # Examples
///
/// ```
/// use rust_log_facade::prelude::*;
/// use rust_log_facade::registry;
///
/// registry::uninstall();
/// registry::replace_fallback(FallbackLogger::with_writer(std::io::sink()));
/// rust_log_facade::info!("swallowed");
/// registry::replace_fallback(FallbackLogger::stdout());
/// ```
pub fn replace_fallback(fallback: FallbackLogger) -> Option<Arc<FallbackLogger>> {
    FALLBACK.write().replace(Arc::new(fallback))
}

/// Flush the installed logger. A no-op while the handle is empty.
pub fn flush() -> Result<()> {
    match installed() {
        Some(logger) => logger.flush(),
        None => Ok(()),
    }
}
