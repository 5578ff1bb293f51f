//! Call-site dispatch
//!
//! Every log call runs the same two steps: ask the logger's gating predicate,
//! and only if it passes forward the call to the matching emission entry
//! point. The message is carried as [`fmt::Arguments`], so a filtered call
//! never renders anything. The macros in [`crate::macros`] go one step further
//! and skip building the arguments altogether.
//!
//! Emission runs inside `catch_unwind`: a logger that panics is reported on
//! stderr and counted in [`metrics`], and the caller continues normally.

use crate::core::{BinaryPayload, CallSite, DispatchMetrics, Logger, Severity};
use crate::registry;
use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

static METRICS: DispatchMetrics = DispatchMetrics::new();

/// Process-wide dispatch counters.
pub fn metrics() -> &'static DispatchMetrics {
    &METRICS
}

/// Gating step. A call that fails it does nothing further, not even counting.
#[inline]
pub fn gate(logger: &dyn Logger, level: Severity) -> bool {
    logger.enabled(level)
}

/// Gating step for the binary path.
#[inline]
pub fn bin_gate(logger: &dyn Logger) -> bool {
    logger.enabled_bin()
}

/// Forward to the emission entry point for `level` without consulting the gate.
pub fn emit(
    logger: &dyn Logger,
    level: Severity,
    site: CallSite,
    module: Option<&str>,
    args: fmt::Arguments<'_>,
) {
    METRICS.record_dispatched();
    let result = panic::catch_unwind(AssertUnwindSafe(|| logger.log(level, site, module, args)));
    if let Err(panic_info) = result {
        report_panic(logger, site, panic_info);
    }
}

/// Validate `bytes` and forward them to [`Logger::bin_log`] without consulting
/// the gate. Payloads longer than [`BinaryPayload::MAX_LEN`] are dropped.
pub fn bin_emit(logger: &dyn Logger, site: CallSite, module: Option<&str>, bytes: &[u8]) {
    let payload = match BinaryPayload::new(bytes) {
        Ok(payload) => payload,
        Err(e) => {
            METRICS.record_rejected_payload();
            eprintln!("[LOGGER ERROR] Binary record from {} dropped: {}", site, e);
            return;
        }
    };

    METRICS.record_dispatched();
    let result = panic::catch_unwind(AssertUnwindSafe(|| logger.bin_log(site, module, payload)));
    if let Err(panic_info) = result {
        report_panic(logger, site, panic_info);
    }
}

fn report_panic(logger: &dyn Logger, site: CallSite, panic_info: Box<dyn Any + Send>) {
    METRICS.record_logger_panic();
    let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    };
    eprintln!(
        "[LOGGER CRITICAL] Logger '{}' panicked on record from {}: {}",
        logger.name(),
        site,
        panic_msg
    );
}

/// Gate, then emit, against an explicit logger.
#[inline]
pub fn log_to(
    logger: &dyn Logger,
    level: Severity,
    site: CallSite,
    module: Option<&str>,
    args: fmt::Arguments<'_>,
) {
    if gate(logger, level) {
        emit(logger, level, site, module, args);
    }
}

/// Gate, then emit, against the registry's current logger. The call site is
/// the caller's location.
#[inline]
#[track_caller]
pub fn log(level: Severity, module: Option<&str>, args: fmt::Arguments<'_>) {
    let site = CallSite::caller();
    let logger = registry::logger();
    log_to(&*logger, level, site, module, args);
}

macro_rules! severity_fns {
    ($($(#[$attr:meta])* $name:ident => $level:ident;)+) => {
        $(
            $(#[$attr])*
            #[inline]
            #[track_caller]
            pub fn $name(module: Option<&str>, args: fmt::Arguments<'_>) {
                log(Severity::$level, module, args);
            }
        )+
    };
}

severity_fns! {
    detail => Detail;
    debug => Debug;
    /// # Example
    ///
    /// ```
    /// rust_log_facade::dispatch::info(Some("boot"), format_args!("listening on {}", 8080));
    /// ```
    info => Info;
    warn => Warn;
    error => Error;
    fatal => Fatal;
    state => State;
    trace => Trace;
}

/// Binary form of [`log_to`]. Dropped unless `enabled_bin()` passes.
#[inline]
pub fn bin_log_to(logger: &dyn Logger, site: CallSite, module: Option<&str>, bytes: &[u8]) {
    if bin_gate(logger) {
        bin_emit(logger, site, module, bytes);
    }
}

/// Binary form of [`log`]. With no logger installed the record is dropped.
#[inline]
#[track_caller]
pub fn bin_log(module: Option<&str>, bytes: &[u8]) {
    let site = CallSite::caller();
    let logger = registry::logger();
    bin_log_to(&*logger, site, module, bytes);
}
