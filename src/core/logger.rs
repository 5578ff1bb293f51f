//! The capability set every pluggable logger exposes
//!
//! Every member has an inert default: predicates answer `false`, toggles,
//! setters and emission points do nothing. A logger that overrides only part
//! of the surface therefore degrades to "logs nothing" for the rest.
//!
//! Loggers are shared through the registry as `Arc<dyn Logger>`, so every
//! member takes `&self`. Implementations keep their configuration in atomics
//! or behind locks; [`LoggerSettings`](super::LoggerSettings) bundles the
//! usual set and can be embedded and delegated to.
//!
//! # Example
//!
//! ```
//! use rust_log_facade::prelude::*;
//! use std::fmt;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! /// Counts errors and ignores everything else.
//! #[derive(Default)]
//! struct ErrorCounter(AtomicUsize);
//!
//! impl Logger for ErrorCounter {
//!     fn enabled_error(&self) -> bool {
//!         true
//!     }
//!
//!     fn log_error(&self, _site: CallSite, _module: Option<&str>, _args: fmt::Arguments<'_>) {
//!         self.0.fetch_add(1, Ordering::Relaxed);
//!     }
//! }
//!
//! let counter = ErrorCounter::default();
//! assert!(counter.enabled(Severity::Error));
//! assert!(!counter.enabled(Severity::Fatal));
//! ```

use super::call_site::CallSite;
use super::error::Result;
use super::log_level::Severity;
use super::payload::BinaryPayload;
use std::fmt;

pub trait Logger: Send + Sync {
    /// Also echo emitted lines to standard output.
    fn enable_screen(&self, _enabled: bool) {}
    /// Binary logging is off until switched on here.
    fn enable_bin_log(&self, _enabled: bool) {}
    /// Trace logging is off until switched on here.
    fn enable_trace_log(&self, _enabled: bool) {}
    /// Status snapshot logging.
    fn enable_state_log(&self, _enabled: bool) {}
    /// Append `.` to messages not already ending in `.` or a line terminator.
    fn enable_auto_adddot(&self, _enabled: bool) {}
    /// Append a line terminator to messages that lack one.
    fn enable_auto_newline(&self, _enabled: bool) {}
    /// Threshold for the ordered band. Never governs `State` or `Trace`.
    fn set_log_level(&self, _level: Severity) {}
    /// Suggested maximum size of a single log file, in bytes.
    fn set_single_filesize(&self, _filesize: u32) {}
    /// Rotated files to keep, not counting the one being written.
    fn set_backup_number(&self, _backup_number: u16) {}

    fn enabled_bin(&self) -> bool {
        false
    }
    fn enabled_detail(&self) -> bool {
        false
    }
    fn enabled_debug(&self) -> bool {
        false
    }
    fn enabled_info(&self) -> bool {
        false
    }
    fn enabled_warn(&self) -> bool {
        false
    }
    fn enabled_error(&self) -> bool {
        false
    }
    fn enabled_fatal(&self) -> bool {
        false
    }
    fn enabled_state(&self) -> bool {
        false
    }
    fn enabled_trace(&self) -> bool {
        false
    }

    fn log_detail(&self, _site: CallSite, _module: Option<&str>, _args: fmt::Arguments<'_>) {}
    fn log_debug(&self, _site: CallSite, _module: Option<&str>, _args: fmt::Arguments<'_>) {}
    fn log_info(&self, _site: CallSite, _module: Option<&str>, _args: fmt::Arguments<'_>) {}
    fn log_warn(&self, _site: CallSite, _module: Option<&str>, _args: fmt::Arguments<'_>) {}
    fn log_error(&self, _site: CallSite, _module: Option<&str>, _args: fmt::Arguments<'_>) {}
    fn log_fatal(&self, _site: CallSite, _module: Option<&str>, _args: fmt::Arguments<'_>) {}
    fn log_state(&self, _site: CallSite, _module: Option<&str>, _args: fmt::Arguments<'_>) {}
    fn log_trace(&self, _site: CallSite, _module: Option<&str>, _args: fmt::Arguments<'_>) {}

    /// Write a binary record. Only called while [`Logger::enabled_bin`] is true.
    fn bin_log(&self, _site: CallSite, _module: Option<&str>, _payload: BinaryPayload<'_>) {}

    fn name(&self) -> &str {
        "logger"
    }

    /// Push buffered output to its destination.
    fn flush(&self) -> Result<()> {
        Ok(())
    }

    /// Gating predicate for `level`.
    fn enabled(&self, level: Severity) -> bool {
        match level {
            Severity::Detail => self.enabled_detail(),
            Severity::Debug => self.enabled_debug(),
            Severity::Info => self.enabled_info(),
            Severity::Warn => self.enabled_warn(),
            Severity::Error => self.enabled_error(),
            Severity::Fatal => self.enabled_fatal(),
            Severity::State => self.enabled_state(),
            Severity::Trace => self.enabled_trace(),
        }
    }

    /// Emission entry point for `level`. Does not consult the gate.
    fn log(&self, level: Severity, site: CallSite, module: Option<&str>, args: fmt::Arguments<'_>) {
        match level {
            Severity::Detail => self.log_detail(site, module, args),
            Severity::Debug => self.log_debug(site, module, args),
            Severity::Info => self.log_info(site, module, args),
            Severity::Warn => self.log_warn(site, module, args),
            Severity::Error => self.log_error(site, module, args),
            Severity::Fatal => self.log_fatal(site, module, args),
            Severity::State => self.log_state(site, module, args),
            Severity::Trace => self.log_trace(site, module, args),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Bare;

    impl Logger for Bare {}

    #[derive(Default)]
    struct WarnOnly {
        seen: Mutex<Vec<(Severity, String)>>,
    }

    impl Logger for WarnOnly {
        fn enabled_warn(&self) -> bool {
            true
        }

        fn log_warn(&self, _site: CallSite, _module: Option<&str>, args: fmt::Arguments<'_>) {
            self.seen.lock().push((Severity::Warn, args.to_string()));
        }
    }

    #[test]
    fn test_defaults_are_inert() {
        let logger = Bare;
        for level in Severity::ALL {
            assert!(!logger.enabled(level));
        }
        assert!(!logger.enabled_bin());

        logger.enable_screen(true);
        logger.enable_trace_log(true);
        logger.set_log_level(Severity::Detail);
        assert!(!logger.enabled(Severity::Trace));
        assert!(!logger.enabled(Severity::Detail));

        logger.log(Severity::Fatal, CallSite::new("a.rs", 1), None, format_args!("dropped"));
        logger.bin_log(CallSite::new("a.rs", 2), None, BinaryPayload::new(b"x").unwrap());
        assert!(logger.flush().is_ok());
        assert_eq!(logger.name(), "logger");
    }

    #[test]
    fn test_generic_members_route_per_severity() {
        let logger = WarnOnly::default();
        assert!(logger.enabled(Severity::Warn));
        assert!(!logger.enabled(Severity::Error));

        logger.log(Severity::Warn, CallSite::new("a.rs", 1), None, format_args!("disk {}%", 91));
        logger.log(Severity::Error, CallSite::new("a.rs", 2), None, format_args!("ignored"));

        let seen = logger.seen.lock();
        assert_eq!(seen.as_slice(), &[(Severity::Warn, "disk 91%".to_string())]);
    }
}
