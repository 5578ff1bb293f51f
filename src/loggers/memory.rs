//! # In-Memory Logger
//!
//! Captures records instead of writing them anywhere, for tests and for
//! embedders that want to inspect log output programmatically. Gating,
//! toggles and auto-punctuation behave exactly as in the file logger.

use super::echo_to_screen;
use crate::core::{
    BinaryPayload, CallSite, LogRecord, Logger, LoggerSettings, Severity, TimestampFormat,
};
use parking_lot::Mutex;
use std::fmt;

/// # Example
///
/// ```
/// use rust_log_facade::prelude::*;
/// use std::sync::Arc;
///
/// let logger = Arc::new(MemoryLogger::new());
/// logger.set_log_level(Severity::Warn);
///
/// rust_log_facade::dispatch::log_to(
///     &*logger,
///     Severity::Error,
///     CallSite::caller(),
///     Some("db"),
///     format_args!("connection lost after {} retries", 3),
/// );
///
/// assert_eq!(logger.messages(), vec!["connection lost after 3 retries\n"]);
/// ```
#[derive(Debug, Default)]
pub struct MemoryLogger {
    settings: LoggerSettings,
    records: Mutex<Vec<LogRecord>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn settings(&self) -> &LoggerSettings {
        &self.settings
    }

    /// Copy of every captured record, oldest first.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    /// Finished text of every captured text record, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .filter_map(|record| record.message().map(String::from))
            .collect()
    }

    /// Remove and return every captured record.
    pub fn drain(&self) -> Vec<LogRecord> {
        std::mem::take(&mut *self.records.lock())
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    fn push(&self, record: LogRecord) {
        if self.settings.screen() {
            echo_to_screen(&record, &TimestampFormat::default());
        }
        self.records.lock().push(record);
    }

    fn emit_text(&self, level: Severity, site: CallSite, module: Option<&str>, args: fmt::Arguments<'_>) {
        let message = self.settings.finish_message(args.to_string());
        self.push(LogRecord::text(level, site, module, message));
    }
}

impl Logger for MemoryLogger {
    delegate_to_settings!();

    fn bin_log(&self, site: CallSite, module: Option<&str>, payload: BinaryPayload<'_>) {
        self.push(LogRecord::binary(site, module, payload.as_bytes()));
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> CallSite {
        CallSite::new("src/lib.rs", 1)
    }

    #[test]
    fn test_default_gating() {
        let logger = MemoryLogger::new();
        assert!(!logger.enabled(Severity::Debug));
        assert!(logger.enabled(Severity::Info));
        assert!(logger.enabled(Severity::State));
        assert!(!logger.enabled(Severity::Trace));
        assert!(!logger.enabled_bin());
    }

    #[test]
    fn test_toggles_reach_settings() {
        let logger = MemoryLogger::new();
        logger.enable_trace_log(true);
        logger.enable_bin_log(true);
        logger.enable_state_log(false);
        logger.set_log_level(Severity::Fatal);
        logger.set_backup_number(2);

        assert!(logger.enabled(Severity::Trace));
        assert!(logger.enabled_bin());
        assert!(!logger.enabled(Severity::State));
        assert!(!logger.enabled(Severity::Error));
        assert_eq!(logger.settings().backup_number(), 2);
    }

    #[test]
    fn test_captures_finished_messages() {
        let logger = MemoryLogger::new();
        logger.enable_auto_adddot(true);
        logger.log(Severity::Info, site(), Some("core"), format_args!("started {}", "ok"));
        logger.log(Severity::Warn, site(), None, format_args!("already done."));

        let records = logger.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].message(), Some("started ok.\n"));
        assert_eq!(records[0].module.as_deref(), Some("core"));
        assert_eq!(records[1].message(), Some("already done.\n"));
        assert_eq!(records[1].level(), Some(Severity::Warn));
    }

    #[test]
    fn test_toggle_changes_only_later_records() {
        let logger = MemoryLogger::new();
        logger.enable_auto_newline(false);
        logger.log(Severity::Info, site(), None, format_args!("first"));
        logger.enable_auto_adddot(true);
        logger.log(Severity::Info, site(), None, format_args!("second"));

        assert_eq!(logger.messages(), vec!["first", "second."]);
    }

    #[test]
    fn test_binary_records() {
        let logger = MemoryLogger::new();
        logger.bin_log(site(), Some("wire"), BinaryPayload::new(&[9, 8, 7]).unwrap());
        let records = logger.drain();
        assert_eq!(records[0].payload(), Some(&[9u8, 8, 7][..]));
        assert!(logger.is_empty());
    }
}
