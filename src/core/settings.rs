//! Runtime configuration shared by the bundled loggers
//!
//! [`LoggerSettings`] is the flag and threshold bundle behind a concrete
//! logger's toggles, setters and gating predicates. Every field is an atomic,
//! so it can be changed at any time from any thread; a change applies to the
//! next emission and never rewrites lines already written.

use super::limits::{
    DEFAULT_LOG_FILE_BACKUP_NUMBER, DEFAULT_LOG_FILE_SIZE, LOG_LINE_SIZE_MAX, LOG_LINE_SIZE_MIN,
};
use super::log_level::Severity;
use super::output_format::{add_dot, add_newline, ends_with_line_terminator, truncate_to};
use std::sync::atomic::{AtomicBool, AtomicU16, AtomicU32, AtomicU8, AtomicUsize, Ordering};

/// Defaults: screen, binary and trace logging off; state logging on;
/// auto-dot off; auto-newline on; threshold `INFO`; 100 MiB files; 10 backups.
#[derive(Debug)]
pub struct LoggerSettings {
    screen: AtomicBool,
    bin_log: AtomicBool,
    trace_log: AtomicBool,
    state_log: AtomicBool,
    auto_adddot: AtomicBool,
    auto_newline: AtomicBool,
    level: AtomicU8,
    single_filesize: AtomicU32,
    backup_number: AtomicU16,
    max_line_size: AtomicUsize,
}

impl LoggerSettings {
    pub const fn new() -> Self {
        Self {
            screen: AtomicBool::new(false),
            bin_log: AtomicBool::new(false),
            trace_log: AtomicBool::new(false),
            state_log: AtomicBool::new(true),
            auto_adddot: AtomicBool::new(false),
            auto_newline: AtomicBool::new(true),
            level: AtomicU8::new(Severity::Info.as_u8()),
            single_filesize: AtomicU32::new(DEFAULT_LOG_FILE_SIZE),
            backup_number: AtomicU16::new(DEFAULT_LOG_FILE_BACKUP_NUMBER),
            max_line_size: AtomicUsize::new(LOG_LINE_SIZE_MAX),
        }
    }

    #[inline]
    pub fn enable_screen(&self, enabled: bool) {
        self.screen.store(enabled, Ordering::Relaxed);
    }

    #[inline]
    pub fn enable_bin_log(&self, enabled: bool) {
        self.bin_log.store(enabled, Ordering::Relaxed);
    }

    #[inline]
    pub fn enable_trace_log(&self, enabled: bool) {
        self.trace_log.store(enabled, Ordering::Relaxed);
    }

    #[inline]
    pub fn enable_state_log(&self, enabled: bool) {
        self.state_log.store(enabled, Ordering::Relaxed);
    }

    #[inline]
    pub fn enable_auto_adddot(&self, enabled: bool) {
        self.auto_adddot.store(enabled, Ordering::Relaxed);
    }

    #[inline]
    pub fn enable_auto_newline(&self, enabled: bool) {
        self.auto_newline.store(enabled, Ordering::Relaxed);
    }

    /// Set the ordered-band threshold.
    ///
    /// `State` and `Trace` are not thresholds; they are ignored and `false`
    /// is returned.
    pub fn set_level(&self, level: Severity) -> bool {
        if !level.is_ordered() {
            return false;
        }
        self.level.store(level.as_u8(), Ordering::Relaxed);
        true
    }

    /// Clamped to at least [`LOG_LINE_SIZE_MIN`] bytes.
    pub fn set_single_filesize(&self, filesize: u32) {
        let floor = LOG_LINE_SIZE_MIN as u32;
        self.single_filesize
            .store(filesize.max(floor), Ordering::Relaxed);
    }

    #[inline]
    pub fn set_backup_number(&self, backup_number: u16) {
        self.backup_number.store(backup_number, Ordering::Relaxed);
    }

    /// Clamped into `[LOG_LINE_SIZE_MIN, LOG_LINE_SIZE_MAX]`.
    pub fn set_max_line_size(&self, size: usize) {
        self.max_line_size.store(
            size.clamp(LOG_LINE_SIZE_MIN, LOG_LINE_SIZE_MAX),
            Ordering::Relaxed,
        );
    }

    #[inline]
    pub fn screen(&self) -> bool {
        self.screen.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn bin_log(&self) -> bool {
        self.bin_log.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn trace_log(&self) -> bool {
        self.trace_log.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn state_log(&self) -> bool {
        self.state_log.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn auto_adddot(&self) -> bool {
        self.auto_adddot.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn auto_newline(&self) -> bool {
        self.auto_newline.load(Ordering::Relaxed)
    }

    pub fn level(&self) -> Severity {
        Severity::try_from(self.level.load(Ordering::Relaxed)).unwrap_or(Severity::Info)
    }

    #[inline]
    pub fn single_filesize(&self) -> u32 {
        self.single_filesize.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn backup_number(&self) -> u16 {
        self.backup_number.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn max_line_size(&self) -> usize {
        self.max_line_size.load(Ordering::Relaxed)
    }

    /// Gating predicate: ordered severities against the threshold, `State`
    /// and `Trace` against their own toggles.
    #[inline]
    pub fn enabled(&self, level: Severity) -> bool {
        match level {
            Severity::State => self.state_log(),
            Severity::Trace => self.trace_log(),
            ordered => ordered.as_u8() >= self.level.load(Ordering::Relaxed),
        }
    }

    /// Apply line-size truncation and the auto-punctuation toggles to a
    /// rendered message. The finished message, suffixes included, never
    /// exceeds `max_line_size` bytes.
    pub fn finish_message(&self, mut message: String) -> String {
        let max = self.max_line_size();
        let (dot, newline) = (self.auto_adddot(), self.auto_newline());
        if message.len() + suffix_len(&message, dot, newline) > max {
            truncate_to(&mut message, max - usize::from(dot) - usize::from(newline));
        }
        if dot {
            add_dot(&mut message);
        }
        if newline {
            add_newline(&mut message);
        }
        message
    }
}

/// Bytes the enabled auto-punctuation would append to `message`.
fn suffix_len(message: &str, dot: bool, newline: bool) -> usize {
    let terminated = ends_with_line_terminator(message);
    let needs_dot = dot && !terminated && !message.ends_with('.');
    let needs_newline = newline && !terminated;
    usize::from(needs_dot) + usize::from(needs_newline)
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = LoggerSettings::new();
        assert!(!settings.screen());
        assert!(!settings.bin_log());
        assert!(!settings.trace_log());
        assert!(settings.state_log());
        assert!(!settings.auto_adddot());
        assert!(settings.auto_newline());
        assert_eq!(settings.level(), Severity::Info);
        assert_eq!(settings.single_filesize(), 104_857_600);
        assert_eq!(settings.backup_number(), 10);
        assert_eq!(settings.max_line_size(), LOG_LINE_SIZE_MAX);
    }

    #[test]
    fn test_threshold_boundary() {
        let settings = LoggerSettings::new();
        settings.set_level(Severity::Info);
        assert!(!settings.enabled(Severity::Detail));
        assert!(!settings.enabled(Severity::Debug));
        assert!(settings.enabled(Severity::Info));
        assert!(settings.enabled(Severity::Warn));
        assert!(settings.enabled(Severity::Error));
        assert!(settings.enabled(Severity::Fatal));
    }

    #[test]
    fn test_state_and_trace_ignore_threshold() {
        let settings = LoggerSettings::new();
        settings.enable_trace_log(true);
        settings.set_level(Severity::Fatal);
        assert!(settings.enabled(Severity::State));
        assert!(settings.enabled(Severity::Trace));

        settings.enable_trace_log(false);
        settings.set_level(Severity::Detail);
        assert!(!settings.enabled(Severity::Trace));
    }

    #[test]
    fn test_out_of_band_threshold_is_ignored() {
        let settings = LoggerSettings::new();
        settings.set_level(Severity::Warn);
        assert!(!settings.set_level(Severity::Trace));
        assert!(!settings.set_level(Severity::State));
        assert_eq!(settings.level(), Severity::Warn);
    }

    #[test]
    fn test_size_clamping() {
        let settings = LoggerSettings::new();
        settings.set_single_filesize(10);
        assert_eq!(settings.single_filesize(), LOG_LINE_SIZE_MIN as u32);

        settings.set_max_line_size(1);
        assert_eq!(settings.max_line_size(), LOG_LINE_SIZE_MIN);
        settings.set_max_line_size(1 << 20);
        assert_eq!(settings.max_line_size(), LOG_LINE_SIZE_MAX);
    }

    #[test]
    fn test_finish_message_applies_toggles() {
        let settings = LoggerSettings::new();
        settings.enable_auto_newline(false);
        assert_eq!(settings.finish_message("plain".into()), "plain");

        settings.enable_auto_adddot(true);
        assert_eq!(settings.finish_message("plain".into()), "plain.");

        settings.enable_auto_newline(true);
        assert_eq!(settings.finish_message("plain".into()), "plain.\n");
        assert_eq!(settings.finish_message("done.\n".into()), "done.\n");
        assert_eq!(settings.finish_message("line\n".into()), "line\n");
    }

    #[test]
    fn test_finish_message_truncates_long_lines() {
        let settings = LoggerSettings::new();
        settings.enable_auto_newline(false);
        settings.set_max_line_size(LOG_LINE_SIZE_MIN);
        let message = "x".repeat(1000);
        assert_eq!(settings.finish_message(message).len(), LOG_LINE_SIZE_MIN);
    }

    #[test]
    fn test_truncation_leaves_room_for_suffixes() {
        let settings = LoggerSettings::new();
        settings.enable_auto_adddot(true);
        settings.set_max_line_size(256);

        let finished = settings.finish_message("x".repeat(1000));
        assert_eq!(finished.len(), 256);
        assert!(finished.ends_with("x.\n"));

        settings.set_max_line_size(LOG_LINE_SIZE_MAX);
        let finished = settings.finish_message("y".repeat(LOG_LINE_SIZE_MAX * 2));
        assert_eq!(finished.len(), LOG_LINE_SIZE_MAX);
        assert!(finished.ends_with("y.\n"));
    }

    #[test]
    fn test_message_at_limit_with_suffix_is_cut() {
        let settings = LoggerSettings::new();
        settings.set_max_line_size(256);

        // Fits exactly once the newline is added
        let finished = settings.finish_message("a".repeat(255));
        assert_eq!(finished.len(), 256);
        assert!(finished.ends_with("a\n"));

        let finished = settings.finish_message("a".repeat(256));
        assert_eq!(finished.len(), 256);
        assert!(finished.ends_with("a\n"));

        // Already terminated: nothing to reserve
        let finished = settings.finish_message(format!("{}\n", "b".repeat(255)));
        assert_eq!(finished.len(), 256);
        assert!(finished.ends_with("b\n"));
    }
}
