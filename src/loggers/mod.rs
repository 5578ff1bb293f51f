//! Logger implementations

/// Forward the toggle, setter and gating members of [`Logger`](crate::Logger)
/// to a `settings: LoggerSettings` field, and the text emission members to
/// an inherent `emit_text(level, site, module, args)`.
macro_rules! delegate_to_settings {
    () => {
        fn enable_screen(&self, enabled: bool) {
            self.settings.enable_screen(enabled);
        }
        fn enable_bin_log(&self, enabled: bool) {
            self.settings.enable_bin_log(enabled);
        }
        fn enable_trace_log(&self, enabled: bool) {
            self.settings.enable_trace_log(enabled);
        }
        fn enable_state_log(&self, enabled: bool) {
            self.settings.enable_state_log(enabled);
        }
        fn enable_auto_adddot(&self, enabled: bool) {
            self.settings.enable_auto_adddot(enabled);
        }
        fn enable_auto_newline(&self, enabled: bool) {
            self.settings.enable_auto_newline(enabled);
        }
        fn set_log_level(&self, level: $crate::Severity) {
            self.settings.set_level(level);
        }
        fn set_single_filesize(&self, filesize: u32) {
            self.settings.set_single_filesize(filesize);
        }
        fn set_backup_number(&self, backup_number: u16) {
            self.settings.set_backup_number(backup_number);
        }

        fn enabled_bin(&self) -> bool {
            self.settings.bin_log()
        }
        fn enabled_detail(&self) -> bool {
            self.settings.enabled($crate::Severity::Detail)
        }
        fn enabled_debug(&self) -> bool {
            self.settings.enabled($crate::Severity::Debug)
        }
        fn enabled_info(&self) -> bool {
            self.settings.enabled($crate::Severity::Info)
        }
        fn enabled_warn(&self) -> bool {
            self.settings.enabled($crate::Severity::Warn)
        }
        fn enabled_error(&self) -> bool {
            self.settings.enabled($crate::Severity::Error)
        }
        fn enabled_fatal(&self) -> bool {
            self.settings.enabled($crate::Severity::Fatal)
        }
        fn enabled_state(&self) -> bool {
            self.settings.enabled($crate::Severity::State)
        }
        fn enabled_trace(&self) -> bool {
            self.settings.enabled($crate::Severity::Trace)
        }

        fn log_detail(&self, site: $crate::CallSite, module: Option<&str>, args: ::std::fmt::Arguments<'_>) {
            self.emit_text($crate::Severity::Detail, site, module, args);
        }
        fn log_debug(&self, site: $crate::CallSite, module: Option<&str>, args: ::std::fmt::Arguments<'_>) {
            self.emit_text($crate::Severity::Debug, site, module, args);
        }
        fn log_info(&self, site: $crate::CallSite, module: Option<&str>, args: ::std::fmt::Arguments<'_>) {
            self.emit_text($crate::Severity::Info, site, module, args);
        }
        fn log_warn(&self, site: $crate::CallSite, module: Option<&str>, args: ::std::fmt::Arguments<'_>) {
            self.emit_text($crate::Severity::Warn, site, module, args);
        }
        fn log_error(&self, site: $crate::CallSite, module: Option<&str>, args: ::std::fmt::Arguments<'_>) {
            self.emit_text($crate::Severity::Error, site, module, args);
        }
        fn log_fatal(&self, site: $crate::CallSite, module: Option<&str>, args: ::std::fmt::Arguments<'_>) {
            self.emit_text($crate::Severity::Fatal, site, module, args);
        }
        fn log_state(&self, site: $crate::CallSite, module: Option<&str>, args: ::std::fmt::Arguments<'_>) {
            self.emit_text($crate::Severity::State, site, module, args);
        }
        fn log_trace(&self, site: $crate::CallSite, module: Option<&str>, args: ::std::fmt::Arguments<'_>) {
            self.emit_text($crate::Severity::Trace, site, module, args);
        }
    };
}

pub mod console;
pub mod discard;
pub mod fallback;
pub mod memory;
#[cfg(feature = "file")]
pub mod rotating_file;

pub use console::ConsoleLogger;
pub use discard::DiscardLogger;
pub use fallback::FallbackLogger;
pub use memory::MemoryLogger;
#[cfg(feature = "file")]
pub use rotating_file::FileLogger;

use crate::core::{output_format, LogRecord, TimestampFormat};
use std::io::{self, Write};

/// Echo a record to standard output for loggers with `screen` switched on.
/// Every severity goes to stdout, in addition to the logger's own sink.
pub(crate) fn echo_to_screen(record: &LogRecord, timestamp_format: &TimestampFormat) {
    let mut out = io::stdout().lock();
    if let Err(e) = echo_to(&mut out, record, timestamp_format, cfg!(feature = "console")) {
        eprintln!("[LOGGER ERROR] Screen echo failed: {}", e);
    }
}

pub(crate) fn echo_to(
    out: &mut dyn Write,
    record: &LogRecord,
    timestamp_format: &TimestampFormat,
    use_colors: bool,
) -> io::Result<()> {
    let line = output_format::format_text(record, timestamp_format, use_colors);
    out.write_all(line.as_bytes())
}
