//! Bootstrap output used while no logger is installed
//!
//! The registry hands out a [`FallbackLogger`] writing to stdout whenever its
//! handle is empty, so log statements are visible before setup code installs
//! a real logger. It performs no level gating and has no binary path.

use crate::core::output_format::format_fallback;
use crate::core::{CallSite, Logger, Result, Severity};
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};

pub struct FallbackLogger {
    out: Mutex<Box<dyn Write + Send>>,
    use_colors: bool,
}

impl FallbackLogger {
    /// Write to standard output, coloring the tag of DEBUG, WARN, ERROR and FATAL lines.
    pub fn stdout() -> Self {
        Self {
            out: Mutex::new(Box::new(io::stdout())),
            use_colors: cfg!(feature = "console"),
        }
    }

    /// Write uncolored lines to `writer`.
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            out: Mutex::new(Box::new(writer)),
            use_colors: false,
        }
    }

    fn write(&self, level: Severity, site: CallSite, args: fmt::Arguments<'_>) {
        let line = format_fallback(level, site, &args.to_string(), self.use_colors);
        if let Err(e) = self.out.lock().write_all(line.as_bytes()) {
            eprintln!("[LOGGER ERROR] Fallback output failed: {}", e);
        }
    }
}

impl Default for FallbackLogger {
    fn default() -> Self {
        Self::stdout()
    }
}

impl fmt::Debug for FallbackLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FallbackLogger")
            .field("use_colors", &self.use_colors)
            .finish_non_exhaustive()
    }
}

impl Logger for FallbackLogger {
    fn enabled_detail(&self) -> bool {
        true
    }
    fn enabled_debug(&self) -> bool {
        true
    }
    fn enabled_info(&self) -> bool {
        true
    }
    fn enabled_warn(&self) -> bool {
        true
    }
    fn enabled_error(&self) -> bool {
        true
    }
    fn enabled_fatal(&self) -> bool {
        true
    }
    fn enabled_state(&self) -> bool {
        true
    }
    fn enabled_trace(&self) -> bool {
        true
    }

    fn log_detail(&self, site: CallSite, _module: Option<&str>, args: fmt::Arguments<'_>) {
        self.write(Severity::Detail, site, args);
    }
    fn log_debug(&self, site: CallSite, _module: Option<&str>, args: fmt::Arguments<'_>) {
        self.write(Severity::Debug, site, args);
    }
    fn log_info(&self, site: CallSite, _module: Option<&str>, args: fmt::Arguments<'_>) {
        self.write(Severity::Info, site, args);
    }
    fn log_warn(&self, site: CallSite, _module: Option<&str>, args: fmt::Arguments<'_>) {
        self.write(Severity::Warn, site, args);
    }
    fn log_error(&self, site: CallSite, _module: Option<&str>, args: fmt::Arguments<'_>) {
        self.write(Severity::Error, site, args);
    }
    fn log_fatal(&self, site: CallSite, _module: Option<&str>, args: fmt::Arguments<'_>) {
        self.write(Severity::Fatal, site, args);
    }
    fn log_state(&self, site: CallSite, _module: Option<&str>, args: fmt::Arguments<'_>) {
        self.write(Severity::State, site, args);
    }
    fn log_trace(&self, site: CallSite, _module: Option<&str>, args: fmt::Arguments<'_>) {
        self.write(Severity::Trace, site, args);
    }

    fn name(&self) -> &str {
        "fallback"
    }

    fn flush(&self) -> Result<()> {
        self.out.lock().flush()?;
        Ok(())
    }
}
