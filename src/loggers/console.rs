//! Console logger implementation

use crate::core::output_format::format_text;
use crate::core::{
    BinaryPayload, CallSite, LogRecord, Logger, LoggerSettings, Result, Severity, TimestampFormat,
};
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};

enum Target {
    /// ERROR and FATAL to stderr, everything else to stdout
    Std,
    Writer(Mutex<Box<dyn Write + Send>>),
}

/// Settings-gated text stream logger.
///
/// The `screen` toggle has no effect here: the console is the screen.
pub struct ConsoleLogger {
    settings: LoggerSettings,
    use_colors: bool,
    timestamp_format: TimestampFormat,
    target: Target,
}

impl ConsoleLogger {
    pub fn new() -> Self {
        Self {
            settings: LoggerSettings::new(),
            use_colors: cfg!(feature = "console"),
            timestamp_format: TimestampFormat::default(),
            target: Target::Std,
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            ..Self::new()
        }
    }

    /// Write every line, uncolored, to `writer`.
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            use_colors: false,
            target: Target::Writer(Mutex::new(Box::new(writer))),
            ..Self::new()
        }
    }

    /// # Examples
    ///
    /// ```
    /// use rust_log_facade::loggers::ConsoleLogger;
    /// use rust_log_facade::TimestampFormat;
    ///
    /// let logger = ConsoleLogger::new()
    ///     .with_timestamp_format(TimestampFormat::LocalDateTime);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn settings(&self) -> &LoggerSettings {
        &self.settings
    }

    fn write(&self, record: &LogRecord) {
        let line = format_text(record, &self.timestamp_format, self.use_colors);
        let result = match &self.target {
            Target::Std => match record.level() {
                Some(Severity::Error | Severity::Fatal) => io::stderr().lock().write_all(line.as_bytes()),
                _ => io::stdout().lock().write_all(line.as_bytes()),
            },
            Target::Writer(writer) => writer.lock().write_all(line.as_bytes()),
        };
        if let Err(e) = result {
            eprintln!("[LOGGER ERROR] Console output failed: {}", e);
        }
    }

    fn emit_text(&self, level: Severity, site: CallSite, module: Option<&str>, args: fmt::Arguments<'_>) {
        let message = self.settings.finish_message(args.to_string());
        self.write(&LogRecord::text(level, site, module, message));
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for ConsoleLogger {
    delegate_to_settings!();

    fn bin_log(&self, site: CallSite, module: Option<&str>, payload: BinaryPayload<'_>) {
        self.write(&LogRecord::binary(site, module, payload.as_bytes()));
    }

    fn name(&self) -> &str {
        "console"
    }

    fn flush(&self) -> Result<()> {
        match &self.target {
            Target::Std => {
                // Flush both stdout and stderr since we write to both
                io::stdout().flush()?;
                io::stderr().flush()?;
            }
            Target::Writer(writer) => writer.lock().flush()?,
        }
        Ok(())
    }
}
