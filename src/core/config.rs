//! Logger configuration surface
//!
//! Options come either as `key:value` strings (a config file line or a CLI
//! flag) or as a JSON document:
//!
//! | key               | values                               | default     |
//! |-------------------|--------------------------------------|-------------|
//! | `screen`          | `on` / `off`                         | `off`       |
//! | `bin_log`         | `on` / `off`                         | `off`       |
//! | `trace_log`       | `on` / `off`                         | `off`       |
//! | `state_log`       | `on` / `off`                         | `on`        |
//! | `auto_adddot`     | `on` / `off`                         | `off`       |
//! | `auto_newline`    | `on` / `off`                         | `on`        |
//! | `level`           | `DETAIL` `DEBUG` `INFO` `WARN` `ERROR` `FATAL` | `INFO` |
//! | `single_filesize` | bytes                                | `104857600` |
//! | `backup_number`   | count                                | `10`        |
//!
//! # Example
//!
//! ```
//! use rust_log_facade::prelude::*;
//!
//! let config = LoggerConfig::from_options(["level:WARN", "trace_log:on"]).unwrap();
//! let logger = MemoryLogger::new();
//! config.apply(&logger);
//!
//! assert!(!logger.enabled(Severity::Info));
//! assert!(logger.enabled(Severity::Warn));
//! assert!(logger.enabled(Severity::Trace));
//! ```

use super::error::{LoggerError, Result};
use super::limits::{DEFAULT_LOG_FILE_BACKUP_NUMBER, DEFAULT_LOG_FILE_SIZE};
use super::log_level::Severity;
use super::logger::Logger;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    pub screen: bool,
    pub bin_log: bool,
    pub trace_log: bool,
    pub state_log: bool,
    pub auto_adddot: bool,
    pub auto_newline: bool,
    pub level: Severity,
    pub single_filesize: u32,
    pub backup_number: u16,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            screen: false,
            bin_log: false,
            trace_log: false,
            state_log: true,
            auto_adddot: false,
            auto_newline: true,
            level: Severity::Info,
            single_filesize: DEFAULT_LOG_FILE_SIZE,
            backup_number: DEFAULT_LOG_FILE_BACKUP_NUMBER,
        }
    }
}

fn parse_switch(key: &str, value: &str) -> Result<bool> {
    match value {
        "on" => Ok(true),
        "off" => Ok(false),
        other => Err(LoggerError::config(
            key,
            format!("expected 'on' or 'off', got '{}'", other),
        )),
    }
}

fn parse_threshold(value: &str) -> Result<Severity> {
    let level: Severity = value
        .parse()
        .map_err(|e: LoggerError| LoggerError::config("level", e.to_string()))?;
    check_threshold(level)?;
    Ok(level)
}

fn check_threshold(level: Severity) -> Result<()> {
    if level.is_ordered() {
        Ok(())
    } else {
        Err(LoggerError::config(
            "level",
            format!("{} cannot be used as a threshold", level),
        ))
    }
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one `key:value` option.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::InvalidConfiguration`] for a malformed option,
    /// an unknown key or a bad value. `self` is left unchanged on error.
    pub fn parse_option(&mut self, option: &str) -> Result<()> {
        let (key, value) = option
            .split_once(':')
            .ok_or_else(|| LoggerError::config(option, "expected 'key:value'"))?;
        let (key, value) = (key.trim(), value.trim());

        match key {
            "screen" => self.screen = parse_switch(key, value)?,
            "bin_log" => self.bin_log = parse_switch(key, value)?,
            "trace_log" => self.trace_log = parse_switch(key, value)?,
            "state_log" => self.state_log = parse_switch(key, value)?,
            "auto_adddot" => self.auto_adddot = parse_switch(key, value)?,
            "auto_newline" => self.auto_newline = parse_switch(key, value)?,
            "level" => self.level = parse_threshold(value)?,
            "single_filesize" => {
                self.single_filesize = value
                    .parse()
                    .map_err(|e| LoggerError::config(key, format!("'{}': {}", value, e)))?;
            }
            "backup_number" => {
                self.backup_number = value
                    .parse()
                    .map_err(|e| LoggerError::config(key, format!("'{}': {}", value, e)))?;
            }
            unknown => return Err(LoggerError::config(unknown, "unknown option")),
        }
        Ok(())
    }

    /// Build a configuration from defaults plus a list of `key:value` options.
    pub fn from_options<I, S>(options: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();
        for option in options {
            config.parse_option(option.as_ref())?;
        }
        Ok(config)
    }

    /// Parse a JSON document. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        check_threshold(self.level)
    }

    /// Push every setting into `logger`.
    pub fn apply(&self, logger: &dyn Logger) {
        logger.enable_screen(self.screen);
        logger.enable_bin_log(self.bin_log);
        logger.enable_trace_log(self.trace_log);
        logger.enable_state_log(self.state_log);
        logger.enable_auto_adddot(self.auto_adddot);
        logger.enable_auto_newline(self.auto_newline);
        logger.set_log_level(self.level);
        logger.set_single_filesize(self.single_filesize);
        logger.set_backup_number(self.backup_number);
    }
}
