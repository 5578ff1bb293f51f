//! # Rust Log Facade
//!
//! A pluggable, level-filtered logging facade. Application code logs through
//! a fixed set of severity macros; whichever [`Logger`] is installed in the
//! [`registry`] decides whether each call is emitted and where it goes.
//!
//! ## Features
//!
//! - **Gate before format**: a filtered call evaluates none of its arguments
//! - **Bootstrap visibility**: before any logger is installed, text records go
//!   to stdout as `[LEVEL][file:line]message`
//! - **Inert defaults**: a logger overriding only part of [`Logger`] logs
//!   nothing for the rest
//! - **Loggers included**: console, rotating file, in-memory and discarding
//!
//! ## Quick start
//!
//! ```
//! use rust_log_facade::prelude::*;
//! use rust_log_facade::{info, state, trace};
//! use std::sync::Arc;
//!
//! let logger = Arc::new(MemoryLogger::new());
//! LoggerConfig::from_options(["level:WARN", "trace_log:on"])
//!     .unwrap()
//!     .apply(&*logger);
//! rust_log_facade::registry::install(logger.clone());
//!
//! info!("filtered by the WARN threshold");
//! state!(module: "pool", "idle={} busy={}", 3, 1);
//! trace!("enter handshake");
//!
//! assert_eq!(logger.messages(), vec!["idle=3 busy=1\n", "enter handshake\n"]);
//! ```

pub mod core;
pub mod dispatch;
pub mod loggers;
pub mod macros;
pub mod registry;

pub mod prelude {
    #[cfg(feature = "file")]
    pub use crate::loggers::FileLogger;
    pub use crate::loggers::{ConsoleLogger, DiscardLogger, FallbackLogger, MemoryLogger};
    pub use crate::core::{
        BinaryPayload, CallSite, LogRecord, Logger, LoggerConfig, LoggerError, LoggerSettings,
        OutputFormat, Result, Severity, TimestampFormat,
    };
}

#[cfg(feature = "file")]
pub use loggers::FileLogger;
pub use loggers::{ConsoleLogger, DiscardLogger, FallbackLogger, MemoryLogger};
pub use core::{
    severity_from_name, severity_name, BinaryPayload, CallSite, DispatchMetrics, LogRecord,
    Logger, LoggerConfig, LoggerError, LoggerSettings, OutputFormat, RecordBody, Result, Severity,
    TimestampFormat, DEFAULT_LOG_FILE_BACKUP_NUMBER, DEFAULT_LOG_FILE_SIZE, LOG_LINE_SIZE_MAX,
    LOG_LINE_SIZE_MIN,
};
