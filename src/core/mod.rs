//! Core facade types and traits

pub mod call_site;
pub mod config;
pub mod error;
pub mod limits;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod output_format;
pub mod payload;
pub mod settings;
pub mod timestamp;

pub use call_site::CallSite;
pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use limits::{
    DEFAULT_LOG_FILE_BACKUP_NUMBER, DEFAULT_LOG_FILE_SIZE, LOG_LINE_SIZE_MAX, LOG_LINE_SIZE_MIN,
};
pub use log_entry::{LogRecord, RecordBody};
pub use log_level::{severity_from_name, severity_name, Severity};
pub use logger::Logger;
pub use metrics::DispatchMetrics;
pub use output_format::OutputFormat;
pub use payload::BinaryPayload;
pub use settings::LoggerSettings;
pub use timestamp::TimestampFormat;
