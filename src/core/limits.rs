//! Shared size limits and rotation defaults
//!
//! Do not hard-code these elsewhere; concrete loggers read them through
//! [`LoggerSettings`](super::LoggerSettings) so they can be changed per logger.

/// Smallest log line a logger may be configured for.
pub const LOG_LINE_SIZE_MIN: usize = 256;

/// Largest log line (32 KiB). Binary payload lengths travel in a `u16`, so
/// this must stay below 64 KiB.
pub const LOG_LINE_SIZE_MAX: usize = 32768;

/// Default size of a single log file before rotation (100 MiB).
pub const DEFAULT_LOG_FILE_SIZE: u32 = 104_857_600;

/// Default number of rotated backups kept, not counting the active file.
pub const DEFAULT_LOG_FILE_BACKUP_NUMBER: u16 = 10;

const _: () = assert!(LOG_LINE_SIZE_MAX <= u16::MAX as usize);
const _: () = assert!(LOG_LINE_SIZE_MIN <= LOG_LINE_SIZE_MAX);
