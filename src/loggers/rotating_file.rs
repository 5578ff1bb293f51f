//! Rotating file logger
//!
//! Appends rendered records to a file and rotates it once it reaches the
//! configured `single_filesize`. Rotated files are named `<file>.1` (newest)
//! through `<file>.<backup_number>` (oldest); anything older is deleted.
//! Both limits are read from [`LoggerSettings`] at each rotation, so changing
//! them at runtime affects the next rotation only.

use super::echo_to_screen;
use crate::core::{
    BinaryPayload, CallSite, LogRecord, Logger, LoggerError, LoggerSettings, OutputFormat, Result,
    Severity, TimestampFormat,
};
use parking_lot::Mutex;
use std::ffi::OsString;
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Consecutive failures to delete the oldest backup before rotation gives up
const MAX_DELETION_FAILURES: usize = 5;

/// # Examples
///
/// ```no_run
/// use rust_log_facade::prelude::*;
/// use std::sync::Arc;
///
/// let logger = FileLogger::new("/var/log/app.log")
///     .unwrap()
///     .with_compression(true);
/// logger.set_single_filesize(50 * 1024 * 1024);
/// logger.set_backup_number(7);
///
/// rust_log_facade::registry::install(Arc::new(logger));
/// ```
pub struct FileLogger {
    settings: LoggerSettings,
    state: Mutex<FileState>,
    output_format: OutputFormat,
    timestamp_format: TimestampFormat,
    compress: bool,
}

struct FileState {
    base_path: PathBuf,
    writer: Option<BufWriter<File>>,
    current_size: u64,
    deletion_failure_count: usize,
}

fn open_append(path: &Path) -> Result<(File, u64)> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LoggerError::file_logger(path.display().to_string(), format!("Failed to open: {}", e)))?;
    let size = file
        .metadata()
        .map_err(|e| {
            LoggerError::file_logger(
                path.display().to_string(),
                format!("Cannot access file metadata: {}", e),
            )
        })?
        .len();
    Ok((file, size))
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

impl FileState {
    fn backup_path(&self, index: usize) -> PathBuf {
        with_suffix(&self.base_path, &format!(".{}", index))
    }

    fn write(&mut self, line: &str) -> Result<()> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| LoggerError::writer("File writer not initialized"))?;
        writer.write_all(line.as_bytes()).map_err(|e| {
            LoggerError::file_logger(
                self.base_path.display().to_string(),
                format!("Failed to write log line: {}", e),
            )
        })?;
        self.current_size += line.len() as u64;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }

    fn rotate(&mut self, max_backups: usize, compress: bool) -> Result<()> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush().map_err(|e| {
                LoggerError::file_rotation(
                    self.base_path.display().to_string(),
                    format!("Failed to flush before rotation: {}", e),
                )
            })?;
        }

        if max_backups == 0 {
            return self.truncate();
        }

        self.remove_oldest(max_backups)?;

        for i in (1..max_backups).rev() {
            for suffix in ["", ".gz"] {
                let old_path = with_suffix(&self.backup_path(i), suffix);
                if old_path.exists() {
                    let new_path = with_suffix(&self.backup_path(i + 1), suffix);
                    fs::rename(&old_path, &new_path).map_err(|e| {
                        LoggerError::file_rotation(
                            old_path.display().to_string(),
                            format!("Failed to shift backup: {}", e),
                        )
                    })?;
                }
            }
        }

        let newest = self.backup_path(1);
        if self.base_path.exists() {
            fs::rename(&self.base_path, &newest).map_err(|e| {
                LoggerError::file_rotation(
                    self.base_path.display().to_string(),
                    format!("Failed to rotate current log file: {}", e),
                )
            })?;
            if compress {
                compress_file(&newest)?;
            }
        }

        self.reopen()
    }

    fn remove_oldest(&mut self, max_backups: usize) -> Result<()> {
        let oldest = self.backup_path(max_backups);
        let mut deletion_failed = false;

        for path in [with_suffix(&oldest, ".gz"), oldest] {
            if path.exists() {
                if let Err(e) = fs::remove_file(&path) {
                    deletion_failed = true;
                    eprintln!(
                        "[WARN] Failed to remove oldest backup {}: {} (failure #{}/{})",
                        path.display(),
                        e,
                        self.deletion_failure_count + 1,
                        MAX_DELETION_FAILURES
                    );
                }
            }
        }

        if !deletion_failed {
            self.deletion_failure_count = 0;
            return Ok(());
        }

        self.deletion_failure_count += 1;
        if self.deletion_failure_count >= MAX_DELETION_FAILURES {
            return Err(LoggerError::file_rotation(
                self.base_path.display().to_string(),
                format!(
                    "Rotation aborted: failed to delete old backups {} consecutive times",
                    self.deletion_failure_count
                ),
            ));
        }
        Ok(())
    }

    fn truncate(&mut self) -> Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.base_path)
            .map_err(|e| {
                LoggerError::file_rotation(
                    self.base_path.display().to_string(),
                    format!("Failed to truncate log file: {}", e),
                )
            })?;
        self.writer = Some(BufWriter::new(file));
        self.current_size = 0;
        Ok(())
    }

    fn reopen(&mut self) -> Result<()> {
        let (file, size) = open_append(&self.base_path)?;
        self.writer = Some(BufWriter::new(file));
        self.current_size = size;
        Ok(())
    }
}

/// Gzip `path` to `<path>.gz`, removing the original only once the
/// compressed copy is complete.
fn compress_file(path: &Path) -> Result<()> {
    let gz_path = with_suffix(path, ".gz");
    let temp_path = with_suffix(path, ".gz.tmp");

    let result = (|| -> Result<()> {
        let mut reader = BufReader::new(File::open(path)?);
        let output = BufWriter::new(File::create(&temp_path)?);
        let mut encoder = flate2::write::GzEncoder::new(output, flate2::Compression::default());
        std::io::copy(&mut reader, &mut encoder)?;
        encoder.finish()?.flush()?;
        fs::rename(&temp_path, &gz_path)?;
        Ok(())
    })();

    if let Err(e) = result {
        let _ = fs::remove_file(&temp_path);
        return Err(LoggerError::file_rotation(
            path.display().to_string(),
            format!("Failed to compress backup: {}", e),
        ));
    }

    if let Err(e) = fs::remove_file(path) {
        eprintln!(
            "[WARN] Compressed {} but failed to remove the original: {}",
            path.display(),
            e
        );
    }
    Ok(())
}

impl FileLogger {
    /// Open (or create) `path` for appending.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory or the file cannot be created.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let base_path = path.as_ref().to_path_buf();

        if let Some(parent) = base_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                LoggerError::io_operation(
                    "create log directory",
                    format!("Failed to create directory '{}'", parent.display()),
                    e,
                )
            })?;
        }

        let (file, current_size) = open_append(&base_path)?;

        Ok(Self {
            settings: LoggerSettings::new(),
            state: Mutex::new(FileState {
                base_path,
                writer: Some(BufWriter::new(file)),
                current_size,
                deletion_failure_count: 0,
            }),
            output_format: OutputFormat::default(),
            timestamp_format: TimestampFormat::default(),
            compress: false,
        })
    }

    /// Gzip rotated backups (`<file>.N.gz`).
    #[must_use]
    pub fn with_compression(mut self, enabled: bool) -> Self {
        self.compress = enabled;
        self
    }

    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn settings(&self) -> &LoggerSettings {
        &self.settings
    }

    pub fn path(&self) -> PathBuf {
        self.state.lock().base_path.clone()
    }

    /// Bytes written to the active file, including what it held when opened.
    pub fn current_size(&self) -> u64 {
        self.state.lock().current_size
    }

    fn emit(&self, record: LogRecord) {
        if self.settings.screen() {
            echo_to_screen(&record, &self.timestamp_format);
        }
        let line = self.output_format.format(&record, &self.timestamp_format);
        if let Err(e) = self.write_line(&line) {
            eprintln!("[LOGGER ERROR] File logger failed: {}", e);
        }
    }

    fn write_line(&self, line: &str) -> Result<()> {
        let mut state = self.state.lock();

        if state.current_size >= u64::from(self.settings.single_filesize()) {
            let backups = usize::from(self.settings.backup_number());
            if let Err(e) = state.rotate(backups, self.compress) {
                eprintln!("[WARN] Log rotation failed: {}. Continuing with current file.", e);
                if state.writer.is_none() {
                    state.reopen()?;
                }
                // Let the file grow past the limit rather than retry on every line
                state.current_size = 0;
            }
        }

        state.write(line)
    }

    fn emit_text(&self, level: Severity, site: CallSite, module: Option<&str>, args: fmt::Arguments<'_>) {
        let message = self.settings.finish_message(args.to_string());
        self.emit(LogRecord::text(level, site, module, message));
    }
}

impl Logger for FileLogger {
    delegate_to_settings!();

    fn bin_log(&self, site: CallSite, module: Option<&str>, payload: BinaryPayload<'_>) {
        self.emit(LogRecord::binary(site, module, payload.as_bytes()));
    }

    fn name(&self) -> &str {
        "file"
    }

    fn flush(&self) -> Result<()> {
        self.state.lock().flush()
    }
}

impl Drop for FileLogger {
    fn drop(&mut self) {
        // Best effort flush - ignore errors during drop
        let _ = self.state.get_mut().flush();
    }
}
