//! Message finishing and line rendering
//!
//! - auto-punctuation helpers (`add_dot`, `add_newline`) used by
//!   [`LoggerSettings::finish_message`](super::LoggerSettings::finish_message)
//! - [`OutputFormat`] for the text and JSON lines concrete loggers write
//! - the `[LEVEL][file:line]` rendering of the fallback path

use super::call_site::CallSite;
use super::log_entry::{LogRecord, RecordBody};
use super::log_level::Severity;
use super::timestamp::TimestampFormat;
use std::fmt::Write as _;

#[inline]
pub fn ends_with_line_terminator(message: &str) -> bool {
    message.ends_with('\n') || message.ends_with('\r')
}

/// Append `.` unless the message already ends in `.` or a line terminator.
pub fn add_dot(message: &mut String) {
    if !message.ends_with('.') && !ends_with_line_terminator(message) {
        message.push('.');
    }
}

/// Append `\n` unless the message already ends in a line terminator.
pub fn add_newline(message: &mut String) {
    if !ends_with_line_terminator(message) {
        message.push('\n');
    }
}

/// Cut `message` to at most `max` bytes without splitting a character.
pub fn truncate_to(message: &mut String, max: usize) {
    if message.len() <= max {
        return;
    }
    let mut cut = max;
    while !message.is_char_boundary(cut) {
        cut -= 1;
    }
    message.truncate(cut);
}

/// Lowercase hex, two digits per byte.
pub fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        let _ = write!(out, "{:02x}", byte);
    }
    out
}

/// Wrap `text` in the terminal color for `level`, if any.
#[cfg(feature = "console")]
pub fn paint(level: Severity, text: &str, use_colors: bool) -> String {
    use colored::Colorize;
    match level.color_code() {
        Some(color) if use_colors => text.color(color).to_string(),
        _ => text.to_string(),
    }
}

#[cfg(not(feature = "console"))]
pub fn paint(_level: Severity, text: &str, _use_colors: bool) -> String {
    text.to_string()
}

/// `[LEVEL][file:line]message`, newline-terminated.
pub fn format_fallback(level: Severity, site: CallSite, message: &str, use_colors: bool) -> String {
    let tag = format!("[{}][{}]", level.name(), site);
    let mut line = paint(level, &tag, use_colors);
    line.push_str(message);
    add_newline(&mut line);
    line
}

/// Line format for loggers that write [`LogRecord`]s
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `[2025-01-08T10:30:45.123Z][INFO][main][src/app.rs:12][net]Request processed`
    ///
    /// The message is written as finished by the logger's settings, so the
    /// line ends in a newline only when the message does.
    #[default]
    Text,

    /// One JSON object per line, always newline-terminated
    Json,
}

impl OutputFormat {
    pub fn format(&self, record: &LogRecord, timestamp_format: &TimestampFormat) -> String {
        match self {
            OutputFormat::Text => format_text(record, timestamp_format, false),
            OutputFormat::Json => format_json(record, timestamp_format),
        }
    }
}

/// Text rendering of a record, with the level tag colored when `use_colors` is set.
pub fn format_text(record: &LogRecord, timestamp_format: &TimestampFormat, use_colors: bool) -> String {
    let tag = match &record.body {
        RecordBody::Text { level, .. } => paint(*level, &format!("[{}]", level.name()), use_colors),
        RecordBody::Binary { .. } => "[BIN]".to_string(),
    };

    let mut line = format!(
        "[{}]{}[{}][{}:{}]",
        timestamp_format.format(&record.timestamp),
        tag,
        record.thread_label(),
        record.file,
        record.line
    );
    if let Some(ref module) = record.module {
        let _ = write!(line, "[{}]", module);
    }

    match &record.body {
        RecordBody::Text { message, .. } => line.push_str(message),
        RecordBody::Binary { payload } => {
            let _ = write!(line, "len={} data={}", payload.len(), to_hex(payload));
            add_newline(&mut line);
        }
    }
    line
}

fn format_json(record: &LogRecord, timestamp_format: &TimestampFormat) -> String {
    let mut json_obj = serde_json::Map::new();

    let timestamp = if timestamp_format.is_numeric() {
        serde_json::Value::Number(record.timestamp.timestamp_millis().into())
    } else {
        serde_json::Value::String(timestamp_format.format(&record.timestamp))
    };
    json_obj.insert("timestamp".to_string(), timestamp);

    match &record.body {
        RecordBody::Text { level, message } => {
            json_obj.insert("level".to_string(), level.name().into());
            json_obj.insert(
                "message".to_string(),
                message.trim_end_matches(['\n', '\r']).into(),
            );
        }
        RecordBody::Binary { payload } => {
            json_obj.insert("level".to_string(), "BIN".into());
            json_obj.insert("len".to_string(), payload.len().into());
            json_obj.insert("data".to_string(), to_hex(payload).into());
        }
    }

    json_obj.insert("thread_id".to_string(), record.thread_id.clone().into());
    if let Some(ref name) = record.thread_name {
        json_obj.insert("thread_name".to_string(), name.clone().into());
    }
    json_obj.insert("file".to_string(), record.file.clone().into());
    json_obj.insert("line".to_string(), record.line.into());
    if let Some(ref module) = record.module {
        json_obj.insert("module".to_string(), module.clone().into());
    }

    let mut line = serde_json::Value::Object(json_obj).to_string();
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_dot() {
        let mut message = String::from("no punctuation");
        add_dot(&mut message);
        assert_eq!(message, "no punctuation.");
        add_dot(&mut message);
        assert_eq!(message, "no punctuation.");

        let mut message = String::from("ends in newline\n");
        add_dot(&mut message);
        assert_eq!(message, "ends in newline\n");

        let mut message = String::from("carriage\r");
        add_dot(&mut message);
        assert_eq!(message, "carriage\r");
    }

    #[test]
    fn test_add_newline() {
        let mut message = String::from("line");
        add_newline(&mut message);
        assert_eq!(message, "line\n");
        add_newline(&mut message);
        assert_eq!(message, "line\n");

        let mut message = String::from("crlf\r\n");
        add_newline(&mut message);
        assert_eq!(message, "crlf\r\n");
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let mut message = "héllo".to_string();
        truncate_to(&mut message, 2);
        assert_eq!(message, "h");

        let mut message = "short".to_string();
        truncate_to(&mut message, 100);
        assert_eq!(message, "short");
    }

    #[test]
    fn test_hex() {
        assert_eq!(to_hex(&[0x00, 0xab, 0x10]), "00ab10");
        assert_eq!(to_hex(&[]), "");
    }

    #[test]
    fn test_fallback_format() {
        let line = format_fallback(Severity::Warn, CallSite::new("src/main.rs", 7), "disk low", false);
        assert_eq!(line, "[WARN][src/main.rs:7]disk low\n");

        let line = format_fallback(Severity::Info, CallSite::new("a.rs", 1), "done\n", false);
        assert_eq!(line, "[INFO][a.rs:1]done\n");
    }

    #[test]
    fn test_text_format() {
        let record = LogRecord::text(
            Severity::Info,
            CallSite::new("src/app.rs", 12),
            Some("net"),
            "Request processed\n",
        );
        let line = OutputFormat::Text.format(&record, &TimestampFormat::Iso8601);
        assert!(line.contains("[INFO]"));
        assert!(line.contains("[src/app.rs:12][net]Request processed\n"));
    }

    #[test]
    fn test_text_format_binary() {
        let record = LogRecord::binary(CallSite::new("src/io.rs", 5), None, &[0xde, 0xad]);
        let line = OutputFormat::Text.format(&record, &TimestampFormat::Iso8601);
        assert!(line.contains("[BIN]"));
        assert!(line.ends_with("[src/io.rs:5]len=2 data=dead\n"));
    }

    #[test]
    fn test_json_format() {
        let record = LogRecord::text(Severity::Error, CallSite::new("a.rs", 3), None, "Error occurred\n");
        let line = OutputFormat::Json.format(&record, &TimestampFormat::Iso8601);
        assert!(line.ends_with('\n'));

        let parsed: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();
        assert_eq!(parsed["level"], "ERROR");
        assert_eq!(parsed["message"], "Error occurred");
        assert_eq!(parsed["line"], 3);
        assert!(parsed["timestamp"].is_string());
    }

    #[test]
    fn test_json_numeric_timestamp() {
        let record = LogRecord::binary(CallSite::new("a.rs", 3), Some("io"), &[1]);
        let line = OutputFormat::Json.format(&record, &TimestampFormat::UnixMillis);
        let parsed: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();
        assert!(parsed["timestamp"].is_number());
        assert_eq!(parsed["level"], "BIN");
        assert_eq!(parsed["data"], "01");
        assert_eq!(parsed["module"], "io");
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }
}
