//! Owned log record
//!
//! The facade hands loggers borrowed call data (`CallSite`, module tag,
//! `fmt::Arguments`). Loggers that keep, serialize or re-render records build
//! a [`LogRecord`] from it.

use super::call_site::CallSite;
use super::log_level::Severity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

// Thread-local caches for thread information to avoid repeated allocations
thread_local! {
    static THREAD_ID_CACHE: RefCell<Option<String>> = const { RefCell::new(None) };
    static THREAD_NAME_CACHE: RefCell<Option<Option<String>>> = const { RefCell::new(None) };
}

fn current_thread_id() -> String {
    THREAD_ID_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| format!("{:?}", std::thread::current().id()))
            .clone()
    })
}

fn current_thread_name() -> Option<String> {
    THREAD_NAME_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| std::thread::current().name().map(String::from))
            .clone()
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecordBody {
    Text { level: Severity, message: String },
    Binary { payload: Vec<u8> },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub file: String,
    pub line: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    pub thread_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_name: Option<String>,
    #[serde(flatten)]
    pub body: RecordBody,
}

impl LogRecord {
    fn with_body(site: CallSite, module: Option<&str>, body: RecordBody) -> Self {
        Self {
            timestamp: Utc::now(),
            file: site.file().to_string(),
            line: site.line(),
            module: module.map(String::from),
            thread_id: current_thread_id(),
            thread_name: current_thread_name(),
            body,
        }
    }

    pub fn text(
        level: Severity,
        site: CallSite,
        module: Option<&str>,
        message: impl Into<String>,
    ) -> Self {
        Self::with_body(
            site,
            module,
            RecordBody::Text {
                level,
                message: message.into(),
            },
        )
    }

    pub fn binary(site: CallSite, module: Option<&str>, payload: &[u8]) -> Self {
        Self::with_body(
            site,
            module,
            RecordBody::Binary {
                payload: payload.to_vec(),
            },
        )
    }

    /// Severity of a text record; `None` for binary records.
    pub fn level(&self) -> Option<Severity> {
        match &self.body {
            RecordBody::Text { level, .. } => Some(*level),
            RecordBody::Binary { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match &self.body {
            RecordBody::Text { message, .. } => Some(message),
            RecordBody::Binary { .. } => None,
        }
    }

    pub fn payload(&self) -> Option<&[u8]> {
        match &self.body {
            RecordBody::Binary { payload } => Some(payload),
            RecordBody::Text { .. } => None,
        }
    }

    /// Thread name if the thread has one, otherwise its id.
    pub fn thread_label(&self) -> &str {
        self.thread_name.as_deref().unwrap_or(&self.thread_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_record() {
        let record = LogRecord::text(
            Severity::Warn,
            CallSite::new("src/net.rs", 7),
            Some("net"),
            "retrying",
        );
        assert_eq!(record.level(), Some(Severity::Warn));
        assert_eq!(record.message(), Some("retrying"));
        assert_eq!(record.payload(), None);
        assert_eq!(record.file, "src/net.rs");
        assert_eq!(record.line, 7);
        assert_eq!(record.module.as_deref(), Some("net"));
    }

    #[test]
    fn test_binary_record() {
        let record = LogRecord::binary(CallSite::new("src/io.rs", 3), None, &[1, 2, 3]);
        assert_eq!(record.level(), None);
        assert_eq!(record.payload(), Some(&[1u8, 2, 3][..]));
        assert!(record.module.is_none());
    }

    #[test]
    fn test_thread_label_prefers_name() {
        let handle = std::thread::Builder::new()
            .name("worker-1".into())
            .spawn(|| LogRecord::text(Severity::Info, CallSite::new("a.rs", 1), None, "x"))
            .unwrap();
        let record = handle.join().unwrap();
        assert_eq!(record.thread_label(), "worker-1");
    }

    #[test]
    fn test_serializes_flat() {
        let record = LogRecord::text(Severity::Error, CallSite::new("a.rs", 9), None, "boom");
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["kind"], "text");
        assert_eq!(value["level"], "ERROR");
        assert_eq!(value["message"], "boom");
        assert_eq!(value["line"], 9);
        assert!(value.get("module").is_none());
    }
}
