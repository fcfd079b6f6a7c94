//! The unit of logged information handed from the logging API to every backend.

use crate::level::Level;
use chrono::{DateTime, FixedOffset, Local};
use std::error::Error as StdError;
use std::sync::Arc;

/// Errors attached to records are shared, never deep-copied; once raised they don't change.
pub type Exception = Arc<dyn StdError + Send + Sync>;

/// Carries all data a backend needs to render one event; avoids passing a dozen loose parameters.
///
/// Loggers receive `&LogRecord`; any logger that wants to transform a record
/// clones it first, so the caller's instance is never touched.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: Level,
    pub timestamp: DateTime<FixedOffset>,
    /// Short label, rendered as the banner line by the simple formatter.
    pub title: String,
    pub message: String,
    /// Empty for the default logger.
    pub logger_name: String,
    pub exception: Option<Exception>,
    pub event_id: Option<i32>,
}

impl Default for LogRecord {
    fn default() -> Self {
        Self {
            level: Level::Info,
            timestamp: Local::now().fixed_offset(),
            title: String::new(),
            message: String::new(),
            logger_name: String::new(),
            exception: None,
            event_id: None,
        }
    }
}

impl LogRecord {
    /// Everything but level and message keeps its default.
    #[must_use]
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub const fn with_timestamp(mut self, timestamp: DateTime<FixedOffset>) -> Self {
        self.timestamp = timestamp;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    #[must_use]
    pub fn with_logger_name(mut self, name: impl Into<String>) -> Self {
        self.logger_name = name.into();
        self
    }

    #[must_use]
    pub fn with_exception(mut self, exception: Exception) -> Self {
        self.exception = Some(exception);
        self
    }

    #[must_use]
    pub const fn with_event_id(mut self, event_id: i32) -> Self {
        self.event_id = Some(event_id);
        self
    }

    /// Renders the attached error with its `source()` chain, one cause per line.
    #[must_use]
    pub fn exception_text(&self) -> Option<String> {
        let exception = self.exception.as_ref()?;
        let mut text = exception.to_string();
        let mut source = exception.source();
        while let Some(cause) = source {
            text.push_str("\ncaused by: ");
            text.push_str(&cause.to_string());
            source = cause.source();
        }
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Boom;

    impl std::fmt::Display for Boom {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("boom")
        }
    }

    impl StdError for Boom {}

    #[test]
    fn default_fields() {
        let record = LogRecord::default();
        assert_eq!(record.level, Level::Info);
        assert!(record.title.is_empty());
        assert!(record.message.is_empty());
        assert!(record.logger_name.is_empty());
        assert!(record.exception.is_none());
        assert!(record.event_id.is_none());
    }

    #[test]
    fn clone_shares_exception() {
        let record = LogRecord::new(Level::Error, "failed").with_exception(Arc::new(Boom));
        let clone = record.clone();

        let (Some(a), Some(b)) = (&record.exception, &clone.exception) else {
            panic!("exception lost in clone");
        };
        assert!(Arc::ptr_eq(a, b));
        assert_eq!(clone.message, "failed");
        assert_eq!(clone.timestamp, record.timestamp);
    }

    #[test]
    fn exception_text_without_exception() {
        assert!(LogRecord::default().exception_text().is_none());
    }

    #[test]
    fn exception_text_includes_sources() {
        let io = std::io::Error::other("disk full");
        let wrapped = crate::Error::Io(io);
        let record = LogRecord::default().with_exception(Arc::new(wrapped));
        let text = record.exception_text().unwrap();
        assert!(text.starts_with("I/O error: disk full"));
        assert!(text.contains("caused by: disk full"));
    }
}
