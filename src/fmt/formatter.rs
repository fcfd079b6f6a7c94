//! Text sinks need a string, not a record; formatters own that conversion so
//! every sink can switch between the verbose block and compact one-liners.

use crate::record::LogRecord;
use std::fmt::Write;

/// Shortest banner, so short titles still get a visible frame.
const MIN_BANNER_WIDTH: usize = 20;

/// Renders one record for a text sink.
pub trait LogItemFormatter: Send + Sync {
    fn format_item(&self, record: &LogRecord) -> String;
}

/// Multi-line, human-readable block framed by an asterisk banner.
///
/// ```text
///
/// ********************
/// Billing: Payment
/// 2026-10-19 14:30:00 +02:00
/// Log Level: info
///
/// Event ID = 7
/// paid
/// ********************
///
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleFormatter;

impl LogItemFormatter for SimpleFormatter {
    fn format_item(&self, record: &LogRecord) -> String {
        let banner = "*".repeat(record.title.chars().count().max(MIN_BANNER_WIDTH));
        let mut out = String::with_capacity(record.message.len() + 128);

        // Writing into a String cannot fail.
        let _ = writeln!(out);
        let _ = writeln!(out, "{banner}");
        if !record.logger_name.is_empty() {
            let _ = write!(out, "{}: ", record.logger_name);
        }
        if !record.title.is_empty() {
            let _ = writeln!(out, "{}", record.title);
        }
        let _ = writeln!(out, "{}", record.timestamp.format("%Y-%m-%d %H:%M:%S %:z"));
        let _ = writeln!(out, "Log Level: {}\n", record.level);
        if let Some(id) = record.event_id {
            let _ = writeln!(out, "Event ID = {id}");
        }
        let _ = writeln!(out, "{}", record.message);
        if let Some(exception) = record.exception_text() {
            let _ = writeln!(out, "\n--\n");
            let _ = writeln!(out, "{exception}");
        }
        let _ = writeln!(out, "{banner}");
        let _ = writeln!(out);
        out
    }
}

/// Compact `name: [event] title - message` form for consoles and grep.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleLineFormatter;

impl LogItemFormatter for SingleLineFormatter {
    fn format_item(&self, record: &LogRecord) -> String {
        let mut out = String::with_capacity(record.message.len() + 32);
        if !record.logger_name.is_empty() {
            out.push_str(&record.logger_name);
            out.push_str(": ");
        }
        if let Some(id) = record.event_id {
            let _ = write!(out, "[{id}] ");
        }
        if !record.title.is_empty() {
            out.push_str(&record.title);
            out.push_str(" - ");
        }
        out.push_str(&record.message);
        if let Some(exception) = &record.exception {
            let _ = write!(out, " ({exception})");
        }
        out
    }
}

type FormatFn = dyn Fn(&LogRecord) -> String + Send + Sync;

/// Inline closures cover one-off layouts without a dedicated formatter type.
pub struct DelegateFormatter {
    handler: Box<FormatFn>,
}

impl DelegateFormatter {
    #[must_use]
    pub fn new(handler: impl Fn(&LogRecord) -> String + Send + Sync + 'static) -> Self {
        Self {
            handler: Box::new(handler),
        }
    }
}

impl std::fmt::Debug for DelegateFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DelegateFormatter").finish_non_exhaustive()
    }
}

impl LogItemFormatter for DelegateFormatter {
    fn format_item(&self, record: &LogRecord) -> String {
        (self.handler)(record)
    }
}
