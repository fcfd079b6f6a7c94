//! One JSON object per record; lets a plain text sink produce JSONL that `jq`
//! and log shippers can query without a dedicated structured backend.

use super::LogItemFormatter;
use crate::record::LogRecord;
use serde::Serialize;

/// Flat structure optimized for JSONL; one object per line.
#[derive(Debug, Serialize)]
struct JsonEntry<'a> {
    /// RFC 3339 is the most widely supported machine-readable timestamp format.
    ts: String,
    level: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    logger: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    title: &'a str,
    msg: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    event_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exception: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl LogItemFormatter for JsonFormatter {
    fn format_item(&self, record: &LogRecord) -> String {
        let entry = JsonEntry {
            ts: record.timestamp.to_rfc3339(),
            level: record.level.as_str(),
            logger: &record.logger_name,
            title: &record.title,
            msg: &record.message,
            event_id: record.event_id,
            exception: record.exception_text(),
        };

        serde_json::to_string(&entry)
            .unwrap_or_else(|e| format!(r#"{{"level":"error","msg":"JSON serialization failed: {e}"}}"#))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;

    #[test]
    fn renders_flat_object() {
        let record = LogRecord::new(Level::Info, "paid \"42\"")
            .with_logger_name("Billing")
            .with_event_id(3);
        let line = JsonFormatter.format_item(&record);
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();

        assert_eq!(value["level"], "info");
        assert_eq!(value["logger"], "Billing");
        assert_eq!(value["msg"], "paid \"42\"");
        assert_eq!(value["event_id"], 3);
        assert!(value.get("title").is_none());
        assert!(value.get("exception").is_none());
        assert!(!line.contains('\n'));
    }
}
