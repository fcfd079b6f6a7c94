//! Developer-facing output that disappears from release builds; the default
//! destination for the facade's own diagnostics.

use super::{Formattable, FormatterSlot, Logger};
use crate::Error;
use crate::fmt::LogItemFormatter;
use crate::record::LogRecord;
use std::sync::Arc;

/// Writes formatted records to stderr when built with debug assertions.
#[derive(Debug, Default)]
pub struct DebugLogger {
    name: String,
    formatter: FormatterSlot,
}

impl DebugLogger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            formatter: FormatterSlot::default(),
        }
    }

    #[must_use]
    pub fn with_formatter(self, formatter: Arc<dyn LogItemFormatter>) -> Self {
        self.formatter.set(formatter);
        self
    }
}

impl Formattable for DebugLogger {
    fn formatter(&self) -> Arc<dyn LogItemFormatter> {
        self.formatter.get()
    }

    fn set_formatter(&self, formatter: Arc<dyn LogItemFormatter>) {
        self.formatter.set(formatter);
    }
}

impl Logger for DebugLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        if cfg!(debug_assertions) {
            eprintln!("{}", self.format_item(record));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fmt::SingleLineFormatter;
    use crate::level::Level;

    #[test]
    fn formatter_is_swappable() {
        let logger = DebugLogger::named("Diag");
        let record = LogRecord::new(Level::Warn, "careful").with_logger_name("Diag");
        assert!(logger.format_item(&record).contains("Log Level: warn"));

        logger.set_formatter(Arc::new(SingleLineFormatter));
        assert_eq!(logger.format_item(&record), "Diag: careful");
        logger.log(&record).unwrap();
    }
}
