//! In-memory capture that tests assert against.

use super::Logger;
use crate::Error;
use crate::record::LogRecord;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Records every received record in arrival order.
#[derive(Debug, Default)]
pub struct TestLogger {
    name: String,
    items: Mutex<Vec<LogRecord>>,
}

impl TestLogger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Mutex::new(Vec::new()),
        }
    }

    /// A copy of the history; mutating it never affects what the logger holds.
    #[must_use]
    pub fn logged_items(&self) -> Vec<LogRecord> {
        self.items().clone()
    }

    /// Forgets everything recorded so far.
    pub fn reset(&self) {
        self.items().clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    fn items(&self) -> MutexGuard<'_, Vec<LogRecord>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Logger for TestLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        self.items().push(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;

    #[test]
    fn records_in_order() {
        let logger = TestLogger::new();
        logger.info("one").unwrap();
        logger.warn("two").unwrap();

        let items = logger.logged_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].message, "one");
        assert_eq!(items[1].level, Level::Warn);
    }

    #[test]
    fn returned_history_is_a_copy() {
        let logger = TestLogger::new();
        logger.info("kept").unwrap();

        let mut items = logger.logged_items();
        items.clear();
        items.push(LogRecord::new(Level::Fatal, "injected"));

        assert_eq!(logger.len(), 1);
        assert_eq!(logger.logged_items()[0].message, "kept");
    }

    #[test]
    fn reset_clears_history() {
        let logger = TestLogger::named("T");
        logger.info("x").unwrap();
        logger.reset();
        assert!(logger.is_empty());
        assert_eq!(logger.name(), "T");
    }
}
