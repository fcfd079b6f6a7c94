//! Filtering and enrichment in front of another logger.

use super::Logger;
use crate::Error;
use crate::record::LogRecord;
use std::sync::Arc;

type LogFilter = dyn Fn(&mut LogRecord) -> bool + Send + Sync;

/// Runs a filter on a copy of each record; the (possibly rewritten) copy is
/// forwarded only when the filter returns `true`.
pub struct DecoratorLogger {
    name: String,
    logger: Arc<dyn Logger>,
    filter: Box<LogFilter>,
}

impl DecoratorLogger {
    #[must_use]
    pub fn new(
        logger: Arc<dyn Logger>,
        filter: impl Fn(&mut LogRecord) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: String::new(),
            logger,
            filter: Box::new(filter),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// The wrapped logger.
    #[must_use]
    pub fn inner(&self) -> &Arc<dyn Logger> {
        &self.logger
    }
}

impl std::fmt::Debug for DecoratorLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecoratorLogger")
            .field("name", &self.name)
            .field("logger", &self.logger.name())
            .finish_non_exhaustive()
    }
}

impl Logger for DecoratorLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        let mut record = record.clone();
        if (self.filter)(&mut record) {
            self.logger.log(&record)
        } else {
            Ok(())
        }
    }
}
