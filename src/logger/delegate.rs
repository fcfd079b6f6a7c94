//! Inline logging; a closure becomes a logger without declaring a type.

use super::Logger;
use crate::Error;
use crate::record::LogRecord;
use std::sync::Arc;

pub(crate) type LogAction = dyn Fn(&LogRecord) -> Result<(), Error> + Send + Sync;

/// Invokes its action once per record.
#[derive(Clone)]
pub struct DelegateLogger {
    name: String,
    action: Arc<LogAction>,
}

impl DelegateLogger {
    /// For actions that cannot fail.
    #[must_use]
    pub fn new(action: impl Fn(&LogRecord) + Send + Sync + 'static) -> Self {
        Self::try_new(move |record| {
            action(record);
            Ok(())
        })
    }

    /// For actions whose failures should reach the caller.
    #[must_use]
    pub fn try_new(
        action: impl Fn(&LogRecord) -> Result<(), Error> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: String::new(),
            action: Arc::new(action),
        }
    }

    /// Shares an existing action; a delegate factory hands the same one to every name.
    #[must_use]
    pub(crate) fn from_shared(name: impl Into<String>, action: Arc<LogAction>) -> Self {
        Self {
            name: name.into(),
            action,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl std::fmt::Debug for DelegateLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DelegateLogger")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl Logger for DelegateLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        (self.action)(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn invokes_action_per_record() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let logger = DelegateLogger::new(move |r| sink.lock().unwrap().push(r.message.clone()))
            .with_name("Inline");

        logger.info("a").unwrap();
        logger.info("b").unwrap();

        assert_eq!(*seen.lock().unwrap(), vec!["a", "b"]);
        assert_eq!(logger.name(), "Inline");
    }

    #[test]
    fn failing_action_propagates() {
        let logger = DelegateLogger::try_new(|_| Err(Error::Backend("down".to_string())));
        assert!(logger.info("x").is_err());
    }

    #[test]
    fn records_carry_logger_name() {
        let seen = Arc::new(Mutex::new(String::new()));
        let sink = Arc::clone(&seen);
        let logger = DelegateLogger::new(move |r| *sink.lock().unwrap() = r.logger_name.clone())
            .with_name("Named");
        logger.warn("x").unwrap();
        assert_eq!(*seen.lock().unwrap(), "Named");
    }
}
