//! Per-name memoization; stateful loggers (open files, captured history)
//! must survive between `get_logger` calls for the same name.

use super::LoggerFactory;
use crate::Error;
use crate::fmt::FormatterKind;
use crate::internal;
use crate::logger::{
    ConsoleLogger, DebugLogger, DelegateLogger, LogAction, Logger, NullLogger, TestLogger,
};
use crate::record::LogRecord;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

type CreateFn = dyn Fn(&str) -> Result<Arc<dyn Logger>, Error> + Send + Sync;

/// Creates one logger per case-insensitive name and returns that same
/// instance on every later request.
///
/// Lookup and insert-on-miss happen under one lock, so concurrent first
/// requests for a name never construct two loggers.
pub struct NamedLoggerFactory {
    /// Shown in diagnostics when construction fails.
    backend: String,
    loggers: Mutex<HashMap<String, Arc<dyn Logger>>>,
    create: Box<CreateFn>,
}

impl NamedLoggerFactory {
    /// `create` receives the name as requested (original casing). A failure is
    /// reported to the diagnostic channel and the name is served by the
    /// [`NullLogger`] from then on.
    #[must_use]
    pub fn new(
        backend: impl Into<String>,
        create: impl Fn(&str) -> Result<Arc<dyn Logger>, Error> + Send + Sync + 'static,
    ) -> Self {
        Self {
            backend: backend.into(),
            loggers: Mutex::new(HashMap::new()),
            create: Box::new(create),
        }
    }

    /// One [`TestLogger`] per name.
    #[must_use]
    pub fn test() -> Self {
        Self::new("test", |name| Ok(Arc::new(TestLogger::named(name))))
    }

    /// One [`DebugLogger`] per name, using the default formatter.
    #[must_use]
    pub fn debug() -> Self {
        Self::debug_with(FormatterKind::default())
    }

    #[must_use]
    pub fn debug_with(format: FormatterKind) -> Self {
        Self::new("debug", move |name| {
            Ok(Arc::new(DebugLogger::named(name).with_formatter(format.build())))
        })
    }

    /// One [`ConsoleLogger`] per name, using the default formatter.
    #[must_use]
    pub fn console() -> Self {
        Self::console_with(FormatterKind::default())
    }

    #[must_use]
    pub fn console_with(format: FormatterKind) -> Self {
        Self::new("console", move |name| {
            Ok(Arc::new(ConsoleLogger::named(name).with_formatter(format.build())))
        })
    }

    /// One [`DelegateLogger`] per name, all sharing `action`.
    #[must_use]
    pub fn delegate(action: impl Fn(&LogRecord) + Send + Sync + 'static) -> Self {
        let action: Arc<LogAction> = Arc::new(move |record: &LogRecord| {
            action(record);
            Ok(())
        });
        Self::new("delegate", move |name| {
            Ok(Arc::new(DelegateLogger::from_shared(name, Arc::clone(&action))))
        })
    }

    /// Every logger created so far.
    #[must_use]
    pub fn cached_loggers(&self) -> Vec<Arc<dyn Logger>> {
        self.loggers().values().cloned().collect()
    }

    #[must_use]
    pub fn backend(&self) -> &str {
        &self.backend
    }

    fn loggers(&self) -> MutexGuard<'_, HashMap<String, Arc<dyn Logger>>> {
        self.loggers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for NamedLoggerFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NamedLoggerFactory")
            .field("backend", &self.backend)
            .field("cached", &self.loggers().len())
            .finish_non_exhaustive()
    }
}

impl LoggerFactory for NamedLoggerFactory {
    fn get_logger(&self, name: &str) -> Arc<dyn Logger> {
        let key = name.to_lowercase();

        let (logger, failure) = {
            let mut loggers = self.loggers();
            if let Some(logger) = loggers.get(&key) {
                return Arc::clone(logger);
            }

            let (logger, failure) = match (self.create)(name) {
                Ok(logger) => (logger, None),
                Err(e) => (NullLogger::shared(), Some(e)),
            };
            loggers.insert(key, Arc::clone(&logger));
            (logger, failure)
        };

        // Reported outside the lock: the diagnostic factory may be this very factory.
        if let Some(e) = failure {
            internal::error(
                "FACTORY",
                &format!(
                    "Failed to create {} logger '{name}', using null logger: {e}",
                    self.backend
                ),
            );
        }

        logger
    }
}
