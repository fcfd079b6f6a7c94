//! "Send everything to one sink"; no per-name specialization.

use super::LoggerFactory;
use crate::logger::{Logger, NullLogger};
use std::sync::{Arc, PoisonError, RwLock};

/// Returns the same logger for every name.
pub struct SimpleLoggerFactory {
    logger: RwLock<Arc<dyn Logger>>,
}

impl SimpleLoggerFactory {
    #[must_use]
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            logger: RwLock::new(logger),
        }
    }

    /// The logger currently handed out.
    #[must_use]
    pub fn logger(&self) -> Arc<dyn Logger> {
        self.logger
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the logger; `None` falls back to the [`NullLogger`].
    pub fn set_logger(&self, logger: Option<Arc<dyn Logger>>) {
        *self.logger.write().unwrap_or_else(PoisonError::into_inner) =
            logger.unwrap_or_else(NullLogger::shared);
    }
}

impl Default for SimpleLoggerFactory {
    fn default() -> Self {
        Self::new(NullLogger::shared())
    }
}

impl std::fmt::Debug for SimpleLoggerFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimpleLoggerFactory")
            .field("logger", &self.logger().name().to_string())
            .finish()
    }
}

impl LoggerFactory for SimpleLoggerFactory {
    fn get_logger(&self, _name: &str) -> Arc<dyn Logger> {
        self.logger()
    }
}
