//! Factories turn a logger name into a logger instance.
//!
//! The resolver decides *which* factory serves a name; the factory decides
//! *what* logger that name gets, and whether the instance is cached.

mod delegate;
mod named;
mod simple;
mod single;

pub use delegate::DelegateFactory;
pub use named::NamedLoggerFactory;
pub use simple::SimpleLoggerFactory;
pub use single::{BackendInit, LoggerKind, SingleLoggerFactory};

use crate::logger::{Logger, NullLogger};
use std::sync::{Arc, OnceLock};

/// Produces loggers by name. `""` designates the default logger.
pub trait LoggerFactory: Send + Sync {
    /// Never fails; factories fall back to the [`NullLogger`] instead.
    fn get_logger(&self, name: &str) -> Arc<dyn Logger>;
}

/// Always hands out the shared [`NullLogger`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLoggerFactory;

impl NullLoggerFactory {
    /// One stateless instance shared by the whole process.
    #[must_use]
    pub fn shared() -> Arc<dyn LoggerFactory> {
        static INSTANCE: OnceLock<Arc<NullLoggerFactory>> = OnceLock::new();
        INSTANCE.get_or_init(|| Arc::new(Self)).clone()
    }
}

impl LoggerFactory for NullLoggerFactory {
    fn get_logger(&self, _name: &str) -> Arc<dyn Logger> {
        NullLogger::shared()
    }
}
