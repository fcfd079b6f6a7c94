//! `lognest` - a logging facade with name-based backend resolution.
//!
//! Application code asks for a logger by hierarchical name and logs to it
//! without knowing which backend sits behind it:
//! - Longest-prefix resolution of names to registered factories
//! - Per-name caching of logger instances
//! - Null fallbacks: a missing or broken configuration means silence, not errors
//! - TOML configuration with `source = "..."` includes
//! - Composite, decorator and delegate loggers for wiring backends together
//!
//! # Example
//!
//! ```
//! use lognest::{Logger, LoggerService, NamedFactoryResolver, NamedLoggerFactory, TestLogger};
//! use lognest::logger::downcast_ref;
//! use std::sync::Arc;
//!
//! let resolver = Arc::new(NamedFactoryResolver::new());
//! resolver.register_factory("Billing", Arc::new(NamedLoggerFactory::test())).unwrap();
//!
//! let service = LoggerService::with_resolver(resolver);
//! let logger = service.get_logger("Billing.Invoice");
//! logger.info_format("Invoice {0} sent", &[&42]).unwrap();
//!
//! let captured = downcast_ref::<TestLogger>(logger.as_ref()).unwrap();
//! assert_eq!(captured.logged_items()[0].message, "Invoice 42 sent");
//!
//! // Names nothing is registered for are silently discarded.
//! service.get_logger("Shipping").warn("nobody listens").unwrap();
//! ```
//!
//! # Features
//!
//! - `cli` (default): Enables the `lognest` command-line tool
//! - `log`: Enables [`bridge::LogBridge`], routing `log` crate records into the facade

pub mod backend;
pub mod config;
mod error;
pub mod factory;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod logger;
pub mod record;
pub mod resolver;
pub mod service;

#[cfg(feature = "log")]
pub mod bridge;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use backend::BackendRegistry;
pub use config::Config;
pub use error::Error;
pub use factory::{LoggerFactory, NamedLoggerFactory, NullLoggerFactory, SimpleLoggerFactory};
pub use fmt::{FormatterKind, LogItemFormatter};
pub use level::Level;
pub use logger::{
    CompositeLogger, DecoratorLogger, DelegateLogger, Logger, NullLogger, TestLogger,
};
pub use record::{Exception, LogRecord};
pub use resolver::{FactoryResolver, MatchStrategy, NamedFactoryResolver};
pub use service::LoggerService;
