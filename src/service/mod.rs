//! Entry point for application code: name in, logger out.
//!
//! [`LoggerService`] is an ordinary value that can be constructed and passed
//! around; [`global()`] holds the process-wide instance behind the free
//! functions of this module.

use crate::backend;
use crate::config::Config;
use crate::internal;
use crate::logger::{DEFAULT_LOGGER_NAME, Logger, NullLogger};
use crate::resolver::{FactoryResolver, NamedFactoryResolver, NullResolver, SimpleLoggerResolver};
use std::path::PathBuf;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

/// What [`LoggerService::reset`] restores.
#[derive(Clone)]
pub enum DefaultResolver {
    /// A resolver supplied by the caller.
    Fixed(Arc<dyn FactoryResolver>),
    /// Everything is discarded.
    Null,
    /// Reload configuration: from the given file, or the default location.
    ConfigFile(Option<PathBuf>),
}

impl DefaultResolver {
    fn build(&self) -> Arc<dyn FactoryResolver> {
        match self {
            Self::Fixed(resolver) => Arc::clone(resolver),
            Self::Null => Arc::new(NullResolver),
            Self::ConfigFile(path) => {
                let loaded = path
                    .as_deref()
                    .map_or_else(Config::load, Config::load_from);
                let config = loaded.unwrap_or_else(|e| {
                    internal::error(
                        "CONFIG",
                        &format!("Failed to load logging configuration, logging disabled: {e}"),
                    );
                    Config::default()
                });
                let diagnostics = internal::diagnostic_logger("CONFIG");
                Arc::new(NamedFactoryResolver::from_config(
                    &config,
                    &backend::global_snapshot(),
                    diagnostics.as_ref(),
                ))
            }
        }
    }
}

impl std::fmt::Debug for DefaultResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed(_) => f.write_str("Fixed"),
            Self::Null => f.write_str("Null"),
            Self::ConfigFile(path) => f.debug_tuple("ConfigFile").field(path).finish(),
        }
    }
}

/// Holds the active resolver. The default resolver is built on first use, and
/// again after every [`reset`](Self::reset).
pub struct LoggerService {
    active: RwLock<Option<Arc<dyn FactoryResolver>>>,
    default: DefaultResolver,
}

impl LoggerService {
    #[must_use]
    pub const fn new(default: DefaultResolver) -> Self {
        Self {
            active: RwLock::new(None),
            default,
        }
    }

    /// A service whose default discards everything.
    #[must_use]
    pub const fn null() -> Self {
        Self::new(DefaultResolver::Null)
    }

    #[must_use]
    pub fn with_resolver(resolver: Arc<dyn FactoryResolver>) -> Self {
        Self::new(DefaultResolver::Fixed(resolver))
    }

    /// A service configured from `path`, or the default location for `None`.
    #[must_use]
    pub const fn from_config(path: Option<PathBuf>) -> Self {
        Self::new(DefaultResolver::ConfigFile(path))
    }

    /// Never fails: without a factory for `name` the null logger is returned.
    #[must_use]
    pub fn get_logger(&self, name: &str) -> Arc<dyn Logger> {
        self.resolver()
            .get_factory(name)
            .map_or_else(NullLogger::shared, |factory| factory.get_logger(name))
    }

    #[must_use]
    pub fn get_default_logger(&self) -> Arc<dyn Logger> {
        self.get_logger(DEFAULT_LOGGER_NAME)
    }

    /// Pins one logger for every name; `None` pins the null logger.
    pub fn set_logger(&self, logger: Option<Arc<dyn Logger>>) {
        self.install(Arc::new(SimpleLoggerResolver::new(logger)));
    }

    /// `None` installs the [`NullResolver`].
    pub fn set_resolver(&self, resolver: Option<Arc<dyn FactoryResolver>>) {
        self.install(resolver.unwrap_or_else(|| Arc::new(NullResolver)));
    }

    /// The active resolver, building the default if nothing is active yet.
    #[must_use]
    pub fn resolver(&self) -> Arc<dyn FactoryResolver> {
        if let Some(resolver) = self
            .active
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            return Arc::clone(resolver);
        }

        // Built unlocked: backend constructors may call back into the service.
        let built = self.default.build();
        let mut active = self.active.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(active.get_or_insert(built))
    }

    /// Drops programmatic overrides and rebuilds the default resolver.
    pub fn reset(&self) {
        internal::debug("SERVICE", &format!("Resetting to {:?}", self.default));
        let resolver = self.default.build();
        self.install(resolver);
    }

    #[must_use]
    pub const fn default_resolver(&self) -> &DefaultResolver {
        &self.default
    }

    fn install(&self, resolver: Arc<dyn FactoryResolver>) {
        *self.active.write().unwrap_or_else(PoisonError::into_inner) = Some(resolver);
    }
}

impl Default for LoggerService {
    /// Configured from the default location.
    fn default() -> Self {
        Self::from_config(None)
    }
}

impl std::fmt::Debug for LoggerService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerService")
            .field("default", &self.default)
            .finish_non_exhaustive()
    }
}

/// The process-wide service, configured from the default location.
pub fn global() -> &'static LoggerService {
    static GLOBAL: OnceLock<LoggerService> = OnceLock::new();
    GLOBAL.get_or_init(LoggerService::default)
}

/// Logger for `name` from the process-wide service.
#[must_use]
pub fn get_logger(name: &str) -> Arc<dyn Logger> {
    global().get_logger(name)
}

#[must_use]
pub fn get_default_logger() -> Arc<dyn Logger> {
    global().get_default_logger()
}

pub fn set_logger(logger: Option<Arc<dyn Logger>>) {
    global().set_logger(logger);
}

pub fn set_resolver(resolver: Option<Arc<dyn FactoryResolver>>) {
    global().set_resolver(resolver);
}

pub fn reset() {
    global().reset();
}
