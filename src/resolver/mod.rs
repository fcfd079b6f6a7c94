//! Resolvers decide which factory serves a requested logger name.

mod from_config;
mod named;

pub use named::{MatchStrategy, NamedFactoryResolver};

use crate::factory::{LoggerFactory, NullLoggerFactory, SimpleLoggerFactory};
use crate::logger::Logger;
use std::sync::Arc;

/// Maps a logger name to the factory responsible for it.
pub trait FactoryResolver: Send + Sync {
    /// `None` means "no factory"; callers substitute the null logger.
    fn get_factory(&self, name: &str) -> Option<Arc<dyn LoggerFactory>>;
}

/// Every name resolves to the same factory.
pub struct SimpleFactoryResolver {
    factory: Arc<dyn LoggerFactory>,
}

impl SimpleFactoryResolver {
    #[must_use]
    pub fn new(factory: Arc<dyn LoggerFactory>) -> Self {
        Self { factory }
    }
}

impl FactoryResolver for SimpleFactoryResolver {
    fn get_factory(&self, _name: &str) -> Option<Arc<dyn LoggerFactory>> {
        Some(Arc::clone(&self.factory))
    }
}

/// Every name resolves to one fixed logger. Backs `LoggerService::set_logger`.
pub struct SimpleLoggerResolver {
    factory: Arc<SimpleLoggerFactory>,
}

impl SimpleLoggerResolver {
    /// `None` pins the null logger.
    #[must_use]
    pub fn new(logger: Option<Arc<dyn Logger>>) -> Self {
        let factory = SimpleLoggerFactory::default();
        factory.set_logger(logger);
        Self {
            factory: Arc::new(factory),
        }
    }

    #[must_use]
    pub fn logger(&self) -> Arc<dyn Logger> {
        self.factory.logger()
    }
}

impl FactoryResolver for SimpleLoggerResolver {
    fn get_factory(&self, _name: &str) -> Option<Arc<dyn LoggerFactory>> {
        Some(self.factory.clone())
    }
}

type FactoryLookup = dyn Fn(&str) -> Option<Arc<dyn LoggerFactory>> + Send + Sync;

/// Resolution logic supplied as a closure returning a factory.
pub struct DelegateFactoryResolver {
    lookup: Box<FactoryLookup>,
}

impl DelegateFactoryResolver {
    #[must_use]
    pub fn new(
        lookup: impl Fn(&str) -> Option<Arc<dyn LoggerFactory>> + Send + Sync + 'static,
    ) -> Self {
        Self {
            lookup: Box::new(lookup),
        }
    }
}

impl FactoryResolver for DelegateFactoryResolver {
    fn get_factory(&self, name: &str) -> Option<Arc<dyn LoggerFactory>> {
        (self.lookup)(name)
    }
}

/// Resolution logic supplied as a closure returning the logger itself;
/// wrapped in a [`DelegateFactory`](crate::factory::DelegateFactory).
pub struct DelegateResolver {
    factory: Arc<crate::factory::DelegateFactory>,
}

impl DelegateResolver {
    #[must_use]
    pub fn new(lookup: impl Fn(&str) -> Option<Arc<dyn Logger>> + Send + Sync + 'static) -> Self {
        Self {
            factory: Arc::new(crate::factory::DelegateFactory::new(lookup)),
        }
    }
}

impl FactoryResolver for DelegateResolver {
    fn get_factory(&self, _name: &str) -> Option<Arc<dyn LoggerFactory>> {
        Some(self.factory.clone())
    }
}

/// Resolves everything to the [`NullLoggerFactory`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NullResolver;

impl FactoryResolver for NullResolver {
    fn get_factory(&self, _name: &str) -> Option<Arc<dyn LoggerFactory>> {
        Some(NullLoggerFactory::shared())
    }
}
