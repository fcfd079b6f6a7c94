//! Longest-prefix resolution over registered logger names.

use super::FactoryResolver;
use crate::Error;
use crate::factory::{LoggerFactory, NullLoggerFactory};
use crate::logger::DEFAULT_LOGGER_NAME;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// How a registered name is compared against a requested one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchStrategy {
    /// Plain case-insensitive string prefix: `"Billing"` also serves `"BillingReports"`.
    #[default]
    Prefix,
    /// Prefix on `.` boundaries only: `"Billing"` serves `"Billing"` and
    /// `"Billing.Invoice"`, but not `"BillingReports"`.
    Segment,
}

impl MatchStrategy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prefix => "prefix",
            Self::Segment => "segment",
        }
    }

    /// `key` and `name` are both lower-cased.
    fn matches(self, key: &str, name: &str) -> bool {
        match self {
            Self::Prefix => name.starts_with(key),
            Self::Segment => {
                key.is_empty()
                    || name
                        .strip_prefix(key)
                        .is_some_and(|rest| rest.is_empty() || rest.starts_with('.'))
            }
        }
    }
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "prefix" => Ok(Self::Prefix),
            "segment" | "segments" => Ok(Self::Segment),
            _ => Err(Error::InvalidArgument(format!(
                "unknown matching strategy: {s}"
            ))),
        }
    }
}

struct Entry {
    name: String,
    key: String,
    factory: Arc<dyn LoggerFactory>,
}

/// Registry of (name, factory) entries kept sorted by descending name length,
/// so the first matching entry is the most specific one.
///
/// One mutex serializes lookups and registrations.
#[derive(Default)]
pub struct NamedFactoryResolver {
    entries: Mutex<Vec<Entry>>,
    strategy: MatchStrategy,
}

impl NamedFactoryResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_strategy(strategy: MatchStrategy) -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            strategy,
        }
    }

    #[must_use]
    pub const fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    /// # Errors
    /// `Error::DuplicateFactory` if `name` is already registered (case-insensitive).
    pub fn register_factory(
        &self,
        name: &str,
        factory: Arc<dyn LoggerFactory>,
    ) -> Result<(), Error> {
        let key = name.to_lowercase();
        let mut entries = self.entries();
        if entries.iter().any(|entry| entry.key == key) {
            return Err(Error::DuplicateFactory(name.to_string()));
        }

        entries.push(Entry {
            name: name.to_string(),
            key,
            factory,
        });
        // Stable: equal lengths keep registration order.
        entries.sort_by(|a, b| b.key.chars().count().cmp(&a.key.chars().count()));
        Ok(())
    }

    /// Returns whether an entry was removed.
    pub fn deregister_factory(&self, name: &str) -> bool {
        let key = name.to_lowercase();
        let mut entries = self.entries();
        entries
            .iter()
            .position(|entry| entry.key == key)
            .map(|index| entries.remove(index))
            .is_some()
    }

    #[must_use]
    pub fn contains_factory(&self, name: &str) -> bool {
        let key = name.to_lowercase();
        self.entries().iter().any(|entry| entry.key == key)
    }

    /// Registered names as given, most specific first.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.entries()
            .iter()
            .map(|entry| entry.name.clone())
            .collect()
    }

    /// The registered name `logger_name` resolves to, or `None` when it falls
    /// through to the null factory.
    #[must_use]
    pub fn resolve_name(&self, logger_name: &str) -> Option<String> {
        let name = logger_name.to_lowercase();
        let entries = self.entries();
        self.find(&entries, &name).map(|entry| entry.name.clone())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    fn find<'a>(&self, entries: &'a [Entry], name: &str) -> Option<&'a Entry> {
        entries
            .iter()
            .find(|entry| self.strategy.matches(&entry.key, name))
            .or_else(|| {
                entries
                    .last()
                    .filter(|entry| entry.key == DEFAULT_LOGGER_NAME)
            })
    }

    fn entries(&self) -> MutexGuard<'_, Vec<Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for NamedFactoryResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedFactoryResolver")
            .field("strategy", &self.strategy)
            .field("names", &self.names())
            .finish()
    }
}

impl FactoryResolver for NamedFactoryResolver {
    fn get_factory(&self, logger_name: &str) -> Option<Arc<dyn LoggerFactory>> {
        let name = logger_name.to_lowercase();
        let entries = self.entries();
        let factory = self
            .find(&entries, &name)
            .map_or_else(NullLoggerFactory::shared, |entry| {
                Arc::clone(&entry.factory)
            });
        Some(factory)
    }
}
