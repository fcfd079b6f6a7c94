//! Fan-out to several loggers, e.g. console and a test capture at the same time.

use super::Logger;
use crate::Error;
use crate::internal;
use crate::record::LogRecord;
use std::sync::{Arc, PoisonError, RwLock};

/// What happens when one delegate fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop at the first failing delegate and return its error; later delegates are skipped.
    /// The caller decides the failure policy.
    #[default]
    Propagate,
    /// Call every delegate; report failures to the diagnostic channel and succeed.
    Isolate,
}

/// Forwards each record to its delegates in the order they were added.
pub struct CompositeLogger {
    name: String,
    loggers: RwLock<Vec<Arc<dyn Logger>>>,
    policy: FailurePolicy,
}

impl CompositeLogger {
    #[must_use]
    pub fn new(loggers: Vec<Arc<dyn Logger>>) -> Self {
        Self::named("", loggers)
    }

    #[must_use]
    pub fn named(name: impl Into<String>, loggers: Vec<Arc<dyn Logger>>) -> Self {
        Self {
            name: name.into(),
            loggers: RwLock::new(loggers),
            policy: FailurePolicy::Propagate,
        }
    }

    #[must_use]
    pub const fn policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Appends a delegate; it receives records after all existing ones.
    pub fn push(&self, logger: Arc<dyn Logger>) {
        self.loggers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(logger);
    }

    /// A snapshot of the current delegates.
    #[must_use]
    pub fn loggers(&self) -> Vec<Arc<dyn Logger>> {
        self.loggers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.loggers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for CompositeLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeLogger")
            .field("name", &self.name)
            .field("loggers", &self.len())
            .field("policy", &self.policy)
            .finish()
    }
}

impl Logger for CompositeLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        // Snapshot so a delegate that logs back into this composite can't deadlock.
        for logger in self.loggers() {
            match logger.log(record) {
                Ok(()) => {}
                Err(e) if self.policy == FailurePolicy::Isolate => {
                    internal::error(
                        "COMPOSITE",
                        &format!(
                            "Delegate logger '{}' failed, continuing: {e}",
                            logger.name()
                        ),
                    );
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}
