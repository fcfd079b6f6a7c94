//! Text sinks share one concern: turning a record into a string with a
//! formatter the application can swap at runtime.

use crate::fmt::{LogItemFormatter, SimpleFormatter};
use crate::record::LogRecord;
use std::sync::{Arc, PoisonError, RwLock};

/// Loggers that render records through a pluggable [`LogItemFormatter`].
pub trait Formattable {
    fn formatter(&self) -> Arc<dyn LogItemFormatter>;

    fn set_formatter(&self, formatter: Arc<dyn LogItemFormatter>);

    fn format_item(&self, record: &LogRecord) -> String {
        self.formatter().format_item(record)
    }
}

/// Storage for a swappable formatter, embedded by every formattable sink.
pub struct FormatterSlot(RwLock<Arc<dyn LogItemFormatter>>);

impl FormatterSlot {
    #[must_use]
    pub fn new(formatter: Arc<dyn LogItemFormatter>) -> Self {
        Self(RwLock::new(formatter))
    }

    #[must_use]
    pub fn get(&self) -> Arc<dyn LogItemFormatter> {
        self.0.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn set(&self, formatter: Arc<dyn LogItemFormatter>) {
        *self.0.write().unwrap_or_else(PoisonError::into_inner) = formatter;
    }
}

impl Default for FormatterSlot {
    fn default() -> Self {
        Self::new(Arc::new(SimpleFormatter))
    }
}

impl std::fmt::Debug for FormatterSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatterSlot").finish_non_exhaustive()
    }
}
