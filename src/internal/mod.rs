//! The facade's own diagnostic channel: configuration problems, failed logger
//! construction and isolated composite failures are reported here.
//!
//! Independent of [`crate::service`]: reporting never re-enters a resolver.

use crate::factory::{LoggerFactory, NamedLoggerFactory};
use crate::fmt::FormatterKind;
use crate::level::Level;
use crate::logger::Logger;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

static OVERRIDE: RwLock<Option<Arc<dyn LoggerFactory>>> = RwLock::new(None);

fn default_factory() -> Arc<dyn LoggerFactory> {
    static DEBUG: OnceLock<Arc<NamedLoggerFactory>> = OnceLock::new();
    DEBUG
        .get_or_init(|| Arc::new(NamedLoggerFactory::debug_with(FormatterKind::SingleLine)))
        .clone()
}

/// The factory diagnostics currently go to: unless replaced, a per-name debug
/// factory writing single-line entries.
#[must_use]
pub fn diagnostic_factory() -> Arc<dyn LoggerFactory> {
    OVERRIDE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .unwrap_or_else(default_factory)
}

/// Redirects diagnostics; `None` restores the debug factory.
pub fn set_diagnostic_factory(factory: Option<Arc<dyn LoggerFactory>>) {
    *OVERRIDE.write().unwrap_or_else(PoisonError::into_inner) = factory;
}

/// Diagnostic logger for one scope.
#[must_use]
pub fn diagnostic_logger(name: &str) -> Arc<dyn Logger> {
    diagnostic_factory().get_logger(name)
}

/// A failing diagnostic sink has nowhere left to report to, so its result is dropped.
fn log(level: Level, scope: &str, msg: &str) {
    let _ = diagnostic_logger(scope).emit(level, Some(msg), None, &[]);
}

pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

/// Recoverable configuration anomalies: duplicates, missing includes.
pub fn warn(scope: &str, msg: &str) {
    log(Level::Warn, scope, msg);
}

/// Failures the facade replaced with a null substitute.
pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::{TestLogger, downcast_ref};
    use std::sync::Mutex;

    // The diagnostic channel is process-wide.
    static GUARD: Mutex<()> = Mutex::new(());

    #[test]
    fn override_captures_and_restore_returns_to_debug() {
        let _guard = GUARD.lock().unwrap_or_else(PoisonError::into_inner);
        let factory = Arc::new(NamedLoggerFactory::test());
        set_diagnostic_factory(Some(factory.clone()));

        warn("SELFTEST", "duplicate factory 'F1'");
        let logger = diagnostic_logger("SELFTEST");
        let captured = downcast_ref::<TestLogger>(logger.as_ref()).unwrap();
        let items = captured.logged_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].level, Level::Warn);
        assert_eq!(items[0].logger_name, "SELFTEST");

        set_diagnostic_factory(None);
        let restored = diagnostic_logger("SELFTEST");
        assert!(downcast_ref::<TestLogger>(restored.as_ref()).is_none());
    }
}
