//! Routes records from the `log` crate into the facade.
//!
//! Each record goes to the logger resolved for its target, so dependencies
//! that log through `log::warn!` land in the same backends as facade callers.

use crate::Error;
use crate::internal;
use crate::level::Level;
use crate::logger::Logger;
use crate::service::{self, LoggerService};

/// `log::Log` implementation forwarding to a [`LoggerService`].
#[derive(Debug, Clone, Copy)]
pub struct LogBridge {
    service: &'static LoggerService,
}

impl LogBridge {
    #[must_use]
    pub const fn new(service: &'static LoggerService) -> Self {
        Self { service }
    }

    /// Installs the bridge as the process-wide `log` logger. Filtering is left
    /// to the backends, so every level is passed through.
    ///
    /// # Errors
    /// `Error::Init` if another `log` logger is already installed.
    pub fn install(self) -> Result<(), Error> {
        log::set_boxed_logger(Box::new(self))
            .map_err(|e| Error::Init(format!("cannot install log bridge: {e}")))?;
        log::set_max_level(log::LevelFilter::Trace);
        Ok(())
    }
}

impl Default for LogBridge {
    /// Bridges into [`service::global`].
    fn default() -> Self {
        Self::new(service::global())
    }
}

/// `Trace` has no counterpart and folds into `Debug`.
#[must_use]
pub const fn map_level(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::Error,
        log::Level::Warn => Level::Warn,
        log::Level::Info => Level::Info,
        log::Level::Debug | log::Level::Trace => Level::Debug,
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        let message = record.args().to_string();
        let logger = self.service.get_logger(record.target());
        if let Err(e) = logger.emit(map_level(record.level()), Some(&message), None, &[]) {
            internal::error(
                "BRIDGE",
                &format!("Forwarding '{}' record failed: {e}", record.target()),
            );
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::NamedLoggerFactory;
    use crate::logger::{NullLogger, TestLogger, downcast_ref};
    use crate::resolver::NamedFactoryResolver;
    use log::Log;
    use std::sync::Arc;

    fn leaked(service: LoggerService) -> &'static LoggerService {
        Box::leak(Box::new(service))
    }

    #[test]
    fn levels_map_onto_facade_levels() {
        assert_eq!(map_level(log::Level::Error), Level::Error);
        assert_eq!(map_level(log::Level::Warn), Level::Warn);
        assert_eq!(map_level(log::Level::Info), Level::Info);
        assert_eq!(map_level(log::Level::Debug), Level::Debug);
        assert_eq!(map_level(log::Level::Trace), Level::Debug);
    }

    #[test]
    fn record_is_routed_by_target() {
        let resolver = Arc::new(NamedFactoryResolver::new());
        resolver
            .register_factory("Billing", Arc::new(NamedLoggerFactory::test()))
            .unwrap();
        let service = leaked(LoggerService::with_resolver(resolver));
        let bridge = LogBridge::new(service);

        bridge.log(
            &log::Record::builder()
                .args(format_args!("invoice {} late", 4711))
                .level(log::Level::Warn)
                .target("Billing.Invoice")
                .build(),
        );

        let logger = service.get_logger("Billing.Invoice");
        let captured = downcast_ref::<TestLogger>(logger.as_ref()).unwrap();
        let items = captured.logged_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].level, Level::Warn);
        assert_eq!(items[0].message, "invoice 4711 late");
        assert_eq!(items[0].logger_name, "Billing.Invoice");
    }

    #[test]
    fn unresolved_target_is_dropped() {
        let bridge = LogBridge::new(leaked(LoggerService::null()));
        assert!(bridge.enabled(&log::Metadata::builder().target("Anything").build()));
        bridge.log(
            &log::Record::builder()
                .args(format_args!("nobody listens"))
                .level(log::Level::Error)
                .target("Anything")
                .build(),
        );
        let logger = bridge.service.get_logger("Anything");
        assert!(downcast_ref::<NullLogger>(logger.as_ref()).is_some());
    }
}
