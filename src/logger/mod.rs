//! The `Logger` capability and the core implementations every backend builds on.
//!
//! Backends implement only [`Logger::log`]; the per-level convenience calls are
//! provided methods that build a [`LogRecord`] and funnel through [`Logger::emit`].

mod capture;
mod composite;
mod console;
mod debug;
mod decorator;
mod delegate;
mod formattable;
mod null;

pub use capture::TestLogger;
pub use composite::{CompositeLogger, FailurePolicy};
pub use console::ConsoleLogger;
pub use debug::DebugLogger;
pub use decorator::DecoratorLogger;
pub use delegate::DelegateLogger;
pub(crate) use delegate::LogAction;
pub use formattable::{Formattable, FormatterSlot};
pub use null::NullLogger;

use crate::Error;
use crate::fmt::format_message;
use crate::level::Level;
use crate::record::{Exception, LogRecord};
use std::any::Any;
use std::fmt::{Arguments, Display};

/// Name of the default (root) logger.
pub const DEFAULT_LOGGER_NAME: &str = "";

/// Generates the six call shapes for one severity so the logic lives once, in `emit`.
macro_rules! level_methods {
    (
        $level:expr, $name:literal,
        $plain:ident, $args:ident, $format:ident,
        $exception:ident, $exception_msg:ident, $exception_format:ident
    ) => {
        #[doc = concat!("Logs a message at ", $name, " level.")]
        ///
        /// # Errors
        /// Propagates the backend's failure.
        fn $plain(&self, message: &str) -> Result<(), Error> {
            self.emit($level, Some(message), None, &[])
        }

        #[doc = concat!("Logs `format_args!` output at ", $name, " level.")]
        ///
        /// # Errors
        /// Propagates the backend's failure.
        fn $args(&self, args: Arguments<'_>) -> Result<(), Error> {
            self.emit($level, Some(&args.to_string()), None, &[])
        }

        #[doc = concat!("Logs a positional template (`{0}`, `{1,-8}`) at ", $name, " level.")]
        ///
        /// # Errors
        /// `Error::InvalidArgument` for a malformed template, or the backend's failure.
        fn $format(&self, template: &str, args: &[&dyn Display]) -> Result<(), Error> {
            self.emit($level, Some(template), None, args)
        }

        #[doc = concat!("Logs an error at ", $name, " level.")]
        ///
        /// # Errors
        /// Propagates the backend's failure.
        fn $exception(&self, exception: Exception) -> Result<(), Error> {
            self.emit($level, None, Some(exception), &[])
        }

        #[doc = concat!("Logs an error with additional context at ", $name, " level.")]
        ///
        /// # Errors
        /// Propagates the backend's failure.
        fn $exception_msg(&self, exception: Exception, message: &str) -> Result<(), Error> {
            self.emit($level, Some(message), Some(exception), &[])
        }

        #[doc = concat!("Logs an error with a positional template at ", $name, " level.")]
        ///
        /// # Errors
        /// `Error::InvalidArgument` for a malformed template, or the backend's failure.
        fn $exception_format(
            &self,
            exception: Exception,
            template: &str,
            args: &[&dyn Display],
        ) -> Result<(), Error> {
            self.emit($level, Some(template), Some(exception), args)
        }
    };
}

/// `Send + Sync` so one logger can be shared across threads behind an `Arc`;
/// `Any` so callers can recover the concrete type with [`downcast_ref`].
pub trait Logger: Any + Send + Sync {
    /// The name this logger was created for; empty for the default logger.
    fn name(&self) -> &str {
        DEFAULT_LOGGER_NAME
    }

    /// Hands one record to the backend. Implementations must not assume they
    /// own the record; clone it before transforming.
    ///
    /// # Errors
    /// Whatever the backend reports. Composite loggers propagate delegate failures.
    fn log(&self, record: &LogRecord) -> Result<(), Error>;

    /// Canonical entry point behind every per-level call.
    ///
    /// With non-empty `args`, `message` is rendered as a positional template.
    ///
    /// # Errors
    /// `Error::InvalidArgument` if `level` is `Undefined`, if neither a message
    /// nor an exception is given, or if the template is malformed.
    fn emit(
        &self,
        level: Level,
        message: Option<&str>,
        exception: Option<Exception>,
        args: &[&dyn Display],
    ) -> Result<(), Error> {
        if !level.is_defined() {
            return Err(Error::InvalidArgument(
                "cannot log a record with an undefined level".to_string(),
            ));
        }
        if message.is_none() && exception.is_none() {
            return Err(Error::InvalidArgument(
                "a message or an exception is required".to_string(),
            ));
        }

        let message = match message {
            Some(template) if !args.is_empty() => format_message(template, args)?,
            Some(text) => text.to_string(),
            None => String::new(),
        };

        let mut record = LogRecord::new(level, message).with_logger_name(self.name());
        record.exception = exception;
        self.log(&record)
    }

    level_methods!(
        Level::Debug, "debug",
        debug, debug_args, debug_format,
        debug_exception, debug_exception_msg, debug_exception_format
    );
    level_methods!(
        Level::Info, "info",
        info, info_args, info_format,
        info_exception, info_exception_msg, info_exception_format
    );
    level_methods!(
        Level::Warn, "warn",
        warn, warn_args, warn_format,
        warn_exception, warn_exception_msg, warn_exception_format
    );
    level_methods!(
        Level::Error, "error",
        error, error_args, error_format,
        error_exception, error_exception_msg, error_exception_format
    );
    level_methods!(
        Level::Fatal, "fatal",
        fatal, fatal_args, fatal_format,
        fatal_exception, fatal_exception_msg, fatal_exception_format
    );
}

/// Recovers the concrete logger behind a trait object, e.g. to read a
/// [`TestLogger`]'s history after resolving it through the service.
#[must_use]
pub fn downcast_ref<L: Logger>(logger: &dyn Logger) -> Option<&L> {
    let any: &dyn Any = logger;
    any.downcast_ref::<L>()
}
