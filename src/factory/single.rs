//! A simple factory whose one logger is chosen by configuration data.

use super::{LoggerFactory, SimpleLoggerFactory};
use crate::Error;
use crate::fmt::FormatterKind;
use crate::logger::{ConsoleLogger, DebugLogger, Logger, NullLogger, TestLogger};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Init data understood by the built-in backends, written as a TOML fragment:
///
/// ```toml
/// logger = "console"
/// format = "single-line"
/// ```
///
/// Unknown keys are rejected so typos surface as diagnostics instead of being ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BackendInit {
    /// Logger kind for the `single` backend.
    pub logger: Option<String>,
    /// Formatter for text sinks (`simple`, `single-line`, `json`).
    pub format: Option<String>,
}

impl BackendInit {
    /// Absent or blank data means "all defaults".
    ///
    /// # Errors
    /// `Error::Init` if the data is not a valid fragment.
    pub fn parse(data: Option<&str>) -> Result<Self, Error> {
        match data.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(data) => toml::from_str(data).map_err(|e| Error::Init(e.to_string())),
        }
    }

    /// # Errors
    /// `Error::Init` for an unknown formatter name.
    pub fn formatter(&self) -> Result<FormatterKind, Error> {
        self.format
            .as_deref()
            .map_or(Ok(FormatterKind::default()), str::parse)
    }
}

/// Built-in logger kinds a [`SingleLoggerFactory`] can be configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggerKind {
    Null,
    Test,
    Debug,
    Console,
}

impl LoggerKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Test => "test",
            Self::Debug => "debug",
            Self::Console => "console",
        }
    }

    #[must_use]
    pub fn build(self, name: &str, format: FormatterKind) -> Arc<dyn Logger> {
        match self {
            Self::Null => NullLogger::shared(),
            Self::Test => Arc::new(TestLogger::named(name)),
            Self::Debug => Arc::new(DebugLogger::named(name).with_formatter(format.build())),
            Self::Console => Arc::new(ConsoleLogger::named(name).with_formatter(format.build())),
        }
    }
}

impl fmt::Display for LoggerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoggerKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "null" => Ok(Self::Null),
            "test" => Ok(Self::Test),
            "debug" => Ok(Self::Debug),
            "console" => Ok(Self::Console),
            _ => Err(Error::Init(format!("unknown logger kind: {s}"))),
        }
    }
}

/// Serves one logger for every name; [`init`](Self::init) picks which.
/// Until then it serves the [`NullLogger`].
#[derive(Debug, Default)]
pub struct SingleLoggerFactory {
    inner: SimpleLoggerFactory,
}

impl SingleLoggerFactory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies init data such as `logger = "console"`. On failure the
    /// previously configured logger stays in place.
    ///
    /// # Errors
    /// `Error::Init` for malformed data, a missing `logger` key, or unknown names.
    pub fn init(&self, data: &str) -> Result<(), Error> {
        let init = BackendInit::parse(Some(data))?;
        let kind: LoggerKind = init
            .logger
            .as_deref()
            .ok_or_else(|| Error::Init("missing 'logger' key".to_string()))?
            .parse()?;
        let format = init.formatter()?;
        self.inner.set_logger(Some(kind.build("", format)));
        Ok(())
    }

    #[must_use]
    pub fn logger(&self) -> Arc<dyn Logger> {
        self.inner.logger()
    }
}

impl LoggerFactory for SingleLoggerFactory {
    fn get_logger(&self, name: &str) -> Arc<dyn Logger> {
        self.inner.get_logger(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::downcast_ref;

    #[test]
    fn serves_null_until_initialized() {
        let factory = SingleLoggerFactory::new();
        let logger = factory.get_logger("A");
        assert!(downcast_ref::<NullLogger>(logger.as_ref()).is_some());
    }

    #[test]
    fn init_selects_logger_for_all_names() {
        let factory = SingleLoggerFactory::new();
        factory.init(r#"logger = "test""#).unwrap();

        let a = factory.get_logger("A");
        let b = factory.get_logger("B.C");
        assert!(downcast_ref::<TestLogger>(a.as_ref()).is_some());
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn malformed_init_keeps_previous_logger() {
        let factory = SingleLoggerFactory::new();
        factory.init(r#"logger = "test""#).unwrap();
        let before = factory.logger();

        for data in ["logger = ", "logger = \"fancy\"", "format = \"json\"", "colour = 1"] {
            let err = factory.init(data).unwrap_err();
            assert!(matches!(err, Error::Init(_)), "{data} should be rejected");
        }
        assert!(Arc::ptr_eq(&before, &factory.logger()));
    }

    #[test]
    fn formatter_names() {
        let init = BackendInit::parse(Some(r#"format = "single-line""#)).unwrap();
        assert_eq!(init.formatter().unwrap(), FormatterKind::SingleLine);
        assert_eq!(
            BackendInit::parse(None).unwrap().formatter().unwrap(),
            FormatterKind::Simple
        );
        assert!(
            BackendInit::parse(Some(r#"format = "xml""#))
                .unwrap()
                .formatter()
                .is_err()
        );
    }
}
