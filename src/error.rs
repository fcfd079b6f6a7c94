//! Unified error type for all lognest operations.

use std::path::PathBuf;

/// Only API misuse and configuration I/O surface as errors; an unconfigured
/// facade degrades to silence, never to an `Error`.
#[derive(Debug)]
pub enum Error {
    /// A required argument was missing or unusable (no message, `Undefined` level, bad template).
    InvalidArgument(String),
    /// A factory is already registered under this (case-insensitive) name.
    DuplicateFactory(String),
    /// No backend constructor is registered under this type identifier.
    UnknownBackend(String),
    /// Backend init data could not be parsed or names something unknown.
    Init(String),
    /// Format/serialization error.
    Format(String),
    /// A backend failed while writing a record.
    Backend(String),
    /// I/O error.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Cyclic include detected in config sources.
    CyclicInclude(PathBuf),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(s) => write!(f, "invalid argument: {s}"),
            Self::DuplicateFactory(name) => {
                write!(f, "there's already a factory registered by the name '{name}'")
            }
            Self::UnknownBackend(id) => write!(f, "unknown backend type: {id}"),
            Self::Init(s) => write!(f, "invalid init data: {s}"),
            Self::Format(s) => write!(f, "format error: {s}"),
            Self::Backend(s) => write!(f, "backend error: {s}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::CyclicInclude(p) => write!(f, "cyclic include: {}", p.display()),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
