//! Configuration struct definitions.

use serde::Deserialize;

/// Resolver settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Name matching strategy (prefix, segment).
    pub matching: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            matching: "prefix".to_string(),
        }
    }
}

/// One `[[factories]]` declaration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FactoryConfig {
    /// Name loggers refer to; `""` declares the default factory.
    pub name: String,
    /// Backend identifier (null, test, debug, console, single, or a registered one).
    #[serde(rename = "type")]
    pub kind: String,
    /// Opaque init data handed to the backend.
    pub data: Option<String>,
}

/// One `[[loggers]]` declaration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Logger name prefix; `""` declares the default logger.
    pub name: String,
    /// Name of a declared factory.
    pub factory: String,
}
