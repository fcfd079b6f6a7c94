//! TOML configuration loading and `source = "..."` include resolution.
//!
//! Separated from struct definitions so that the loading logic (file I/O, cycle detection,
//! merge strategy) stays independent of the serde schema.

mod structs;

pub use structs::{FactoryConfig, LoggerConfig, ResolverConfig};

use crate::internal;
use crate::resolver::MatchStrategy;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Overrides the default configuration location.
pub const CONFIG_ENV: &str = "LOGNEST_CONFIG";

/// An empty file is a valid configuration: no factories, no loggers, and
/// therefore a silent default logger.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub resolver: ResolverConfig,
    /// Factory declarations, in file order.
    pub factories: Vec<FactoryConfig>,
    /// Logger declarations, in file order.
    pub loggers: Vec<LoggerConfig>,
}

/// Scans raw TOML for `source = "..."` directives before deserialization,
/// since serde cannot handle them.
/// Returns the extracted paths and the remaining TOML content stripped of those lines.
#[doc(hidden)]
#[must_use]
pub fn extract_sources(content: &str) -> (Vec<String>, String) {
    let mut sources = Vec::new();
    let mut remaining = String::new();

    for line in content.lines() {
        let directive = line
            .trim()
            .split_once('=')
            .filter(|(key, _)| key.trim() == "source");
        if let Some((_, value)) = directive {
            let path = value.trim().trim_matches('"').trim_matches('\'');
            if !path.is_empty() {
                sources.push(path.to_string());
            }
        } else {
            remaining.push_str(line);
            remaining.push('\n');
        }
    }

    (sources, remaining)
}

impl Config {
    /// Reads `$LOGNEST_CONFIG`, or `lognest/lognest.toml` in the user's config
    /// directory. A missing file yields the default configuration.
    ///
    /// # Errors
    /// Fails on unreadable files, TOML syntax errors, or cyclic includes.
    pub fn load() -> Result<Self, crate::Error> {
        internal::debug("CONFIG", "Loading config from default location");
        let Some(config_path) = Self::get_config_path() else {
            internal::debug("CONFIG", "No config directory, using defaults");
            return Ok(Self::default());
        };
        let config = Self::load_with_sources(&config_path, &mut HashSet::new())?;
        internal::info(
            "CONFIG",
            &format!("Config loaded from {}", config_path.display()),
        );
        Ok(config)
    }

    /// Loads configuration from an explicit path instead of the default location.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed, or contains cyclic includes.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        Self::load_with_sources(path, &mut HashSet::new())
    }

    /// Parses configuration text. `source` lines are dropped, not followed.
    ///
    /// # Errors
    /// `Error::ConfigParse` on invalid TOML or mistyped fields.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        let (sources, toml_content) = extract_sources(content);
        if !sources.is_empty() {
            internal::warn("CONFIG", "Ignoring source directives in inline config");
        }
        Ok(toml::from_str(&toml_content)?)
    }

    /// Recursive loader that expands `source = "..."` includes. `seen` holds the
    /// current include chain only, so a file reached along two branches loads
    /// twice while a file including its own ancestor is a cycle.
    fn load_with_sources(path: &Path, seen: &mut HashSet<PathBuf>) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        if !seen.insert(canonical.clone()) {
            internal::warn(
                "CONFIG",
                &format!("Cyclic include detected: {}", canonical.display()),
            );
            return Err(crate::Error::CyclicInclude(canonical));
        }

        let loaded = Self::load_file(path, seen);
        seen.remove(&canonical);
        loaded
    }

    fn load_file(path: &Path, seen: &mut HashSet<PathBuf>) -> Result<Self, crate::Error> {
        let content = fs::read_to_string(path)?;
        let (sources, toml_content) = extract_sources(&content);
        let mut config: Self = toml::from_str(&toml_content)?;

        for source_path in sources {
            internal::debug("CONFIG", &format!("Processing source: {source_path}"));
            let expanded = shellexpand::tilde(&source_path);
            let mut source_file = PathBuf::from(expanded.as_ref());
            if source_file.is_relative()
                && let Some(parent) = path.parent()
            {
                source_file = parent.join(source_file);
            }
            if source_file.exists() {
                let source_config = Self::load_with_sources(&source_file, seen)?;
                config.merge(source_config);
            } else {
                internal::warn("CONFIG", &format!("Source file not found: {source_path}"));
            }
        }

        Ok(config)
    }

    /// Appends an included config's declarations after `self`'s own. Names
    /// already declared here win; the included duplicate is dropped.
    pub fn merge(&mut self, other: Self) {
        for factory in other.factories {
            if self
                .factories
                .iter()
                .any(|f| f.name.to_lowercase() == factory.name.to_lowercase())
            {
                internal::debug(
                    "CONFIG",
                    &format!("Included factory '{}' shadowed", factory.name),
                );
            } else {
                self.factories.push(factory);
            }
        }
        for logger in other.loggers {
            if self
                .loggers
                .iter()
                .any(|l| l.name.to_lowercase() == logger.name.to_lowercase())
            {
                internal::debug(
                    "CONFIG",
                    &format!("Included logger '{}' shadowed", logger.name),
                );
            } else {
                self.loggers.push(logger);
            }
        }
    }

    /// `$LOGNEST_CONFIG` if set, else the platform config directory.
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Some(PathBuf::from(path));
        }
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("lognest").join("lognest.toml"))
    }

    /// Unknown strategies are reported and treated as prefix matching.
    #[must_use]
    pub fn matching(&self) -> MatchStrategy {
        self.resolver.matching.parse().unwrap_or_else(|e| {
            internal::warn("CONFIG", &format!("{e}, using prefix matching"));
            MatchStrategy::Prefix
        })
    }
}
