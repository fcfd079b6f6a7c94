//! CLI module for lognest.
//!
//! This module provides the command-line interface using Clap.

pub mod commands;

use crate::Error;
use crate::backend;
use crate::config::Config;
use crate::logger::Logger;
use crate::resolver::NamedFactoryResolver;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Log level for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl From<LogLevel> for crate::level::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Self::Debug,
            LogLevel::Info => Self::Info,
            LogLevel::Warn => Self::Warn,
            LogLevel::Error => Self::Error,
            LogLevel::Fatal => Self::Fatal,
        }
    }
}

/// lognest - Inspect logging configuration and emit log entries.
#[derive(Parser)]
#[command(
    name = "lognest",
    version,
    about = "Inspect logging configuration and emit log entries"
)]
pub struct Cli {
    /// Configuration file (defaults to $LOGNEST_CONFIG or the user config directory)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Load the configuration and report problems.
    Check,
    /// Show which registered name each logger name resolves to.
    Resolve {
        /// Logger names
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Emit one log entry through the configured backends.
    Log {
        /// Log level
        #[arg(value_enum)]
        level: LogLevel,
        /// Logger name ("" for the default logger)
        name: String,
        /// Log message
        #[arg(required = true)]
        message: Vec<String>,
    },
}

pub use commands::{cmd_check, cmd_log, cmd_resolve};

/// Loads `path` (or the default location) and builds a resolver from it,
/// sending configuration diagnostics to `diagnostics`.
///
/// # Errors
/// An explicitly given file that does not exist, or any [`Config`] load error.
pub fn load_resolver(
    path: Option<&Path>,
    diagnostics: &dyn Logger,
) -> Result<NamedFactoryResolver, Error> {
    let config = match path {
        Some(path) if !path.exists() => {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            )));
        }
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    Ok(NamedFactoryResolver::from_config(
        &config,
        &backend::global_snapshot(),
        diagnostics,
    ))
}
