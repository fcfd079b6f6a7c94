//! The most common CLI operation: emit a single entry from a shell script.

use crate::cli::{LogLevel, load_resolver};
use crate::internal;
use crate::resolver::FactoryResolver;
use std::path::Path;
use std::process::ExitCode;

#[must_use]
pub fn cmd_log(config: Option<&Path>, level: LogLevel, name: &str, message: &[String]) -> ExitCode {
    let diagnostics = internal::diagnostic_logger("CONFIG");
    let resolver = match load_resolver(config, diagnostics.as_ref()) {
        Ok(resolver) => resolver,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    let Some(factory) = resolver.get_factory(name) else {
        return ExitCode::SUCCESS;
    };
    let message = message.join(" ");
    match factory
        .get_logger(name)
        .emit(level.into(), Some(&message), None, &[])
    {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Failed to log: {e}");
            ExitCode::FAILURE
        }
    }
}
