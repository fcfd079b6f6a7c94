//! Validates a configuration the way the service would load it, but prints
//! the diagnostics instead of routing them to the debug channel.

use crate::cli::load_resolver;
use crate::internal;
use crate::logger::TestLogger;
use std::path::Path;
use std::process::ExitCode;

#[must_use]
pub fn cmd_check(config: Option<&Path>) -> ExitCode {
    let diagnostics = TestLogger::named("CONFIG");
    let resolver = match load_resolver(config, &diagnostics) {
        Ok(resolver) => resolver,
        Err(e) => {
            internal::error("CLI", &format!("Error loading config: {e}"));
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    let problems = diagnostics.logged_items();
    for record in &problems {
        println!("{}: {}", record.level, record.message);
    }

    println!("matching: {}", resolver.strategy());
    println!("loggers:");
    for name in resolver.names() {
        if name.is_empty() {
            println!("  (default)");
        } else {
            println!("  {name}");
        }
    }

    if problems.is_empty() {
        ExitCode::SUCCESS
    } else {
        println!("{} problem(s) found", problems.len());
        ExitCode::FAILURE
    }
}
