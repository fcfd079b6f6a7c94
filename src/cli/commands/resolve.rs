use crate::cli::load_resolver;
use crate::internal;
use std::path::Path;
use std::process::ExitCode;

/// Prints `name -> registered entry` per name; `(null)` when nothing serves it.
#[must_use]
pub fn cmd_resolve(config: Option<&Path>, names: &[String]) -> ExitCode {
    let diagnostics = internal::diagnostic_logger("CONFIG");
    let resolver = match load_resolver(config, diagnostics.as_ref()) {
        Ok(resolver) => resolver,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    for name in names {
        match resolver.resolve_name(name) {
            Some(entry) if entry.is_empty() => println!("{name} -> (default)"),
            Some(entry) => println!("{name} -> {entry}"),
            None => println!("{name} -> (null)"),
        }
    }
    ExitCode::SUCCESS
}
