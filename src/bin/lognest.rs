//! `lognest` inspects a logging configuration and emits entries through it.
//!
//! Usage:
//!   lognest check                      Validate the configuration
//!   lognest resolve <name>...          Show which entry serves each name
//!   lognest log <level> <name> <msg>   Emit one entry
//!
//! Every command accepts `--config <PATH>`.

use clap::Parser;
use lognest::cli::{Cli, Command, cmd_check, cmd_log, cmd_resolve};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = cli.config.as_deref();

    match cli.command {
        Command::Check => cmd_check(config),
        Command::Resolve { names } => cmd_resolve(config, &names),
        Command::Log {
            level,
            name,
            message,
        } => cmd_log(config, level, &name, &message),
    }
}
