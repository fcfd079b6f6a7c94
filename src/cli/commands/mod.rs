//! Each subcommand lives in its own file so the match in main stays thin
//! and each handler owns its error reporting.

mod check;
mod log;
mod resolve;

pub use check::cmd_check;
pub use log::cmd_log;
pub use resolve::cmd_resolve;
