use std::process::ExitCode;

use clap::Subcommand;

pub mod config;
pub mod expr;
pub mod format;
pub mod parse;

use crate::config::Config;
use crate::{GlobalOpts, Result};

#[derive(Debug, Clone, PartialEq, Subcommand)]
#[command(author, rename_all = "kebab-case")]
pub enum Command {
    /// Parse a duration (eg. `1h30m`) into a number of nanoseconds
    Parse(parse::Opts),
    /// Format a number of nanoseconds as a duration
    Format(format::Opts),
    /// Resolve a time expression (eg. `yesterday`, `-10d`, `05-01`) into a point in time
    Expr(expr::Opts),
    /// Interact with the `timeutil` configuration
    #[command(subcommand)]
    Config(config::Command),
}

pub fn handle(config: Config, global: &GlobalOpts, opts: Command) -> Result<ExitCode> {
    match opts {
        Command::Parse(opts) => parse::handle(config, global, opts),
        Command::Format(opts) => format::handle(config, global, opts),
        Command::Expr(opts) => expr::handle(config, global, opts),
        Command::Config(opts) => config::handle(config, global, opts),
    }
}
