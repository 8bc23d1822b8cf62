use std::process::ExitCode;

use clap::Subcommand;

pub mod edit;
pub mod path;

use crate::config::Config;
use crate::{GlobalOpts, Result};

#[derive(Debug, Clone, PartialEq, Subcommand)]
#[command(author, rename_all = "kebab-case")]
pub enum Command {
    /// Display the path to the configuration file
    Path(path::Opts),
    /// Edit the configuration file with a text editor
    Edit(edit::Opts),
}

pub fn handle(config: Config, global: &GlobalOpts, opts: Command) -> Result<ExitCode> {
    match opts {
        Command::Path(opts) => path::handle(config, global, opts),
        Command::Edit(opts) => edit::handle(config, global, opts),
    }
}
