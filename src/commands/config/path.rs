use std::io::Write;
use std::process::ExitCode;

use clap::Parser;

use crate::config::{Config, CONFIG_NAME};
use crate::utils::terminal::USER_ATTENDED;
use crate::{GlobalOpts, Result};

#[derive(Debug, Clone, PartialEq, Parser)]
#[command(author, rename_all = "kebab-case")]
pub struct Opts {}

pub fn handle(_: Config, _: &GlobalOpts, _: Opts) -> Result<ExitCode> {
    let path = confy::get_configuration_file_path(CONFIG_NAME, None)?;

    if *USER_ATTENDED {
        crate::success!(to: std::io::stdout(), "path = `{0}`", path.display())?;
    } else {
        writeln!(std::io::stdout(), "{0}", path.display())?;
    }

    Ok(ExitCode::SUCCESS)
}
