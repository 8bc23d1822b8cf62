use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::Context;

use crate::config::Config;
use crate::utils::terminal::USER_ATTENDED;
use crate::{GlobalOpts, Result};

#[derive(Debug, Clone, PartialEq, Parser)]
#[command(author, rename_all = "kebab-case")]
pub struct Opts {
    /// The duration to parse (eg. `1h30m`, `-1.5d`, `250ms`)
    #[arg(allow_hyphen_values = true)]
    duration: String,
}

pub fn handle(_: Config, global: &GlobalOpts, opts: Opts) -> Result<ExitCode> {
    let duration = timeutil::parse_duration(&opts.duration)
        .with_context(|| format!("could not parse `{0}` as a duration", opts.duration))?;

    if global.verbose {
        crate::debug!(from: "timeutil:parse", "parsed `{0}` as {duration:?}", opts.duration)?;
    }

    if *USER_ATTENDED {
        crate::info!(to: std::io::stdout(), "nanoseconds = `{0}`", duration.as_nanos())?;
        crate::info!(to: std::io::stdout(), "canonical = `{duration}`")?;
        crate::info!(to: std::io::stdout(), "simplified = `{0}`", duration.simplified())?;
    } else {
        writeln!(std::io::stdout(), "{0}", duration.as_nanos())?;
    }

    Ok(ExitCode::SUCCESS)
}
