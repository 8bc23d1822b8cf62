use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Args, Parser};
use color_eyre::eyre::Context;
use console::style;

pub mod commands;
pub mod config;
pub mod format;
pub mod utils;

use crate::config::{Config, CONFIG_NAME};

pub type Error = color_eyre::Report;
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Args)]
#[command(rename_all = "kebab-case")]
pub struct GlobalOpts {
    /// Print debug information to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Parser)]
#[command(author, version, about, long_about = None, rename_all = "kebab-case")]
pub struct Opts {
    /// Global options.
    #[command(flatten)]
    global: GlobalOpts,
    /// Application subcommands.
    #[command(subcommand)]
    command: commands::Command,
}

fn main() -> ExitCode {
    match try_main() {
        Ok(code) => code,
        Err(err) => {
            // Nothing else to do if stderr itself is gone.
            let _ = report(&mut std::io::stderr(), &err);
            ExitCode::FAILURE
        }
    }
}

/// Prints the error and each of its causes as a tree.
fn report(out: &mut impl Write, err: &Error) -> io::Result<()> {
    writeln!(
        out,
        "{0} `timeutil` terminated due to an error.",
        style("ERROR:").red()
    )?;
    writeln!(out)?;
    writeln!(out, "  {0} {err}", style('×').red())?;

    let mut causes = err.chain().skip(1).peekable();
    while let Some(cause) = causes.next() {
        let branch = if causes.peek().is_some() { "├─▶" } else { "╰─▶" };
        writeln!(out, "  {0} {cause}", style(branch).red())?;
    }

    Ok(())
}

fn try_main() -> Result<ExitCode> {
    color_eyre::install()?;

    let opts = Opts::parse();
    let config: Config = confy::load(CONFIG_NAME, None)
        .with_context(|| format!("could not load the `{CONFIG_NAME}` configuration"))?;

    if opts.global.verbose {
        crate::debug!(to: std::io::stderr(), from: "timeutil", "loaded configuration: {config:?}")?;
    }

    let code = commands::handle(config, &opts.global, opts.command)?;

    Ok(code)
}
