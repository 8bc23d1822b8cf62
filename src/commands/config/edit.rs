use std::process::{Command, ExitCode};

use clap::Parser;
use color_eyre::eyre::{eyre, Context};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use crate::config::{Config, CONFIG_NAME};
use crate::utils::terminal::USER_ATTENDED;
use crate::{GlobalOpts, Result};

#[derive(Debug, Clone, PartialEq, Parser)]
#[command(author, rename_all = "kebab-case")]
pub struct Opts {
    /// Command to use to open the text editor
    #[arg(long, env)]
    editor: Option<String>,
}

pub fn handle(_: Config, global: &GlobalOpts, opts: Opts) -> Result<ExitCode> {
    let path = confy::get_configuration_file_path(CONFIG_NAME, None)?;

    let maybe_editor = (opts.editor.map(Ok))
        .or_else(|| {
            USER_ATTENDED.then(|| {
                let theme = ColorfulTheme::default();
                let editor = Input::<String>::with_theme(&theme)
                    .with_prompt("Enter the editor command to use")
                    .interact_text();
                editor
            })
        })
        .transpose()?;

    let Some(editor) = maybe_editor else {
        crate::error!(to: std::io::stderr(), from: "timeutil:config", "could not determine the editor to use")?;
        crate::error!(to: std::io::stderr(), from: "timeutil:config", "please specify an editor via CLI arguments or using the `EDITOR` environment variable")?;
        return Ok(ExitCode::FAILURE);
    };

    let words =
        shell_words::split(&editor).context("could not split EDITOR command into shell words")?;

    let (command, arguments) = words
        .split_first()
        .ok_or_else(|| eyre!("no words in EDITOR shell command"))?;

    if global.verbose {
        crate::debug!(from: "timeutil:config", "running `{command}` on `{0}`", path.display())?;
    }

    let status = Command::new(command)
        .args(arguments)
        .arg(&path)
        .status()
        .context("could not spawn EDITOR process and wait for it to complete")?;

    if !status.success() {
        crate::error!(to: std::io::stderr(), "error when editing configuration ({status}) !")?;
        return Ok(ExitCode::FAILURE);
    }

    // Surface mistakes right away rather than on the next invocation.
    let reloaded: Result<Config, _> = confy::load(CONFIG_NAME, None);
    if let Err(err) = reloaded {
        crate::warning!(to: std::io::stderr(), "the edited configuration could not be loaded: {err}")?;
        return Ok(ExitCode::FAILURE);
    }

    crate::success!(to: std::io::stdout(), "configuration successfully edited ({status}) !")?;

    Ok(ExitCode::SUCCESS)
}
