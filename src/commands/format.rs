use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use timeutil::Duration;

use crate::config::Config;
use crate::{GlobalOpts, Result};

#[derive(Debug, Clone, PartialEq, Parser)]
#[command(author, rename_all = "kebab-case")]
pub struct Opts {
    /// Display a single coarse unit (eg. `3d 4h`) instead of the full canonical form
    #[arg(long, short, conflicts_with = "canonical")]
    simplified: bool,
    /// Display the full canonical form, even if the configuration prefers simplified durations
    #[arg(long, short)]
    canonical: bool,
    /// The number of nanoseconds to format
    #[arg(allow_negative_numbers = true)]
    nanoseconds: i64,
}

impl Opts {
    fn use_simplified(&self, config: &Config) -> bool {
        self.simplified || (!self.canonical && config.format().simplified)
    }
}

pub fn handle(config: Config, global: &GlobalOpts, opts: Opts) -> Result<ExitCode> {
    let duration = Duration::from_nanos(opts.nanoseconds);
    let simplified = opts.use_simplified(&config);

    if global.verbose {
        crate::debug!(from: "timeutil:format", "formatting {duration:?} (simplified = {simplified})")?;
    }

    let formatted = if simplified {
        timeutil::format_duration_simplified(duration)
    } else {
        timeutil::format_duration(duration)
    };
    writeln!(std::io::stdout(), "{formatted}")?;

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Opts;
    use crate::config::{Config, FormatConfig, V1Config};

    fn parse(args: &[&str]) -> Opts {
        Opts::try_parse_from(std::iter::once("format").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn configuration_picks_the_default_form() {
        let simplified = Config::V1(V1Config {
            format: FormatConfig { simplified: true },
            ..V1Config::default()
        });

        assert!(!parse(&["5"]).use_simplified(&Config::default()));
        assert!(parse(&["5"]).use_simplified(&simplified));
        assert!(parse(&["--simplified", "5"]).use_simplified(&Config::default()));
        assert!(!parse(&["--canonical", "5"]).use_simplified(&simplified));
    }

    #[test]
    fn accepts_negative_counts() {
        assert_eq!(parse(&["-1500"]).nanoseconds, -1500);
        assert!(Opts::try_parse_from(["format", "-s", "-c", "1"]).is_err());
    }
}
