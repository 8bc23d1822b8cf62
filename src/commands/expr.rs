use std::io::Write;
use std::process::ExitCode;

use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use clap::Parser;
use color_eyre::eyre::{eyre, Context};
use timeutil::Duration;

use crate::config::{Config, ReferenceZone};
use crate::utils::terminal::USER_ATTENDED;
use crate::{GlobalOpts, Result};

#[derive(Debug, Clone, PartialEq, Parser)]
#[command(author, rename_all = "kebab-case")]
pub struct Opts {
    /// The reference instant (as an RFC 3339 timestamp) to resolve relative expressions against [default: now]
    #[arg(long, short)]
    reference: Option<String>,
    /// Resolve the expression in UTC (by default, an explicit reference keeps its own offset and
    /// the current time uses the configured timezone)
    #[arg(long, short)]
    utc: bool,
    /// The time expression (eg. `now`, `yesterday`, `-10d`, `05-01`, `2021-05-01`)
    #[arg(allow_hyphen_values = true)]
    expression: String,
}

impl Opts {
    fn reference(&self, config: &Config) -> Result<DateTime<FixedOffset>> {
        let zone = self.utc.then_some(ReferenceZone::Utc);

        match self.reference.as_deref() {
            Some(reference) => {
                let reference = DateTime::parse_from_rfc3339(reference).with_context(|| {
                    format!("could not parse reference instant `{reference}` as an RFC 3339 timestamp")
                })?;
                Ok(match zone {
                    Some(_) => reference.with_timezone(&Utc).fixed_offset(),
                    None => reference,
                })
            }
            None => config
                .reference()
                .now(zone)
                .ok_or_else(|| eyre!("the adjusted reference instant is out of range")),
        }
    }
}

pub fn handle(config: Config, global: &GlobalOpts, opts: Opts) -> Result<ExitCode> {
    let reference = opts.reference(&config)?;

    if global.verbose {
        crate::debug!(
            from: "timeutil:expr",
            "reference = `{0}`",
            reference.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        )?;
    }

    let instant = timeutil::parse_expression(&opts.expression, &reference)
        .with_context(|| format!("could not resolve time expression `{0}`", opts.expression))?;
    let rendered = instant.to_rfc3339_opts(SecondsFormat::AutoSi, true);

    if *USER_ATTENDED {
        crate::info!(to: std::io::stdout(), "instant = `{rendered}`")?;
        match (instant - reference).num_nanoseconds() {
            Some(nanos) => {
                let offset = Duration::from_nanos(nanos);
                crate::info!(to: std::io::stdout(), "offset = `{offset}`")?;
            }
            None => {
                crate::warning!(
                    to: std::io::stderr(),
                    "offset from the reference instant does not fit in a duration"
                )?;
            }
        }
    } else {
        writeln!(std::io::stdout(), "{rendered}")?;
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Opts;
    use crate::config::Config;

    fn parse(args: &[&str]) -> Opts {
        Opts::try_parse_from(std::iter::once("expr").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn accepts_signed_expressions() {
        assert_eq!(parse(&["-10d"]).expression, "-10d");
        assert_eq!(parse(&["+1h30m"]).expression, "+1h30m");
    }

    #[test]
    fn explicit_reference_is_kept_in_its_offset() {
        let opts = parse(&["--reference", "2024-11-14T18:17:00+02:00", "today"]);
        let reference = opts.reference(&Config::default()).unwrap();
        assert_eq!(reference.offset().local_minus_utc(), 2 * 3600);

        let instant = timeutil::parse_expression(&opts.expression, &reference).unwrap();
        assert_eq!(instant.to_rfc3339(), "2024-11-14T00:00:00+02:00");
    }

    #[test]
    fn utc_flag_converts_the_reference() {
        let opts = parse(&["--utc", "--reference", "2024-11-14T01:00:00+02:00", "today"]);
        let reference = opts.reference(&Config::default()).unwrap();
        assert_eq!(reference.offset().local_minus_utc(), 0);

        let instant = timeutil::parse_expression(&opts.expression, &reference).unwrap();
        assert_eq!(instant.to_rfc3339(), "2024-11-13T00:00:00+00:00");
    }

    #[test]
    fn malformed_reference_is_reported() {
        let opts = parse(&["--reference", "yesterday", "now"]);
        assert!(opts.reference(&Config::default()).is_err());
    }
}
