use chrono::{DateTime, FixedOffset, Local, Utc};
use serde::{Deserialize, Serialize};
use timeutil::Duration;

pub const CONFIG_NAME: &str = "timeutil";

/// The main configuration structure.
#[repr(u8)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "version")]
pub enum Config {
    #[serde(rename = "1")]
    V1(V1Config),
}

impl Config {
    pub fn format(&self) -> &FormatConfig {
        match self {
            Config::V1(config) => &config.format,
        }
    }

    pub fn reference(&self) -> &ReferenceConfig {
        match self {
            Config::V1(config) => &config.reference,
        }
    }
}

/// The V1 configuration structure.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct V1Config {
    /// How durations are displayed.
    #[serde(default)]
    pub format: FormatConfig,
    /// How the implicit reference instant of time expressions is determined.
    #[serde(default)]
    pub reference: ReferenceConfig,
}

/// How durations are displayed.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Whether to display durations using a single coarse unit (eg. `3d 4h`) by default.
    pub simplified: bool,
}

/// The timezone in which time expressions are resolved.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceZone {
    #[default]
    Local,
    Utc,
}

/// How the implicit reference instant of time expressions is determined.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceConfig {
    /// The timezone of the reference instant (and therefore, of where midnight falls).
    #[serde(default)]
    pub timezone: ReferenceZone,
    /// A fixed amount added to the wall-clock time, to compensate for a skewed system clock.
    #[serde(serialize_with = "timeutil::serde_utils::duration::serialize_opt")]
    #[serde(deserialize_with = "timeutil::serde_utils::duration::deserialize_opt")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjustment: Option<Duration>,
}

impl ReferenceConfig {
    /// The current reference instant, including the adjustment.
    ///
    /// It is expressed in the configured timezone, unless `zone` overrides it.
    pub fn now(&self, zone: Option<ReferenceZone>) -> Option<DateTime<FixedOffset>> {
        let now = match zone.unwrap_or(self.timezone) {
            ReferenceZone::Local => Local::now().fixed_offset(),
            ReferenceZone::Utc => Utc::now().fixed_offset(),
        };

        match self.adjustment {
            Some(adjustment) => now.checked_add_signed(adjustment.into()),
            None => Some(now),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::V1(V1Config::default())
    }
}

#[cfg(test)]
mod tests {
    use timeutil::Duration;

    use super::{Config, ReferenceConfig, ReferenceZone};

    #[test]
    fn default_configuration() {
        let config = Config::default();
        assert!(!config.format().simplified);
        assert_eq!(config.reference().timezone, ReferenceZone::Local);
        assert_eq!(config.reference().adjustment, None);
    }

    #[test]
    fn reference_adjustment_is_applied() {
        let config = ReferenceConfig {
            timezone: ReferenceZone::Utc,
            adjustment: Some(Duration::HOUR),
        };
        let before = chrono::Utc::now();
        let now = config.now(None).unwrap();
        assert!(now >= before + chrono::Duration::hours(1));
        assert_eq!(now.offset().local_minus_utc(), 0);
    }

    #[test]
    fn reference_zone_defaults_to_the_configured_one() {
        let config = ReferenceConfig {
            timezone: ReferenceZone::Utc,
            adjustment: None,
        };
        let now = config.now(None).unwrap();
        assert_eq!(now.offset().local_minus_utc(), 0);

        let local = chrono::Local::now().offset().local_minus_utc();
        let overridden = config.now(Some(ReferenceZone::Local)).unwrap();
        assert_eq!(overridden.offset().local_minus_utc(), local);
    }
}
