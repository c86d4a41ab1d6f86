use crate::metrics::AttributeValue;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown rate unit '{0}', expected seconds, minutes, hours or days")]
    UnknownRateUnit(String),

    #[error("Invalid tag '{0}', expected key=value")]
    InvalidTag(String),
}

/// Reporting unit for exported rates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RateUnit {
    #[default]
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl RateUnit {
    /// Multiplier turning an events-per-second rate into events per unit.
    pub fn factor(&self) -> f64 {
        match self {
            RateUnit::Seconds => 1.0,
            RateUnit::Minutes => 60.0,
            RateUnit::Hours => 3_600.0,
            RateUnit::Days => 86_400.0,
        }
    }
}

impl FromStr for RateUnit {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "s" | "second" | "seconds" => Ok(RateUnit::Seconds),
            "m" | "minute" | "minutes" => Ok(RateUnit::Minutes),
            "h" | "hour" | "hours" => Ok(RateUnit::Hours),
            "d" | "day" | "days" => Ok(RateUnit::Days),
            _ => Err(ConfigError::UnknownRateUnit(s.to_string())),
        }
    }
}

impl fmt::Display for RateUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RateUnit::Seconds => "seconds",
            RateUnit::Minutes => "minutes",
            RateUnit::Hours => "hours",
            RateUnit::Days => "days",
        };
        f.write_str(name)
    }
}

/// Parses a `key=value` tag. The value is typed with
/// [`AttributeValue::parse_scalar`].
pub fn parse_tag(raw: &str) -> Result<(String, AttributeValue), ConfigError> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| ConfigError::InvalidTag(raw.to_string()))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(ConfigError::InvalidTag(raw.to_string()));
    }

    Ok((key.to_string(), AttributeValue::parse_scalar(value.trim())))
}
