use core::fmt::Display;
use core::str::FromStr;

use heapless::String;

use crate::error::ConfigError;

/// Measurement convention requested from the weather API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Units {
    /// Canada: Celsius, km/h.
    Ca,
    /// United Kingdom: Celsius, mph.
    Uk,
    /// United States: Fahrenheit, mph.
    Us,
    /// SI: Celsius, m/s.
    Si,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Ca => "ca",
            Units::Uk => "uk",
            Units::Us => "us",
            Units::Si => "si",
        }
    }

    pub fn temperature_unit(&self) -> &'static str {
        match self {
            Units::Us => "F",
            Units::Ca | Units::Uk | Units::Si => "C",
        }
    }

    pub fn wind_speed_unit(&self) -> &'static str {
        match self {
            Units::Ca => "km/h",
            Units::Uk | Units::Us => "mph",
            Units::Si => "m/s",
        }
    }
}

impl FromStr for Units {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ca" => Ok(Units::Ca),
            "uk" => Ok(Units::Uk),
            "us" => Ok(Units::Us),
            "si" => Ok(Units::Si),
            other => Err(ConfigError::UnknownUnits(truncated(other))),
        }
    }
}

/// Longest prefix of `value` that fits, cut on a char boundary.
fn truncated<const N: usize>(value: &str) -> String<N> {
    let mut out = String::new();
    for c in value.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

impl Display for Units {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
