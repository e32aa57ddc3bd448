use heapless::String;
use thiserror::Error;

/// Unified error type for loading and validating deployment parameters.
#[derive(Debug, Error)]
pub enum ConfigError {
    // Parameter document errors
    #[error("malformed params document: {0}")]
    Json(serde_json_core::de::Error),

    // WiFi errors
    #[error("no WiFi network configured")]
    NoWifiNetworks,
    #[error("more than {max} WiFi networks configured")]
    TooManyWifiNetworks { max: usize },
    #[error("both single and multi-network WiFi layouts are present")]
    AmbiguousWifiLayout,
    #[error("wifi_count is {count} but {networks} networks and {passwords} passwords are given")]
    WifiCountMismatch {
        count: usize,
        networks: usize,
        passwords: usize,
    },

    // Field errors
    #[error("`{0}` is empty")]
    EmptyField(&'static str),
    #[error("`{0}` still holds the placeholder value")]
    Placeholder(&'static str),
    #[error("`{0}` is longer than allowed")]
    FieldTooLong(&'static str),

    // Schedule errors
    #[error("update minute {minute} is outside 0..=59")]
    MinuteOutOfRange { minute: u8 },
    #[error("update schedule is not strictly ascending at position {index}")]
    ScheduleNotAscending { index: usize },

    #[error("`{field}` is not a valid coordinate")]
    InvalidCoordinate { field: &'static str },
    #[error("unknown unit system `{0}`, expected one of ca, uk, us, si")]
    UnknownUnits(String<8>),

    #[error("forecast request target does not fit its buffer")]
    QueryTooLong,
}

impl From<serde_json_core::de::Error> for ConfigError {
    fn from(e: serde_json_core::de::Error) -> Self {
        ConfigError::Json(e)
    }
}

/// Placeholder written into every unconfigured string parameter.
pub const PLACEHOLDER: &str = "TODO";

/// Reject empty and placeholder string parameters.
pub(crate) fn check_configured(field: &'static str, value: &str) -> Result<(), ConfigError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ConfigError::EmptyField(field));
    }
    if value == PLACEHOLDER {
        return Err(ConfigError::Placeholder(field));
    }
    Ok(())
}

/// Copy a borrowed string into a bounded heapless string.
pub(crate) fn bounded<const N: usize>(
    field: &'static str,
    value: &str,
) -> Result<String<N>, ConfigError> {
    String::try_from(value).map_err(|_| ConfigError::FieldTooLong(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_and_blank_values_are_rejected() {
        assert!(matches!(
            check_configured("title", "TODO"),
            Err(ConfigError::Placeholder("title"))
        ));
        assert!(matches!(
            check_configured("title", "  "),
            Err(ConfigError::EmptyField("title"))
        ));
        assert!(check_configured("title", "Denver").is_ok());
    }

    #[test]
    fn bounded_rejects_overlong_values() {
        assert!(bounded::<4>("units", "si").is_ok());
        assert!(matches!(
            bounded::<4>("units", "metric"),
            Err(ConfigError::FieldTooLong("units"))
        ));
    }

    #[test]
    fn messages_name_the_offending_field() {
        let msg = format!("{}", ConfigError::Placeholder("api_key"));
        assert_eq!(msg, "`api_key` still holds the placeholder value");
        let msg = format!(
            "{}",
            ConfigError::WifiCountMismatch {
                count: 3,
                networks: 2,
                passwords: 2
            }
        );
        assert!(msg.contains("wifi_count is 3"));
    }
}
