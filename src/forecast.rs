use core::fmt::Write as _;

use heapless::String;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::{error::ConfigError, settings::Settings};

pub const PIRATE_WEATHER_HOST: &str = "api.pirateweather.net";

pub const QUERY_LEN: usize = 192;

const PATH_ENCODE_SET: &AsciiSet = &CONTROLS
    // separators / reserved characters that would break the path or query:
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b',')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Build the Pirate Weather forecast request target for the configured
/// key, location and unit system, e.g.
/// `/forecast/KEY/39.868,-104.9719?units=si`.
///
/// Every configured component is percent-encoded so a stray character in
/// the parameters cannot change the shape of the request.
pub fn build_forecast_query(settings: &Settings) -> Result<String<QUERY_LEN>, ConfigError> {
    let location = settings.location();
    let mut query: String<QUERY_LEN> = String::new();
    write!(
        query,
        "/forecast/{}/{},{}?units={}",
        utf8_percent_encode(settings.api_key().expose(), PATH_ENCODE_SET),
        utf8_percent_encode(location.lat(), PATH_ENCODE_SET),
        utf8_percent_encode(location.lon(), PATH_ENCODE_SET),
        settings.units().as_str(),
    )
    .map_err(|_| ConfigError::QueryTooLong)?;
    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(api_key: &str) -> Settings {
        let doc = format!(
            r#"{{
                "wifi_network": "home", "wifi_password": "pw",
                "api_key": "{api_key}", "lat": "39.868", "lon": "-104.9719",
                "title": "Denver", "units": "ca"
            }}"#
        );
        Settings::from_json(doc.as_bytes()).unwrap()
    }

    #[test]
    fn formats_key_location_and_units() {
        let query = build_forecast_query(&settings("abc123")).unwrap();
        assert_eq!(query.as_str(), "/forecast/abc123/39.868,-104.9719?units=ca");
    }

    #[test]
    fn encodes_reserved_characters_in_the_key() {
        let query = build_forecast_query(&settings("a/b?c")).unwrap();
        assert_eq!(query.as_str(), "/forecast/a%2Fb%3Fc/39.868,-104.9719?units=ca");
    }

    #[test]
    fn reports_overflow() {
        // 64 slashes encode to 192 bytes, more than the buffer after the prefix.
        let key = "/".repeat(64);
        assert!(matches!(
            build_forecast_query(&settings(&key)),
            Err(ConfigError::QueryTooLong)
        ));
    }
}
