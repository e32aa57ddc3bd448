// Compiled-in deployment parameters. Edit the values here, or set the
// matching environment variable when building, e.g.
// `SSID=home PASSWORD=... cargo build`.

use crate::error::PLACEHOLDER;

const fn env_or(value: Option<&'static str>, fallback: &'static str) -> &'static str {
    match value {
        Some(v) => v,
        None => fallback,
    }
}

/// WiFi network name and password.
#[derive(Debug, Clone, Copy)]
pub struct WifiParam {
    pub ssid: &'static str,
    pub password: &'static str,
}

// Wifi constants
// Add entries to try more than one network, in order of preference.
pub const WIFI_NETWORKS: &[WifiParam] = &[WifiParam {
    ssid: env_or(option_env!("SSID"), PLACEHOLDER),
    password: env_or(option_env!("PASSWORD"), PLACEHOLDER),
}];

// Time to be in deep sleep, in seconds.
pub const SLEEP_TIME_SECS: u32 = 30 * 60;

// Minutes past each hour at which to refresh, ascending. Leave empty to
// rely on SLEEP_TIME_SECS alone.
pub const UPDATE_TIMES: &[u8] = &[];

// Pirate Weather API key and the location to fetch a forecast for.
pub const API_KEY: &str = env_or(option_env!("PIRATE_WEATHER_API_KEY"), PLACEHOLDER);
pub const LATITUDE: &str = env_or(option_env!("LATITUDE"), PLACEHOLDER);
pub const LONGITUDE: &str = env_or(option_env!("LONGITUDE"), PLACEHOLDER);

// The title to show at the top of the display.
pub const TITLE: &str = env_or(option_env!("TITLE"), PLACEHOLDER);

// Units for display, possible values: ca, uk, us, si.
pub const UNITS: &str = env_or(option_env!("UNITS"), "si");
