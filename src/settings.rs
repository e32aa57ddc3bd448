use core::time::Duration;

use heapless::{String, Vec};
use log::{info, warn};
use serde::Deserialize;
use serde_json_core::{self as json_core};

use crate::{
    config,
    error::{ConfigError, bounded, check_configured},
    location::Location,
    schedule::{MAX_UPDATE_TIMES, UpdateSchedule},
    secret::Secret,
    units::Units,
    wifi::{MAX_WIFI_NETWORKS, WifiNetworks},
};

// Heuristic string capacities
pub const API_KEY_LEN: usize = 64;
pub const TITLE_LEN: usize = 64;

// Document strings are read with room to spare so that an overlong value
// reaches the per-field length checks instead of failing inside the parser.
// Also the size of the unescape buffer.
const DOC_FIELD_LEN: usize = 128;

const DEFAULT_SLEEP_TIME_SECS: u32 = 30 * 60;

/// Validated deployment parameters, read-only once built.
#[derive(Debug, Clone)]
pub struct Settings {
    wifi: WifiNetworks,
    sleep_time_secs: u32,
    update_schedule: UpdateSchedule,
    api_key: Secret<API_KEY_LEN>,
    location: Location,
    title: String<TITLE_LEN>,
    units: Units,
}

/// Parameter document as written by the deployer.
///
/// Either `wifi_network` + `wifi_password`, or `wifi_networks` +
/// `wifi_passwords` (+ optional `wifi_count`), but not both.
#[derive(Deserialize)]
struct ParamsDocument {
    wifi_network: Option<String<DOC_FIELD_LEN>>,
    wifi_password: Option<String<DOC_FIELD_LEN>>,
    wifi_count: Option<usize>,
    wifi_networks: Option<Vec<String<DOC_FIELD_LEN>, MAX_WIFI_NETWORKS>>,
    wifi_passwords: Option<Vec<String<DOC_FIELD_LEN>, MAX_WIFI_NETWORKS>>,
    sleep_time: Option<u32>,
    update_times: Option<Vec<u8, MAX_UPDATE_TIMES>>,
    api_key: String<DOC_FIELD_LEN>,
    lat: String<DOC_FIELD_LEN>,
    lon: String<DOC_FIELD_LEN>,
    title: String<DOC_FIELD_LEN>,
    units: String<DOC_FIELD_LEN>,
}

impl ParamsDocument {
    fn wifi(&self) -> Result<WifiNetworks, ConfigError> {
        let single = self.wifi_network.is_some() || self.wifi_password.is_some();
        let multi = self.wifi_networks.is_some()
            || self.wifi_passwords.is_some()
            || self.wifi_count.is_some();

        match (single, multi) {
            (true, true) => Err(ConfigError::AmbiguousWifiLayout),
            (true, false) => WifiNetworks::single(
                self.wifi_network.as_deref().unwrap_or_default(),
                self.wifi_password.as_deref().unwrap_or_default(),
            ),
            (false, true) => WifiNetworks::from_parallel(
                self.wifi_count,
                self.wifi_networks.as_deref().unwrap_or(&[]),
                self.wifi_passwords.as_deref().unwrap_or(&[]),
            ),
            (false, false) => Err(ConfigError::NoWifiNetworks),
        }
    }
}

impl Settings {
    /// Validate the compiled-in parameter table.
    pub fn from_params() -> Result<Self, ConfigError> {
        let result = WifiNetworks::from_pairs(
            config::WIFI_NETWORKS
                .iter()
                .map(|param| (param.ssid, param.password)),
        )
        .and_then(|wifi| {
            Settings::assemble(
                wifi,
                config::SLEEP_TIME_SECS,
                config::UPDATE_TIMES,
                config::API_KEY,
                config::LATITUDE,
                config::LONGITUDE,
                config::TITLE,
                config::UNITS,
            )
        });
        log_outcome("compiled-in", &result);
        result
    }

    /// Parse and validate a JSON parameter document.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ConfigError> {
        let result = Settings::parse_document(bytes);
        log_outcome("JSON", &result);
        result
    }

    fn parse_document(bytes: &[u8]) -> Result<Self, ConfigError> {
        // Escaped strings ("pa\"ss", "Caf\u00e9") are decoded through this buffer.
        let mut unescape_buf = [0u8; DOC_FIELD_LEN];
        // serde_json_core::from_slice_escaped returns (T, consumed)
        let (doc, _consumed) =
            json_core::from_slice_escaped::<ParamsDocument>(bytes, &mut unescape_buf)?;
        let wifi = doc.wifi()?;
        Settings::assemble(
            wifi,
            doc.sleep_time.unwrap_or(DEFAULT_SLEEP_TIME_SECS),
            doc.update_times.as_deref().unwrap_or(&[]),
            &doc.api_key,
            &doc.lat,
            &doc.lon,
            &doc.title,
            &doc.units,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn assemble(
        wifi: WifiNetworks,
        sleep_time_secs: u32,
        update_times: &[u8],
        api_key: &str,
        lat: &str,
        lon: &str,
        title: &str,
        units: &str,
    ) -> Result<Self, ConfigError> {
        let update_schedule = UpdateSchedule::new(update_times)?;

        check_configured("api_key", api_key)?;
        let api_key = Secret::new(bounded("api_key", api_key.trim())?);

        let location = Location::new(lat, lon)?;

        check_configured("title", title)?;
        let title = bounded("title", title.trim())?;

        // exact match only, surrounding whitespace included
        check_configured("units", units)?;
        let units = units.parse::<Units>()?;

        Ok(Settings {
            wifi,
            sleep_time_secs,
            update_schedule,
            api_key,
            location,
            title,
            units,
        })
    }

    pub fn wifi(&self) -> &WifiNetworks {
        &self.wifi
    }

    pub fn sleep_time_secs(&self) -> u32 {
        self.sleep_time_secs
    }

    pub fn sleep_duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.sleep_time_secs))
    }

    pub fn update_schedule(&self) -> &UpdateSchedule {
        &self.update_schedule
    }

    pub fn api_key(&self) -> &Secret<API_KEY_LEN> {
        &self.api_key
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn units(&self) -> Units {
        self.units
    }
}

/// Parse a JSON parameter document into validated settings.
impl TryFrom<&[u8]> for Settings {
    type Error = ConfigError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Settings::from_json(value)
    }
}

fn log_outcome(source: &str, result: &Result<Settings, ConfigError>) {
    match result {
        Ok(settings) => info!(
            "Loaded {} params: {} WiFi network(s), sleep {}s, {} update time(s), units {}",
            source,
            settings.wifi.len(),
            settings.sleep_time_secs,
            settings.update_schedule.len(),
            settings.units
        ),
        Err(e) => warn!("Rejected {} params: {}", source, e),
    }
}
