use heapless::String;

use crate::error::{ConfigError, bounded, check_configured};

// Enough for "-179.1234567890"
pub const COORD_LEN: usize = 16;

/// Forecast location. The decimal strings are kept as written so the API
/// request carries exactly what the deployer configured.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    lat: String<COORD_LEN>,
    lon: String<COORD_LEN>,
    latitude: f64,
    longitude: f64,
}

impl Location {
    pub fn new(lat: &str, lon: &str) -> Result<Self, ConfigError> {
        let latitude = parse_degrees("lat", lat, 90.0)?;
        let longitude = parse_degrees("lon", lon, 180.0)?;
        Ok(Location {
            lat: bounded("lat", lat.trim())?,
            lon: bounded("lon", lon.trim())?,
            latitude,
            longitude,
        })
    }

    pub fn lat(&self) -> &str {
        &self.lat
    }

    pub fn lon(&self) -> &str {
        &self.lon
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// `[-]digits[.digits]`, the only form passed through to the API.
fn is_plain_decimal(value: &str) -> bool {
    let unsigned = value.strip_prefix('-').unwrap_or(value);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    all_digits(whole) && fraction.is_none_or(all_digits)
}

fn parse_degrees(field: &'static str, value: &str, limit: f64) -> Result<f64, ConfigError> {
    check_configured(field, value)?;
    let value = value.trim();
    // f64 parsing alone would also take "1e1", "+39", "inf" and "nan"
    if !is_plain_decimal(value) {
        return Err(ConfigError::InvalidCoordinate { field });
    }
    let degrees: f64 = value
        .parse()
        .map_err(|_| ConfigError::InvalidCoordinate { field })?;
    if !degrees.is_finite() || degrees.abs() > limit {
        return Err(ConfigError::InvalidCoordinate { field });
    }
    Ok(degrees)
}
