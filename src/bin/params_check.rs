use std::process::ExitCode;

use log::{error, info};
use weather_params::{
    Settings,
    forecast::{PIRATE_WEATHER_HOST, build_forecast_query},
};

const USAGE: &str = "usage: params_check <params.json> | --builtin";

fn main() -> ExitCode {
    // Initialize logger, RUST_LOG overrides the default level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Some(arg) = std::env::args().nth(1) else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    let settings = if arg == "--builtin" {
        Settings::from_params()
    } else {
        let bytes = match std::fs::read(&arg) {
            Ok(bytes) => bytes,
            Err(e) => {
                error!("Failed to read {}: {}", arg, e);
                return ExitCode::FAILURE;
            }
        };
        Settings::from_json(&bytes)
    };

    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            error!("Params are not deployable: {}", e);
            return ExitCode::FAILURE;
        }
    };

    for (i, network) in settings.wifi().iter().enumerate() {
        info!("WiFi network {}: {}", i + 1, network.ssid);
    }
    info!("Sleep time: {}s", settings.sleep_time_secs());
    if settings.update_schedule().is_empty() {
        info!("Update schedule: none");
    } else {
        info!("Update schedule: {:?}", settings.update_schedule().as_slice());
    }
    info!(
        "Location: {}, {}",
        settings.location().lat(),
        settings.location().lon()
    );
    info!("Title: {}", settings.title());
    info!(
        "Units: {} ({}, {})",
        settings.units(),
        settings.units().temperature_unit(),
        settings.units().wind_speed_unit()
    );

    match build_forecast_query(&settings) {
        Ok(query) => {
            // the request target embeds the API key
            info!(
                "Forecast request fits: {} bytes to {}",
                query.len(),
                PIRATE_WEATHER_HOST
            );
            info!("Params OK");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Params are not deployable: {}", e);
            ExitCode::FAILURE
        }
    }
}
