#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod error;
pub mod forecast;
pub mod location;
pub mod schedule;
pub mod secret;
pub mod settings;
pub mod units;
pub mod wifi;

pub use error::ConfigError;
pub use settings::Settings;
