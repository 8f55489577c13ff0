//! Core library for the Telegram weather bot.
//!
//! This crate defines:
//! - The `WeatherReport` model parsed from the provider's payload
//! - The `WeatherProvider` abstraction and its OpenWeatherMap implementation
//! - Lookup errors and provider settings
//!
//! It is used by `weather-bot`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;

pub use config::ProviderSettings;
pub use error::LookupError;
pub use model::{Condition, Coordinates, Country, Measurements, WeatherReport, Wind};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider, provider_from_settings};
