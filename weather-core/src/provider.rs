use crate::{LookupError, ProviderSettings, WeatherReport, provider::openweather::OpenWeatherProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Look up the current conditions for a free-text place name.
    async fn current_weather(&self, place: &str) -> Result<WeatherReport, LookupError>;
}

/// Construct the provider described by `settings`.
pub fn provider_from_settings(
    settings: ProviderSettings,
) -> Result<Box<dyn WeatherProvider>, LookupError> {
    let provider = OpenWeatherProvider::new(settings).map_err(LookupError::Transport)?;
    Ok(Box::new(provider))
}
