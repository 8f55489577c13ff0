use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::{LookupError, ProviderSettings, model::WeatherReport};

use super::WeatherProvider;

#[derive(Clone)]
pub struct OpenWeatherProvider {
    settings: ProviderSettings,
    http: Client,
}

impl OpenWeatherProvider {
    /// Build a provider whose HTTP client enforces `settings.request_timeout`
    /// on every lookup.
    pub fn new(settings: ProviderSettings) -> reqwest::Result<Self> {
        let http = Client::builder().timeout(settings.request_timeout).build()?;
        Ok(Self { settings, http })
    }

    async fn fetch_current(&self, place: &str) -> Result<WeatherReport, LookupError> {
        let res = self
            .http
            .get(self.settings.current_weather_url())
            .query(&[("q", place), ("appid", self.settings.api_key.as_str())])
            .send()
            .await
            .map_err(|err| self.transport_error(err))?;

        let status = res.status();
        if status == StatusCode::NOT_FOUND {
            debug!(place, "OpenWeather does not know this place");
            return Err(LookupError::NotFound { place: place.to_string() });
        }

        let body = res.text().await.map_err(|err| self.transport_error(err))?;
        debug!(%status, body = %truncate_body(&body), "OpenWeather current response");

        parse_current(status, &body)
    }

    fn transport_error(&self, err: reqwest::Error) -> LookupError {
        if err.is_timeout() {
            LookupError::Timeout(self.settings.request_timeout)
        } else {
            LookupError::Transport(err)
        }
    }
}

impl std::fmt::Debug for OpenWeatherProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherProvider")
            .field("base_url", &self.settings.base_url)
            .field("request_timeout", &self.settings.request_timeout)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, place: &str) -> Result<WeatherReport, LookupError> {
        self.fetch_current(place).await
    }
}

/// Parse a current-weather body. Non-404 error statuses are not special:
/// their bodies simply fail to parse.
fn parse_current(status: StatusCode, body: &str) -> Result<WeatherReport, LookupError> {
    let malformed = |reason: String| LookupError::Malformed { status: status.as_u16(), reason };

    let report: WeatherReport =
        serde_json::from_str(body).map_err(|err| malformed(err.to_string()))?;

    if report.conditions.is_empty() {
        return Err(malformed("response lists no weather conditions".to_string()));
    }

    Ok(report)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}
