use std::time::Duration;

/// Default host of the OpenWeatherMap API.
pub const DEFAULT_BASE_URL: &str = "http://api.openweathermap.org";

/// Upper bound for a single lookup, connect and body included.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Everything needed to talk to the weather provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    pub api_key: String,

    /// Scheme and host, without a trailing path, e.g. `http://api.openweathermap.org`.
    pub base_url: String,

    pub request_timeout: Duration,
}

impl ProviderSettings {
    /// Settings for the public OpenWeatherMap endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Full URL of the current-weather endpoint.
    pub fn current_weather_url(&self) -> String {
        format!("{}/data/2.5/weather", self.base_url.trim_end_matches('/'))
    }
}
