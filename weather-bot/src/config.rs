use std::time::Duration;

use thiserror::Error;
use weather_core::ProviderSettings;

/// Bot API host.
pub const TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// How long one `getUpdates` call may wait for new messages.
pub const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required flag -{0}")]
    Missing(&'static str),
}

/// Start-up configuration, fixed for the lifetime of the process.
#[derive(Clone)]
pub struct BotConfig {
    pub token: String,
    pub telegram_api_url: String,
    pub poll_timeout: Duration,
    pub provider: ProviderSettings,
}

impl BotConfig {
    /// Validate the two credentials and fill in defaults for everything else.
    /// Blank values count as missing.
    pub fn from_credentials(token: Option<String>, api_key: Option<String>) -> Result<Self, ConfigError> {
        let token = non_blank(token).ok_or(ConfigError::Missing("token"))?;
        let api_key = non_blank(api_key).ok_or(ConfigError::Missing("api"))?;

        Ok(Self {
            token,
            telegram_api_url: TELEGRAM_API_URL.to_string(),
            poll_timeout: DEFAULT_POLL_TIMEOUT,
            provider: ProviderSettings::new(api_key),
        })
    }

    /// Base URL for Bot API methods, e.g. `https://api.telegram.org/bot<token>`.
    pub fn bot_api_base(&self) -> String {
        format!("{}/bot{}", self.telegram_api_url.trim_end_matches('/'), self.token)
    }
}

impl std::fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotConfig")
            .field("telegram_api_url", &self.telegram_api_url)
            .field("poll_timeout", &self.poll_timeout)
            .field("provider_base_url", &self.provider.base_url)
            .finish_non_exhaustive()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
