//! Bot API client over plain HTTPS.

use std::time::Duration;

use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::debug;

use super::types::{ApiResponse, GetUpdates, Message, SendMessage, Update, User};
use crate::config::BotConfig;

/// Timeout for calls that return immediately (`getMe`, `sendMessage`).
const CALL_TIMEOUT: Duration = Duration::from_secs(10);

/// Extra time granted to `getUpdates` on top of the long-poll timeout.
const POLL_MARGIN: Duration = Duration::from_secs(5);

/// Errors that can occur while talking to Telegram.
#[derive(Debug, Error)]
pub enum TelegramError {
    #[error("request to Telegram failed: {0}")]
    Http(#[source] reqwest::Error),

    #[error("Telegram API error {code:?}: {description}")]
    Api { code: Option<i32>, description: String },

    #[error("unexpected response from Telegram: {0}")]
    Decode(#[source] serde_json::Error),
}

impl From<reqwest::Error> for TelegramError {
    // The request URL embeds the bot token.
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.without_url())
    }
}

#[derive(Clone)]
pub struct TelegramBot {
    http: Client,
    api_base: String,
    poll_timeout: Duration,
}

impl TelegramBot {
    pub fn new(config: &BotConfig) -> Result<Self, TelegramError> {
        let http = Client::builder().build()?;

        Ok(Self {
            http,
            api_base: config.bot_api_base(),
            poll_timeout: config.poll_timeout,
        })
    }

    /// Identify the bot. Fails when the token is rejected.
    pub async fn get_me(&self) -> Result<User, TelegramError> {
        self.call("getMe", &serde_json::json!({}), CALL_TIMEOUT).await
    }

    /// Long-poll for messages newer than `offset`.
    pub async fn get_updates(&self, offset: Option<i64>) -> Result<Vec<Update>, TelegramError> {
        let params = GetUpdates {
            offset,
            timeout: self.poll_timeout.as_secs(),
            allowed_updates: &["message"],
        };

        self.call("getUpdates", &params, self.poll_timeout + POLL_MARGIN).await
    }

    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<Message, TelegramError> {
        self.call("sendMessage", &SendMessage { chat_id, text }, CALL_TIMEOUT).await
    }

    async fn call<P, R>(&self, method: &str, params: &P, timeout: Duration) -> Result<R, TelegramError>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let res = self
            .http
            .post(format!("{}/{method}", self.api_base))
            .json(params)
            .timeout(timeout)
            .send()
            .await?;

        let status = res.status();
        let body = res.bytes().await?;
        debug!(method, %status, bytes = body.len(), "Telegram response");

        let response: ApiResponse<R> = serde_json::from_slice(&body).map_err(TelegramError::Decode)?;

        match response {
            ApiResponse { ok: true, result: Some(result), .. } => Ok(result),
            ApiResponse { error_code, description, .. } => Err(TelegramError::Api {
                code: error_code,
                description: description.unwrap_or_else(|| format!("{method} returned no result")),
            }),
        }
    }
}

impl std::fmt::Debug for TelegramBot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramBot")
            .field("poll_timeout", &self.poll_timeout)
            .finish_non_exhaustive()
    }
}
