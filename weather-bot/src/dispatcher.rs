//! Routes one inbound message to its handler and sends the reply.

use std::fmt;

use tracing::{debug, info, warn};
use weather_core::{LookupError, WeatherProvider};

use crate::reply;
use crate::telegram::{Message, Messenger};

/// What an inbound text asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    Start,
    Help,
    /// Place query, trimmed; may be empty.
    Weather(&'a str),
    /// Anything else, unknown commands included.
    Other,
}

impl<'a> Command<'a> {
    /// Parse message text. Returns `None` when the command is addressed to a
    /// different bot (`/weather@OtherBot`).
    pub fn parse(text: &'a str, bot_username: &str) -> Option<Self> {
        let text = text.trim_start();
        let (token, rest) = text.split_once(char::is_whitespace).unwrap_or((text, ""));

        if !token.starts_with('/') {
            return Some(Self::Other);
        }

        let name = match token.split_once('@') {
            Some((name, target)) if target.eq_ignore_ascii_case(bot_username) => name,
            Some(_) => return None,
            None => token,
        };

        Some(match name {
            "/start" => Self::Start,
            "/help" => Self::Help,
            "/weather" => Self::Weather(rest.trim()),
            _ => Self::Other,
        })
    }
}

impl fmt::Display for Command<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("/start"),
            Self::Help => f.write_str("/help"),
            Self::Weather(place) => write!(f, "/weather {place}"),
            Self::Other => f.write_str("<text>"),
        }
    }
}

/// Holds the read-only handles every handler needs.
pub struct Dispatcher {
    provider: Box<dyn WeatherProvider>,
    messenger: Box<dyn Messenger>,
    bot_username: String,
}

impl Dispatcher {
    pub fn new(
        provider: Box<dyn WeatherProvider>,
        messenger: Box<dyn Messenger>,
        bot_username: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            messenger,
            bot_username: bot_username.into(),
        }
    }

    /// Handle one message. Messages without text, or addressed to another
    /// bot, are ignored.
    pub async fn handle(&self, message: &Message) {
        let Some(text) = message.text.as_deref() else {
            return;
        };

        let Some(command) = Command::parse(text, &self.bot_username) else {
            debug!(message_id = message.message_id, "Ignoring command for another bot");
            return;
        };

        let recipient = message.reply_target();
        debug!(recipient, %command, "Handling message");

        let reply = match command {
            Command::Start => Some(reply::START.to_string()),
            Command::Help => Some(reply::HELP.to_string()),
            Command::Weather(place) => self.weather(place).await,
            Command::Other => Some(reply::NOT_UNDERSTOOD.to_string()),
        };

        if let Some(reply) = reply
            && let Err(err) = self.messenger.send_text(recipient, &reply).await
        {
            warn!(recipient, error = %err, "Failed to send reply");
        }
    }

    /// Reply for a `/weather` query, or `None` when the lookup is dropped.
    async fn weather(&self, place: &str) -> Option<String> {
        if place.is_empty() {
            return Some(reply::EMPTY_PLACE.to_string());
        }

        match self.provider.current_weather(place).await {
            Ok(report) => {
                info!(place, found = %report.place_name, "Weather lookup succeeded");
                let text = reply::weather_report(&report);
                if text.is_none() {
                    warn!(place, "Provider report has no conditions, dropping reply");
                }
                text
            }
            Err(LookupError::NotFound { .. }) => {
                info!(place, "Place not found");
                Some(reply::NOT_FOUND.to_string())
            }
            Err(err) if err.is_unavailable() => {
                warn!(place, error = %err, "Weather provider unavailable");
                Some(reply::UNAVAILABLE.to_string())
            }
            Err(err) => {
                warn!(place, error = %err, "Dropping lookup with unusable provider response");
                None
            }
        }
    }
}
