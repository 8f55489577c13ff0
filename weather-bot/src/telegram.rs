use async_trait::async_trait;

pub mod client;
pub mod types;

pub use client::{TelegramBot, TelegramError};
pub use types::{Message, Update};

/// Outbound side of the chat platform: where replies go.
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<(), TelegramError>;
}

/// Inbound side of the chat platform: batches of updates after `offset`.
#[async_trait]
pub trait UpdateSource: Send + Sync {
    async fn poll_updates(&self, offset: Option<i64>) -> Result<Vec<Update>, TelegramError>;
}

#[async_trait]
impl Messenger for TelegramBot {
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<(), TelegramError> {
        self.send_message(chat_id, text).await.map(|_| ())
    }
}

#[async_trait]
impl UpdateSource for TelegramBot {
    async fn poll_updates(&self, offset: Option<i64>) -> Result<Vec<Update>, TelegramError> {
        self.get_updates(offset).await
    }
}
