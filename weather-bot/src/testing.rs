//! Fakes shared by the unit tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use weather_core::{LookupError, WeatherProvider, WeatherReport};

use crate::telegram::types::{Chat, User};
use crate::telegram::{Message, Messenger, TelegramError};

pub const MUMBAI_BODY: &str = r#"{"name":"Mumbai","sys":{"country":"IN"},"coord":{"lat":19.07,"lon":72.88},"weather":[{"main":"Haze","description":"haze"}],"main":{"temp":305.15,"pressure":1008,"humidity":66},"wind":{"speed":3.1}}"#;

pub fn mumbai() -> WeatherReport {
    serde_json::from_str(MUMBAI_BODY).unwrap()
}

pub fn text_message(from: i64, text: &str) -> Message {
    Message {
        message_id: 1,
        from: Some(User { id: from, is_bot: false, username: None }),
        chat: Chat { id: from },
        text: Some(text.to_string()),
    }
}

/// What a `StubProvider` answers with.
#[derive(Debug, Clone, Copy)]
pub enum Answer {
    Report,
    NotFound,
    Malformed,
    Timeout,
}

/// Provider answering every lookup the same way and remembering the places asked for.
#[derive(Debug, Clone)]
pub struct StubProvider {
    answer: Answer,
    places: Arc<Mutex<Vec<String>>>,
}

impl StubProvider {
    pub fn new(answer: Answer) -> Self {
        Self { answer, places: Arc::default() }
    }

    pub fn places(&self) -> Vec<String> {
        self.places.lock().unwrap().clone()
    }
}

#[async_trait]
impl WeatherProvider for StubProvider {
    async fn current_weather(&self, place: &str) -> Result<WeatherReport, LookupError> {
        self.places.lock().unwrap().push(place.to_string());

        match self.answer {
            Answer::Report => Ok(mumbai()),
            Answer::NotFound => Err(LookupError::NotFound { place: place.to_string() }),
            Answer::Malformed => Err(LookupError::Malformed { status: 200, reason: "expected value".into() }),
            Answer::Timeout => Err(LookupError::Timeout(std::time::Duration::from_secs(10))),
        }
    }
}

/// Messenger that records instead of sending.
#[derive(Debug, Clone, Default)]
pub struct RecordingMessenger {
    sent: Arc<Mutex<Vec<(i64, String)>>>,
    failing: bool,
}

impl RecordingMessenger {
    /// A messenger whose sends all fail after being recorded.
    pub fn failing() -> Self {
        Self { failing: true, ..Self::default() }
    }

    pub fn sent(&self) -> Vec<(i64, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<(), TelegramError> {
        self.sent.lock().unwrap().push((chat_id, text.to_string()));

        if self.failing {
            return Err(TelegramError::Api { code: Some(403), description: "Forbidden: bot was blocked by the user".into() });
        }
        Ok(())
    }
}

/// Serve `status`/`body` to every connection on a fresh local port. Returns
/// the base URL and the request lines received.
pub async fn respond_with(status: &'static str, body: &'static str) -> (String, Arc<Mutex<Vec<String>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let seen: Arc<Mutex<Vec<String>>> = Arc::default();

    let log = Arc::clone(&seen);
    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let log = Arc::clone(&log);
            tokio::spawn(async move {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                // Drain the body too: closing with unread input resets the connection.
                while request.len() < expected_len(&request) {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }
                let line = String::from_utf8_lossy(&request).lines().next().unwrap_or_default().to_string();
                log.lock().unwrap().push(line);

                let response = format!(
                    "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    (format!("http://{addr}"), seen)
}

/// Total request length once the headers are in, `usize::MAX` before that.
fn expected_len(request: &[u8]) -> usize {
    let Some(end) = request.windows(4).position(|w| w == b"\r\n\r\n") else {
        return usize::MAX;
    };
    let headers = String::from_utf8_lossy(&request[..end]);
    let body_len = headers
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    end + 4 + body_len
}
