use std::time::Duration;

use thiserror::Error;

/// Ways a single weather lookup can fail.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("place '{place}' was not found by the provider")]
    NotFound { place: String },

    #[error("provider answered with status {status} but the body could not be parsed: {reason}")]
    Malformed { status: u16, reason: String },

    #[error("provider did not answer within {0:?}")]
    Timeout(Duration),

    #[error("failed to reach the weather provider: {0}")]
    Transport(#[source] reqwest::Error),
}

impl LookupError {
    /// Whether the provider was unreachable, as opposed to answering with
    /// something unusable.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Timeout(_) | Self::Transport(_))
    }
}
