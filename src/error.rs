use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model API key is missing")]
    MissingApiKey,
    #[error("failed to send model request: {0}")]
    Request(#[source] reqwest::Error),
    #[error("model request failed ({status}): {body}")]
    Status { status: u16, body: String },
    #[error("failed to decode model response: {0}")]
    Decode(#[source] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error("model call timed out after {0:?}")]
    TimedOut(Duration),
    #[error("request was cancelled")]
    Cancelled,
    #[error("model returned no content")]
    EmptyResponse,
    #[error("model returned malformed content: {0}")]
    MalformedPayload(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Transport,
    EmptyResponse,
    MalformedPayload,
}

impl GenerationError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Model(_) | Self::TimedOut(_) | Self::Cancelled => FailureKind::Transport,
            Self::EmptyResponse => FailureKind::EmptyResponse,
            Self::MalformedPayload(_) => FailureKind::MalformedPayload,
        }
    }
}
