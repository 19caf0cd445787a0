//! Data-access errors.
//!
//! Every variant carries a stable machine code so the notification channel
//! can report failures without string-matching messages.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Stable code plus retry hint for an error surfaced to the user.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// An authenticated endpoint was called with an anonymous session.
    #[error("not signed in: {endpoint} requires an access token")]
    Unauthenticated { endpoint: &'static str },

    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The API answered with a non-success status.
    #[error("API returned status {status}")]
    Status { status: u16, body: String },

    /// The response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The API answered successfully but not with the acknowledgment the flow expects.
    #[error("unrecognized acknowledgment from {endpoint}: {message}")]
    UnrecognizedAck { endpoint: &'static str, message: String },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl ErrorCode for ApiError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthenticated { .. } => "E_UNAUTHENTICATED",
            Self::Transport(_) => "E_TRANSPORT",
            Self::Status { .. } => "E_STATUS",
            Self::Decode(_) => "E_DECODE",
            Self::UnrecognizedAck { .. } => "E_UNRECOGNIZED_ACK",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Status { status: 429 | 500..=599, .. })
    }
}
