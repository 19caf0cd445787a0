//! Client configuration and session parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Latency the tenant edit form waits before leaving edit mode.
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 500;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PROPDESK_BASE_URL must not be empty")]
    EmptyBaseUrl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API origin without a trailing slash.
    pub base_url: String,
    pub timeouts: Timeouts,
    pub submit_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeouts: Timeouts {
                request_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
                connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            },
            submit_delay: Duration::from_millis(DEFAULT_SUBMIT_DELAY_MS),
        }
    }
}

impl ClientConfig {
    /// Build typed client config from environment variables.
    ///
    /// Optional:
    /// - `PROPDESK_BASE_URL`: default `http://127.0.0.1:3000`
    /// - `PROPDESK_REQUEST_TIMEOUT_SECS`: default 30
    /// - `PROPDESK_CONNECT_TIMEOUT_SECS`: default 10
    /// - `PROPDESK_SUBMIT_DELAY_MS`: default 500
    ///
    /// # Errors
    ///
    /// Returns an error if `PROPDESK_BASE_URL` is set but empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is present but empty.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup("PROPDESK_BASE_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned())
            .trim()
            .trim_end_matches('/')
            .to_owned();
        if base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }

        let parse = |key: &str, default: u64| lookup(key).and_then(|v| v.trim().parse::<u64>().ok()).unwrap_or(default);
        let timeouts = Timeouts {
            request_secs: parse("PROPDESK_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: parse("PROPDESK_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };
        let submit_delay = Duration::from_millis(parse("PROPDESK_SUBMIT_DELAY_MS", DEFAULT_SUBMIT_DELAY_MS));

        Ok(Self { base_url, timeouts, submit_delay })
    }
}

/// Signed-in identity threaded into every data-access call.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Session {
    access_token: Option<String>,
}

impl Session {
    #[must_use]
    pub fn anonymous() -> Self {
        Self { access_token: None }
    }

    /// A session carrying a bearer token. Blank tokens yield an anonymous session.
    pub fn bearer(token: impl Into<String>) -> Self {
        let token = token.into();
        if token.trim().is_empty() {
            return Self::anonymous();
        }
        Self { access_token: Some(token) }
    }

    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
