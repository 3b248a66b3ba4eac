//! Configuration for the HTTP reading backend.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Host the reading backend is deployed on.
pub const DEFAULT_BASE_URL: &str = "https://taroapp-back.onrender.com";

/// Path and version query appended to the base URL.
pub const READING_PATH: &str = "/tarot?ver=0.1";

/// How drawn cards are encoded in the request body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardFormat {
    /// `{"name": ..., "isReversed": ...}` objects, so orientation reaches the backend.
    #[default]
    WithOrientation,
    /// Bare card names, as older backend deployments expect.
    NamesOnly,
}

/// Settings for [`crate::HttpBackend`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme and host of the backend, without a trailing path.
    pub base_url: String,
    /// Limit for establishing the connection and for each wait on response data.
    pub request_timeout: Duration,
    /// Limit for the whole exchange, from connect to the last body byte.
    pub resource_timeout: Duration,
    /// Card encoding in the request body.
    pub card_format: CardFormat,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(60),
            resource_timeout: Duration::from_secs(120),
            card_format: CardFormat::default(),
        }
    }
}

impl ClientConfig {
    /// Point the client at another host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the connect and idle-read timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Set the total exchange timeout.
    pub fn with_resource_timeout(mut self, timeout: Duration) -> Self {
        self.resource_timeout = timeout;
        self
    }

    /// Choose the card encoding.
    pub fn with_card_format(mut self, format: CardFormat) -> Self {
        self.card_format = format;
        self
    }

    /// Full URL of the reading endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}{READING_PATH}", self.base_url.trim_end_matches('/'))
    }
}
