//! Error types for the reading backend.

use thiserror::Error;

/// Result type for backend operations.
pub type ReadingResult<T> = Result<T, ReadingError>;

/// Failures of a reading request.
///
/// None of these are retried automatically; the caller decides whether to
/// offer the user another attempt.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReadingError {
    /// Transport failure, including request and resource timeouts.
    #[error("network unavailable: {0}")]
    NetworkUnavailable(String),

    /// The backend answered with a status outside 200-299.
    #[error("server error: HTTP {0}")]
    ServerError(u16),

    /// The body was empty or lacked the `content` field.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// A JSON body could not be decoded, or the request could not be encoded.
    #[error("could not decode response: {0}")]
    DecodingError(String),

    /// The client configuration is unusable (e.g. a malformed base URL).
    #[error("invalid client config: {0}")]
    InvalidConfig(String),
}

impl ReadingError {
    /// Whether trying the same request again might succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::NetworkUnavailable(_) => true,
            Self::ServerError(status) => *status >= 500 || *status == 429,
            Self::InvalidResponse(_) | Self::DecodingError(_) | Self::InvalidConfig(_) => false,
        }
    }
}

impl From<reqwest::Error> for ReadingError {
    fn from(error: reqwest::Error) -> Self {
        if let Some(status) = error.status() {
            return Self::ServerError(status.as_u16());
        }
        if error.is_builder() {
            return Self::InvalidConfig(error.to_string());
        }
        Self::NetworkUnavailable(error.to_string())
    }
}
