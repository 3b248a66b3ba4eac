//! HTTP implementation of [`ReadingBackend`] built on reqwest.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use taro_core::{Draw, SpreadCategory};

use crate::backend::ReadingBackend;
use crate::config::ClientConfig;
use crate::error::{ReadingError, ReadingResult};
use crate::wire::{ReadingRequest, interpret_response};

/// Backend that POSTs to the remote text-generation service.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    config: ClientConfig,
    endpoint: reqwest::Url,
}

impl HttpBackend {
    /// Build a backend from its configuration.
    ///
    /// Fails with [`ReadingError::InvalidConfig`] if the base URL does not parse.
    pub fn new(config: ClientConfig) -> ReadingResult<Self> {
        let endpoint = reqwest::Url::parse(&config.endpoint())
            .map_err(|e| ReadingError::InvalidConfig(format!("{}: {e}", config.base_url)))?;

        let client = Client::builder()
            .connect_timeout(config.request_timeout)
            .read_timeout(config.request_timeout)
            .timeout(config.resource_timeout)
            .build()
            .map_err(|e| ReadingError::InvalidConfig(format!("HTTP client build failed: {e}")))?;

        Ok(Self {
            client,
            config,
            endpoint,
        })
    }

    /// The configuration this backend was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The resolved endpoint URL.
    pub fn endpoint(&self) -> &reqwest::Url {
        &self.endpoint
    }
}

#[async_trait]
impl ReadingBackend for HttpBackend {
    async fn request_reading(
        &self,
        cards: &Draw,
        user_name: &str,
        spread: SpreadCategory,
        language: &str,
    ) -> ReadingResult<String> {
        let request = ReadingRequest::build(
            cards,
            user_name,
            spread,
            language,
            self.config.card_format,
        );
        let body = request.to_json()?;

        tracing::debug!(
            endpoint = %self.endpoint,
            spread = spread.slug(),
            lang = language,
            cards = %cards,
            "requesting reading"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await?;

        tracing::debug!(status, len = bytes.len(), "reading response received");
        interpret_response(status, &bytes)
    }
}
