//! Request and response bodies of the reading endpoint.
//!
//! Request:
//!
//! ```text
//! {"cards": [...], "name": "Anna", "lang": "en", "subject": "Love"}
//! ```
//!
//! Success response: `{"content": "..."}`. Error responses may carry
//! `{"error": {"message": "..."}}`, which is only used for logging.

use serde::{Deserialize, Serialize};
use taro_core::{Card, Draw, SpreadCategory};

use crate::config::CardFormat;
use crate::error::{ReadingError, ReadingResult};

/// One card in the request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CardPayload {
    /// Name and orientation.
    #[serde(rename_all = "camelCase")]
    WithOrientation {
        /// Catalog name.
        name: String,
        /// Whether the card was drawn reversed.
        is_reversed: bool,
    },
    /// Name only.
    Name(String),
}

impl CardPayload {
    /// Encode a drawn card in the given format.
    pub fn from_card(card: &Card, format: CardFormat) -> Self {
        match format {
            CardFormat::WithOrientation => Self::WithOrientation {
                name: card.name().to_string(),
                is_reversed: card.is_reversed(),
            },
            CardFormat::NamesOnly => Self::Name(card.name().to_string()),
        }
    }
}

/// Body of the POST to the reading endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingRequest {
    /// Drawn cards in draw order.
    pub cards: Vec<CardPayload>,
    /// Name the reading is for.
    pub name: String,
    /// Language code for the generated text.
    pub lang: String,
    /// Display title of the spread.
    pub subject: String,
}

impl ReadingRequest {
    /// Assemble the request body for a draw.
    pub fn build(
        cards: &Draw,
        user_name: &str,
        spread: SpreadCategory,
        language: &str,
        format: CardFormat,
    ) -> Self {
        Self {
            cards: cards
                .iter()
                .map(|card| CardPayload::from_card(card, format))
                .collect(),
            name: user_name.to_string(),
            lang: language.to_string(),
            subject: spread.title().to_string(),
        }
    }

    /// Encode the body as JSON bytes.
    pub fn to_json(&self) -> ReadingResult<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| ReadingError::DecodingError(e.to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Pull the backend's error message out of an error body, if it has one.
pub fn error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .map(|b| b.error.message)
}

/// Turn an HTTP status and body into the reading text.
pub fn interpret_response(status: u16, body: &[u8]) -> ReadingResult<String> {
    if !(200..=299).contains(&status) {
        if let Some(message) = error_message(body) {
            tracing::warn!(status, %message, "reading backend returned an error");
        } else {
            tracing::warn!(status, "reading backend returned an error");
        }
        return Err(ReadingError::ServerError(status));
    }

    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ReadingError::InvalidResponse("empty body".to_string()));
    }

    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| ReadingError::DecodingError(e.to_string()))?;

    match value.get("content") {
        Some(serde_json::Value::String(content)) => Ok(content.clone()),
        Some(_) => Err(ReadingError::InvalidResponse(
            "`content` is not a string".to_string(),
        )),
        None => Err(ReadingError::InvalidResponse(
            "missing `content` field".to_string(),
        )),
    }
}
