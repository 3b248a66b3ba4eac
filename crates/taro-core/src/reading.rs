//! Readings: a draw plus the generated text, tied to a user and a spread.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::card::Draw;
use crate::spread::SpreadCategory;

/// Identifier of a persisted reading.
pub type ReadingId = Uuid;

/// A generated reading.
///
/// Everything except the favorite flag is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    id: ReadingId,
    user_name: String,
    #[serde(rename = "spreadType", alias = "spreadCategory")]
    spread: SpreadCategory,
    cards: Draw,
    text: String,
    created_at: DateTime<Utc>,
    is_favorite: bool,
}

impl Reading {
    /// Create a non-favorite reading stamped with the current time.
    pub fn new(
        user_name: impl Into<String>,
        spread: SpreadCategory,
        cards: Draw,
        text: impl Into<String>,
    ) -> Self {
        Self::with_timestamp(user_name, spread, cards, text, Utc::now())
    }

    /// Create a reading with an explicit creation time.
    pub fn with_timestamp(
        user_name: impl Into<String>,
        spread: SpreadCategory,
        cards: Draw,
        text: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_name: user_name.into(),
            spread,
            cards,
            text: text.into(),
            created_at,
            is_favorite: false,
        }
    }

    /// Unique identifier.
    pub fn id(&self) -> ReadingId {
        self.id
    }

    /// Name of the person the reading was made for.
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Spread the reading was requested for.
    pub fn spread(&self) -> SpreadCategory {
        self.spread
    }

    /// The drawn cards.
    pub fn cards(&self) -> &Draw {
        &self.cards
    }

    /// Reading text returned by the backend.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// When the reading was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Whether the user marked the reading as a favorite.
    pub fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    /// Flip the favorite flag.
    pub fn toggle_favorite(&mut self) {
        self.is_favorite = !self.is_favorite;
    }

    /// Plain text suitable for sharing outside the app.
    pub fn share_text(&self) -> String {
        format!(
            "🔮 My tarot spread: {}\n\nCards: {}\n\n{}\n\n— Taro ✨",
            self.spread.title(),
            self.cards,
            self.text
        )
    }
}
