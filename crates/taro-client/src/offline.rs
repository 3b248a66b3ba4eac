//! A backend that composes readings locally, without network access.

use async_trait::async_trait;
use taro_core::{Draw, SpreadCategory};

use crate::backend::ReadingBackend;
use crate::error::ReadingResult;

const THEMES: &[&str] = &[
    "speaks of new beginnings",
    "points to inner wisdom",
    "marks a transformation",
];

const GLYPHS: &[&str] = &["🔮", "🌟", "✨"];

/// Deterministic local backend, for offline use and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineBackend;

impl OfflineBackend {
    /// Create the backend.
    pub fn new() -> Self {
        Self
    }

    /// Compose reading text for a draw.
    pub fn compose(cards: &Draw, user_name: &str, spread: SpreadCategory) -> String {
        let mut out = String::new();
        for (i, card) in cards.iter().enumerate() {
            let glyph = GLYPHS[i % GLYPHS.len()];
            let theme = THEMES[i % THEMES.len()];
            let advice = if card.is_reversed() {
                "Reversed, it asks for caution."
            } else {
                "Upright, it says the time to act is now."
            };
            out.push_str(&format!("{glyph} {} {theme}. {advice}\n\n", card.name()));
        }
        out.push_str(&format!(
            "💫 For {user_name}: the cards show a period of growth in {}. Trust the process.",
            spread.title().to_lowercase()
        ));
        out
    }
}

#[async_trait]
impl ReadingBackend for OfflineBackend {
    async fn request_reading(
        &self,
        cards: &Draw,
        user_name: &str,
        spread: SpreadCategory,
        _language: &str,
    ) -> ReadingResult<String> {
        tracing::debug!(spread = spread.slug(), "composing offline reading");
        Ok(Self::compose(cards, user_name, spread))
    }
}
