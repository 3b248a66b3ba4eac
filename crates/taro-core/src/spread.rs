//! Spread categories: the life topic a reading is requested for.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TaroError;

/// The topic the user picks for a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpreadCategory {
    /// Relationships and romance.
    Love,
    /// Work and profession.
    Career,
    /// A single card for the day ahead.
    DayCard,
    /// What lies ahead.
    Future,
    /// Inner balance.
    Harmony,
    /// Wellbeing.
    Health,
    /// Consequences and past deeds.
    Karma,
    /// Travel and rest.
    Vacation,
}

impl SpreadCategory {
    /// Every category in presentation order.
    pub const ALL: [SpreadCategory; 8] = [
        Self::Love,
        Self::Career,
        Self::DayCard,
        Self::Future,
        Self::Harmony,
        Self::Health,
        Self::Karma,
        Self::Vacation,
    ];

    /// Display title, also sent to the backend as the reading subject.
    pub fn title(self) -> &'static str {
        match self {
            Self::Love => "Love",
            Self::Career => "Career",
            Self::DayCard => "Day",
            Self::Future => "Future",
            Self::Harmony => "Harmony",
            Self::Health => "Health",
            Self::Karma => "Karma",
            Self::Vacation => "Vacation",
        }
    }

    /// Icon glyph shown next to the title.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Love => "❤️",
            Self::Career => "💼",
            Self::DayCard => "🌞",
            Self::Future => "🔮",
            Self::Harmony => "🧘",
            Self::Health => "🩺",
            Self::Karma => "✨",
            Self::Vacation => "🏖️",
        }
    }

    /// Stable identifier, identical to the persisted form.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Love => "love",
            Self::Career => "career",
            Self::DayCard => "dayCard",
            Self::Future => "future",
            Self::Harmony => "harmony",
            Self::Health => "health",
            Self::Karma => "karma",
            Self::Vacation => "vacation",
        }
    }

    /// Position in [`SpreadCategory::ALL`].
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or_default()
    }
}

impl std::fmt::Display for SpreadCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl FromStr for SpreadCategory {
    type Err = TaroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        if lower == "day" {
            return Ok(Self::DayCard);
        }
        Self::ALL
            .into_iter()
            .find(|spread| spread.slug().to_lowercase() == lower)
            .ok_or_else(|| TaroError::UnknownSpread(s.to_string()))
    }
}
