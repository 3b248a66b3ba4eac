//! Drawn cards and draws.
//!
//! A [`Card`] is one catalog name plus an orientation. Cards are immutable
//! once drawn; a [`Draw`] is the ordered sequence handed to the backend and
//! stored with the reading.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single drawn tarot card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    id: Uuid,
    name: String,
    is_reversed: bool,
}

impl Card {
    /// Create a card with a fresh identifier.
    pub fn new(name: impl Into<String>, is_reversed: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            is_reversed,
        }
    }

    /// Opaque identifier of this drawn card.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Catalog name, e.g. "The Fool".
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the card was drawn upside down.
    pub fn is_reversed(&self) -> bool {
        self.is_reversed
    }

    /// Name for display, marking reversed cards.
    pub fn display_name(&self) -> String {
        if self.is_reversed {
            format!("{} (reversed)", self.name)
        } else {
            self.name.clone()
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// An ordered set of cards sampled without replacement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Draw {
    cards: Vec<Card>,
}

impl Draw {
    /// Number of cards in a standard reading.
    pub const READING_SIZE: usize = 3;

    /// Wrap already-drawn cards.
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// The drawn cards in draw order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Catalog names in draw order.
    pub fn names(&self) -> Vec<&str> {
        self.cards.iter().map(Card::name).collect()
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the draw holds no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over the cards.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl<'a> IntoIterator for &'a Draw {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl std::fmt::Display for Draw {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<String> = self.cards.iter().map(Card::display_name).collect();
        write!(f, "{}", names.join(", "))
    }
}
