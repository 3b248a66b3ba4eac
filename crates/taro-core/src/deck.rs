//! The fixed tarot catalog and random draws.
//!
//! The catalog holds the 22 major arcana followed by the four minor suits
//! (wands, cups, swords, pentacles), ace through king. Draws shuffle the
//! whole catalog and take a prefix, so a draw never repeats a name.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, Draw};
use crate::error::{TaroError, TaroResult};

/// Every card name in the deck (78 entries).
pub const ALL_CARDS: &[&str] = &[
    // Major arcana
    "The Fool",
    "The Magician",
    "The High Priestess",
    "The Empress",
    "The Emperor",
    "The Hierophant",
    "The Lovers",
    "The Chariot",
    "Strength",
    "The Hermit",
    "The Wheel of Fortune",
    "Justice",
    "The Hanged Man",
    "Death",
    "Temperance",
    "The Devil",
    "The Tower",
    "The Star",
    "The Moon",
    "The Sun",
    "Judgement",
    "The World",
    // Wands
    "Ace of Wands",
    "Two of Wands",
    "Three of Wands",
    "Four of Wands",
    "Five of Wands",
    "Six of Wands",
    "Seven of Wands",
    "Eight of Wands",
    "Nine of Wands",
    "Ten of Wands",
    "Page of Wands",
    "Knight of Wands",
    "Queen of Wands",
    "King of Wands",
    // Cups
    "Ace of Cups",
    "Two of Cups",
    "Three of Cups",
    "Four of Cups",
    "Five of Cups",
    "Six of Cups",
    "Seven of Cups",
    "Eight of Cups",
    "Nine of Cups",
    "Ten of Cups",
    "Page of Cups",
    "Knight of Cups",
    "Queen of Cups",
    "King of Cups",
    // Swords
    "Ace of Swords",
    "Two of Swords",
    "Three of Swords",
    "Four of Swords",
    "Five of Swords",
    "Six of Swords",
    "Seven of Swords",
    "Eight of Swords",
    "Nine of Swords",
    "Ten of Swords",
    "Page of Swords",
    "Knight of Swords",
    "Queen of Swords",
    "King of Swords",
    // Pentacles
    "Ace of Pentacles",
    "Two of Pentacles",
    "Three of Pentacles",
    "Four of Pentacles",
    "Five of Pentacles",
    "Six of Pentacles",
    "Seven of Pentacles",
    "Eight of Pentacles",
    "Nine of Pentacles",
    "Ten of Pentacles",
    "Page of Pentacles",
    "Knight of Pentacles",
    "Queen of Pentacles",
    "King of Pentacles",
];

/// The tarot deck.
#[derive(Debug, Clone, Copy, Default)]
pub struct Deck;

impl Deck {
    /// All 78 card names in catalog order.
    pub fn all_names() -> &'static [&'static str] {
        ALL_CARDS
    }

    /// Whether `name` is a catalog card.
    pub fn contains(name: &str) -> bool {
        ALL_CARDS.contains(&name)
    }

    /// Draw `count` distinct cards, each reversed with probability 0.5.
    ///
    /// Fails with [`TaroError::InvalidArgument`] if `count` exceeds the deck size.
    pub fn draw<R: Rng + ?Sized>(rng: &mut R, count: usize) -> TaroResult<Draw> {
        if count > ALL_CARDS.len() {
            return Err(TaroError::InvalidArgument(format!(
                "cannot draw {count} cards from a deck of {}",
                ALL_CARDS.len()
            )));
        }

        Ok(shuffled_prefix(rng, count))
    }

    /// Draw the standard three cards for a reading.
    pub fn draw_reading<R: Rng + ?Sized>(rng: &mut R) -> Draw {
        shuffled_prefix(rng, Draw::READING_SIZE)
    }
}

fn shuffled_prefix<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Draw {
    let mut names: Vec<&str> = ALL_CARDS.to_vec();
    names.shuffle(rng);

    let cards = names
        .into_iter()
        .take(count)
        .map(|name| Card::new(name, rng.random_bool(0.5)))
        .collect();
    Draw::new(cards)
}
