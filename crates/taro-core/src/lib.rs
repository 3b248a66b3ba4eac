//! Core types for Taro: the card deck, spreads, readings, and user settings.
//!
//! This crate holds the data model shared by the network client, the local
//! store, and the CLI. It performs no I/O; randomness is injected through
//! any [`rand::Rng`] so draws can be reproduced from a seed.

/// Drawn cards and the three-card draw.
pub mod card;
/// The fixed 78-card catalog and random draws.
pub mod deck;
/// Error types used throughout the crate.
pub mod error;
/// Persisted readings and their share text.
pub mod reading;
/// User settings and language resolution.
pub mod settings;
/// Spread categories a reading can be requested for.
pub mod spread;
/// Aggregate statistics over reading history.
pub mod stats;

/// Re-export card types.
pub use card::{Card, Draw};
/// Re-export the deck.
pub use deck::Deck;
/// Re-export error types.
pub use error::{TaroError, TaroResult};
/// Re-export the reading model.
pub use reading::{Reading, ReadingId};
/// Re-export settings types.
pub use settings::{AppLanguage, UserSettings, normalize_user_name};
/// Re-export the spread category.
pub use spread::SpreadCategory;
/// Re-export statistics.
pub use stats::ReadingStats;
