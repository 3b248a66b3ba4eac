//! Error types for the core model.

use thiserror::Error;

/// Result type for core operations.
pub type TaroResult<T> = Result<T, TaroError>;

/// Errors raised by the deck and by parsing user input into model types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaroError {
    /// An argument was out of range (e.g. drawing more cards than the deck holds).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A spread slug did not match any known category.
    #[error("unknown spread: {0}")]
    UnknownSpread(String),

    /// A language code did not match any supported language.
    #[error("unknown language: {0}")]
    UnknownLanguage(String),
}
