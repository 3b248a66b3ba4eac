//! The reading backend abstraction.

use async_trait::async_trait;
use taro_core::{Draw, SpreadCategory};

use crate::error::ReadingResult;

/// Something that turns a draw into reading text.
///
/// Implementations perform at most one outbound exchange per call, never
/// retry, and never persist the result.
#[async_trait]
pub trait ReadingBackend: Send + Sync {
    /// Request a reading for `cards`, addressed to `user_name`, on the topic
    /// of `spread`, written in `language`.
    async fn request_reading(
        &self,
        cards: &Draw,
        user_name: &str,
        spread: SpreadCategory,
        language: &str,
    ) -> ReadingResult<String>;
}

#[async_trait]
impl<B: ReadingBackend + ?Sized> ReadingBackend for Box<B> {
    async fn request_reading(
        &self,
        cards: &Draw,
        user_name: &str,
        spread: SpreadCategory,
        language: &str,
    ) -> ReadingResult<String> {
        (**self)
            .request_reading(cards, user_name, spread, language)
            .await
    }
}
