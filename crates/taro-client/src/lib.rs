//! Reading backend client for Taro.
//!
//! Turns a [`taro_core::Draw`] plus the user's name, spread and language into
//! a single POST to the text-generation backend and interprets the reply.
//! Backends sit behind the [`ReadingBackend`] trait so callers can swap the
//! network implementation for [`OfflineBackend`] or a test double.

pub mod backend;
pub mod config;
pub mod error;
pub mod http;
pub mod offline;
pub mod wire;

pub use backend::ReadingBackend;
pub use config::{CardFormat, ClientConfig};
pub use error::{ReadingError, ReadingResult};
pub use http::HttpBackend;
pub use offline::OfflineBackend;
