//! Local persistence for Taro.
//!
//! [`ReadingStore`] keeps the reading history (newest first, capped at
//! [`HISTORY_CAPACITY`]) and the user settings as JSON blobs in a
//! [`KeyValueStore`]. Two key-value backends ship with the crate:
//! [`MemoryStore`] for tests and [`FileStore`] for on-disk persistence.
//!
//! Storage failures never reach callers of the plain accessors: they are
//! logged and read back as an empty history or default settings.

pub mod error;
pub mod history;
pub mod kv;
pub mod store;

pub use error::{StorageError, StorageResult};
pub use history::ReadingHistory;
pub use kv::{FileStore, KeyValueStore, MemoryStore, default_data_dir};
pub use store::{HISTORY_CAPACITY, READINGS_KEY, ReadingStore, SETTINGS_KEY};
