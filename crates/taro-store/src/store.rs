//! The reading store: history, favorites, and settings over a key-value backend.

use serde::Serialize;
use serde::de::DeserializeOwned;
use taro_core::{Reading, ReadingId, UserSettings};

use crate::error::{StorageError, StorageResult};
use crate::history::ReadingHistory;
use crate::kv::KeyValueStore;

/// Key of the serialized reading history.
pub const READINGS_KEY: &str = "saved_predictions";

/// Key of the serialized user settings.
pub const SETTINGS_KEY: &str = "user_settings";

/// Maximum number of readings kept in history.
pub const HISTORY_CAPACITY: usize = 100;

/// Sole owner of the persisted readings and settings.
///
/// Every operation reads the current blob, applies the change, and writes
/// the whole collection back. Decode and I/O failures are logged and treated
/// as "nothing stored"; use the `try_` accessors to observe them.
#[derive(Debug)]
pub struct ReadingStore<S> {
    backend: S,
    capacity: usize,
}

impl<S: KeyValueStore> ReadingStore<S> {
    /// Wrap a key-value backend with the default history cap.
    pub fn new(backend: S) -> Self {
        Self::with_capacity(backend, HISTORY_CAPACITY)
    }

    /// Wrap a key-value backend with a custom history cap.
    pub fn with_capacity(backend: S, capacity: usize) -> Self {
        Self { backend, capacity }
    }

    /// The underlying backend.
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Give back the underlying backend.
    pub fn into_inner(self) -> S {
        self.backend
    }

    // -- readings -----------------------------------------------------------

    /// Save a new reading as the most recent entry, trimming history to the cap.
    pub fn save_reading(&mut self, reading: Reading) {
        let Some(mut history) = self.history_for_update() else {
            return;
        };
        let id = reading.id();
        history.push_newest(reading);
        self.store_history(&history);
        tracing::info!(%id, total = history.len(), "reading saved");
    }

    /// All readings, newest first.
    pub fn all_readings(&self) -> Vec<Reading> {
        self.history().into_vec()
    }

    /// Favorite readings, newest first.
    pub fn favorite_readings(&self) -> Vec<Reading> {
        self.history().favorites().cloned().collect()
    }

    /// One reading by id.
    pub fn reading(&self, id: ReadingId) -> Option<Reading> {
        self.history().get(id).cloned()
    }

    /// Delete the reading with `id`. Unknown ids are ignored.
    pub fn delete_reading(&mut self, id: ReadingId) {
        let Some(mut history) = self.history_for_update() else {
            return;
        };
        if history.remove(id) {
            self.store_history(&history);
        }
    }

    /// Flip the favorite flag of the reading with `id`. Unknown ids are ignored.
    ///
    /// Returns the new flag when the reading exists.
    pub fn toggle_favorite(&mut self, id: ReadingId) -> Option<bool> {
        let mut history = self.history_for_update()?;
        let flag = history.toggle_favorite(id)?;
        self.store_history(&history);
        Some(flag)
    }

    /// Discard every non-favorite reading. Favorites keep their order.
    pub fn clear_history(&mut self) {
        let Some(mut history) = self.history_for_update() else {
            return;
        };
        history.retain(Reading::is_favorite);
        self.store_history(&history);
    }

    /// All readings, reporting corrupt or unreadable storage instead of hiding it.
    pub fn try_all_readings(&self) -> StorageResult<Vec<Reading>> {
        Ok(self
            .load::<Vec<Reading>>(READINGS_KEY)?
            .unwrap_or_default())
    }

    // -- settings -----------------------------------------------------------

    /// Stored settings, or the defaults if none were saved.
    pub fn settings(&self) -> UserSettings {
        self.try_settings().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "using default settings");
            UserSettings::default()
        })
    }

    /// Stored settings, reporting corrupt or unreadable storage.
    pub fn try_settings(&self) -> StorageResult<UserSettings> {
        Ok(self.load(SETTINGS_KEY)?.unwrap_or_default())
    }

    /// Overwrite the settings record.
    pub fn save_settings(&mut self, settings: &UserSettings) {
        if let Err(e) = self.save(SETTINGS_KEY, settings) {
            tracing::warn!(error = %e, "failed to save settings");
        }
    }

    /// Drop the settings record so the defaults apply again.
    pub fn reset_settings(&mut self) {
        if let Err(source) = self.backend.remove(SETTINGS_KEY) {
            let e = StorageError::Io {
                key: SETTINGS_KEY.to_string(),
                source,
            };
            tracing::warn!(error = %e, "failed to reset settings");
        }
    }

    // -- internals ----------------------------------------------------------

    fn history(&self) -> ReadingHistory {
        match self.try_all_readings() {
            Ok(readings) => ReadingHistory::from_newest_first(readings, self.capacity),
            Err(e) => {
                tracing::warn!(error = %e, "treating reading history as empty");
                ReadingHistory::with_capacity(self.capacity)
            }
        }
    }

    /// History to modify and write back.
    ///
    /// A corrupt blob is replaced by an empty history. A failed read yields
    /// `None` so the stored readings are never overwritten unseen.
    fn history_for_update(&self) -> Option<ReadingHistory> {
        match self.try_all_readings() {
            Ok(readings) => Some(ReadingHistory::from_newest_first(readings, self.capacity)),
            Err(e @ StorageError::StorageCorrupt { .. }) => {
                tracing::warn!(error = %e, "replacing corrupt reading history");
                Some(ReadingHistory::with_capacity(self.capacity))
            }
            Err(e) => {
                tracing::warn!(error = %e, "reading history unavailable, change not saved");
                None
            }
        }
    }

    fn store_history(&mut self, history: &ReadingHistory) {
        if let Err(e) = self.save(READINGS_KEY, history) {
            tracing::warn!(error = %e, "failed to save reading history");
        }
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Option<T>> {
        let Some(bytes) = self.backend.get(key).map_err(|source| StorageError::Io {
            key: key.to_string(),
            source,
        })?
        else {
            return Ok(None);
        };
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| StorageError::StorageCorrupt {
                key: key.to_string(),
                reason: e.to_string(),
            })
    }

    fn save<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> StorageResult<()> {
        let bytes = serde_json::to_vec(value).map_err(|e| StorageError::Encode {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        self.backend
            .set(key, &bytes)
            .map_err(|source| StorageError::Io {
                key: key.to_string(),
                source,
            })
    }
}
