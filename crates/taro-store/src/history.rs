//! Bounded, newest-first collection of readings.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use taro_core::{Reading, ReadingId};

/// Readings ordered newest first, holding at most `capacity` entries.
///
/// Serializes as a plain JSON array; the capacity is not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReadingHistory {
    readings: VecDeque<Reading>,
    #[serde(skip, default = "default_capacity")]
    capacity: usize,
}

fn default_capacity() -> usize {
    crate::store::HISTORY_CAPACITY
}

impl Default for ReadingHistory {
    fn default() -> Self {
        Self::with_capacity(default_capacity())
    }
}

impl ReadingHistory {
    /// Empty history with the given cap.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            readings: VecDeque::new(),
            capacity,
        }
    }

    /// Rebuild from readings already in newest-first order, trimming to `capacity`.
    pub fn from_newest_first(readings: Vec<Reading>, capacity: usize) -> Self {
        let mut readings = VecDeque::from(readings);
        readings.truncate(capacity);
        Self { readings, capacity }
    }

    /// Maximum number of retained readings.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Add the newest reading, dropping the oldest ones beyond the cap.
    pub fn push_newest(&mut self, reading: Reading) {
        self.readings.push_front(reading);
        self.readings.truncate(self.capacity);
    }

    /// Keep only readings matching `keep`, preserving order.
    pub fn retain(&mut self, keep: impl FnMut(&Reading) -> bool) {
        self.readings.retain(keep);
    }

    /// Remove the reading with `id`. Returns whether one was removed.
    pub fn remove(&mut self, id: ReadingId) -> bool {
        let before = self.readings.len();
        self.readings.retain(|r| r.id() != id);
        self.readings.len() != before
    }

    /// Flip the favorite flag of the reading with `id`.
    ///
    /// Returns the new flag, or `None` if no such reading exists.
    pub fn toggle_favorite(&mut self, id: ReadingId) -> Option<bool> {
        let reading = self.readings.iter_mut().find(|r| r.id() == id)?;
        reading.toggle_favorite();
        Some(reading.is_favorite())
    }

    /// Look up a reading by id.
    pub fn get(&self, id: ReadingId) -> Option<&Reading> {
        self.readings.iter().find(|r| r.id() == id)
    }

    /// Readings, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Reading> {
        self.readings.iter()
    }

    /// Favorite readings, newest first.
    pub fn favorites(&self) -> impl Iterator<Item = &Reading> {
        self.readings.iter().filter(|r| r.is_favorite())
    }

    /// Number of readings.
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Consume into a newest-first vector.
    pub fn into_vec(self) -> Vec<Reading> {
        self.readings.into()
    }
}

#[cfg(test)]
mod tests {
    use taro_core::{Card, Draw, SpreadCategory};

    use super::*;

    fn reading(text: &str) -> Reading {
        Reading::new(
            "Anna",
            SpreadCategory::Love,
            Draw::new(vec![Card::new("The Fool", false)]),
            text,
        )
    }

    fn texts(history: &ReadingHistory) -> Vec<&str> {
        history.iter().map(Reading::text).collect()
    }

    #[test]
    fn newest_first_and_capped() {
        let mut h = ReadingHistory::with_capacity(3);
        for t in ["a", "b", "c", "d"] {
            h.push_newest(reading(t));
        }
        assert_eq!(texts(&h), vec!["d", "c", "b"]);
    }

    #[test]
    fn retain_preserves_order() {
        let mut h = ReadingHistory::with_capacity(10);
        for t in ["a", "b", "c", "d"] {
            h.push_newest(reading(t));
        }
        h.retain(|r| r.text() != "c");
        assert_eq!(texts(&h), vec!["d", "b", "a"]);
    }

    #[test]
    fn remove_and_toggle_unknown_ids() {
        let mut h = ReadingHistory::with_capacity(10);
        h.push_newest(reading("a"));
        let stranger = reading("x").id();
        assert!(!h.remove(stranger));
        assert_eq!(h.toggle_favorite(stranger), None);
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn toggle_known_id() {
        let mut h = ReadingHistory::with_capacity(10);
        let r = reading("a");
        let id = r.id();
        h.push_newest(r);
        assert_eq!(h.toggle_favorite(id), Some(true));
        assert_eq!(h.favorites().count(), 1);
        assert_eq!(h.toggle_favorite(id), Some(false));
        assert_eq!(h.favorites().count(), 0);
    }

    #[test]
    fn serializes_as_array_and_trims_on_rebuild() {
        let mut h = ReadingHistory::with_capacity(10);
        for t in ["a", "b", "c"] {
            h.push_newest(reading(t));
        }
        let json = serde_json::to_value(&h).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 3);

        let readings: Vec<Reading> = serde_json::from_value(json).unwrap();
        let trimmed = ReadingHistory::from_newest_first(readings, 2);
        assert_eq!(texts(&trimmed), vec!["c", "b"]);
    }
}
