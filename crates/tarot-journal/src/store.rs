//! The reading record store: most-recent-first, capped, persisted whole.

use chrono::{DateTime, Utc};
use tarot_core::{Reading, ReadingId};

use crate::error::JournalResult;
use crate::storage::{HISTORY_KEY, StorageBackend};

/// Maximum number of readings kept.
pub const DEFAULT_CAPACITY: usize = 100;

/// Ordered reading history, newest first.
///
/// Mutators only change memory; [`ReadingStore::save`] writes the whole
/// store to a backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingStore {
    readings: Vec<Reading>,
    capacity: usize,
}

impl Default for ReadingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadingStore {
    /// An empty store with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// An empty store holding at most `capacity` readings (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            readings: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Decode a persisted history array.
    ///
    /// Malformed text yields an empty store. Entries beyond the capacity
    /// are dropped from the tail.
    pub fn from_json(text: &str, capacity: usize) -> Self {
        let mut store = Self::with_capacity(capacity);
        match serde_json::from_str::<Vec<Reading>>(text) {
            Ok(readings) => store.replace_all(readings),
            Err(e) => log::warn!("reading history is unreadable, starting empty: {e}"),
        }
        store
    }

    /// Load from `backend`. Absent or unreadable history yields an empty store.
    pub fn load<B: StorageBackend + ?Sized>(backend: &B, capacity: usize) -> Self {
        match backend.read(HISTORY_KEY) {
            Ok(Some(text)) => Self::from_json(&text, capacity),
            Ok(None) => Self::with_capacity(capacity),
            Err(e) => {
                log::warn!("could not read reading history, starting empty: {e}");
                Self::with_capacity(capacity)
            }
        }
    }

    /// The history as a JSON array.
    pub fn to_json(&self) -> JournalResult<String> {
        Ok(serde_json::to_string(&self.readings)?)
    }

    /// Write the whole store to `backend`.
    pub fn save<B: StorageBackend + ?Sized>(&self, backend: &B) -> JournalResult<()> {
        backend.write(HISTORY_KEY, &self.to_json()?)?;
        log::debug!("saved {} readings", self.readings.len());
        Ok(())
    }

    /// All readings, newest first.
    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    /// Number of readings.
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Maximum number of readings kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Look up a reading.
    pub fn get(&self, id: ReadingId) -> Option<&Reading> {
        self.readings.iter().find(|r| r.id == id)
    }

    /// The most recent reading.
    pub fn latest(&self) -> Option<&Reading> {
        self.readings.first()
    }

    /// Insert at the head, evicting from the tail past capacity.
    ///
    /// Returns the number of evicted readings.
    pub fn append(&mut self, reading: Reading) -> usize {
        self.readings.insert(0, reading);
        let evicted = self.readings.len().saturating_sub(self.capacity);
        self.readings.truncate(self.capacity);
        if evicted > 0 {
            log::debug!("evicted {evicted} oldest readings");
        }
        evicted
    }

    /// Delete a reading. Returns false if no reading has `id`.
    pub fn remove(&mut self, id: ReadingId) -> bool {
        let before = self.readings.len();
        self.readings.retain(|r| r.id != id);
        self.readings.len() < before
    }

    /// Delete every reading. Returns how many there were.
    pub fn clear(&mut self) -> usize {
        let count = self.readings.len();
        self.readings.clear();
        count
    }

    /// Apply `mutate` to the reading with `id`.
    ///
    /// Returns `None` if there is no such reading.
    pub fn update<T>(&mut self, id: ReadingId, mutate: impl FnOnce(&mut Reading) -> T) -> Option<T> {
        self.readings.iter_mut().find(|r| r.id == id).map(mutate)
    }

    /// Replace the whole history.
    ///
    /// Later duplicates of an id are dropped and the result is cut to
    /// capacity.
    pub fn replace_all(&mut self, readings: Vec<Reading>) {
        let mut kept: Vec<Reading> = Vec::with_capacity(readings.len().min(self.capacity));
        for reading in readings {
            if kept.iter().any(|r| r.id == reading.id) {
                log::warn!("dropping duplicate reading id {}", reading.id);
                continue;
            }
            kept.push(reading);
        }
        kept.truncate(self.capacity);
        self.readings = kept;
    }

    /// The id for a reading created at `now`: its epoch milliseconds, or one
    /// past the largest stored id when that is not larger.
    ///
    /// When the largest id is `u64::MAX`, the first unused id at or after
    /// `now` is taken instead, wrapping around to zero.
    pub fn next_id(&self, now: DateTime<Utc>) -> ReadingId {
        let candidate = ReadingId::from_timestamp(now);
        match self.readings.iter().map(|r| r.id).max() {
            Some(max) if candidate <= max => match max.0.checked_add(1) {
                Some(next) => ReadingId(next),
                None => self.first_unused_from(candidate),
            },
            _ => candidate,
        }
    }

    fn first_unused_from(&self, start: ReadingId) -> ReadingId {
        (start.0..=u64::MAX)
            .chain(0..start.0)
            .map(ReadingId)
            .find(|id| self.get(*id).is_none())
            .unwrap_or(start)
    }
}
