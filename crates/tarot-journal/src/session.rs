//! Reading session management.
//!
//! `ReadingSession` owns the storage backend, the reading store and the
//! preferences. Every mutating method builds the next state, saves it, and
//! only then replaces what it holds, so a failed write leaves the session
//! and the backend as they were.
//! Methods addressing a reading by id report a miss as `false` / `None`
//! rather than an error.

use chrono::{DateTime, Utc};
use tarot_core::{DrawRequest, Reading, ReadingId};

use crate::archive::Archive;
use crate::config::JournalConfig;
use crate::error::{JournalError, JournalResult};
use crate::prefs::{Preferences, Theme, VisualStyle};
use crate::query::HistoryFilter;
use crate::stats::Statistics;
use crate::storage::{FsBackend, StorageBackend};
use crate::store::ReadingStore;

/// The application state of one user's journal.
pub struct ReadingSession<B: StorageBackend> {
    backend: B,
    store: ReadingStore,
    prefs: Preferences,
}

impl ReadingSession<FsBackend> {
    /// Open the journal described by `config`.
    pub fn from_config(config: &JournalConfig) -> Self {
        Self::open(config.backend(), config.capacity)
    }
}

impl<B: StorageBackend> ReadingSession<B> {
    /// Load history and preferences from `backend`.
    pub fn open(backend: B, capacity: usize) -> Self {
        let store = ReadingStore::load(&backend, capacity);
        let prefs = Preferences::load(&backend);
        log::info!("opened journal with {} readings", store.len());
        Self {
            backend,
            store,
            prefs,
        }
    }

    /// Get the storage backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Get the reading store.
    pub fn store(&self) -> &ReadingStore {
        &self.store
    }

    /// Get the preferences.
    pub fn prefs(&self) -> &Preferences {
        &self.prefs
    }

    /// Look up one reading.
    pub fn get(&self, id: ReadingId) -> Option<&Reading> {
        self.store.get(id)
    }

    /// Draw a reading now and record it.
    pub fn perform_reading(&mut self, request: &DrawRequest) -> JournalResult<&Reading> {
        self.perform_reading_at(request, Utc::now())
    }

    /// Draw a reading stamped `now` and record it at the head of history.
    ///
    /// A draw that fails leaves the store untouched.
    pub fn perform_reading_at(
        &mut self,
        request: &DrawRequest,
        now: DateTime<Utc>,
    ) -> JournalResult<&Reading> {
        let (spread, layout) = request.execute()?;
        let id = self.store.next_id(now);
        let reading = Reading::new(request, spread, layout, id, now);
        log::info!(
            "reading {id}: {} with seed {} from the {} deck",
            spread.key,
            request.seed,
            request.deck
        );
        let mut next = self.store.clone();
        next.append(reading);
        self.commit_history(next)?;
        self.store
            .latest()
            .ok_or_else(|| JournalError::Store("reading vanished after append".into()))
    }

    /// Flip the favorite flag. Returns the new value, or `None` on a miss.
    pub fn toggle_favorite(&mut self, id: ReadingId) -> JournalResult<Option<bool>> {
        self.mutate(id, |r| r.toggle_favorite())
    }

    /// Replace a reading's note. Returns false on a miss.
    pub fn set_note(&mut self, id: ReadingId, note: &str) -> JournalResult<bool> {
        let note = note.trim().to_string();
        Ok(self.mutate(id, |r| r.set_note(note))?.is_some())
    }

    /// Add a tag. Returns false on a miss or when nothing changed.
    pub fn add_tag(&mut self, id: ReadingId, tag: &str) -> JournalResult<bool> {
        Ok(self.mutate(id, |r| r.add_tag(tag))?.unwrap_or(false))
    }

    /// Remove a tag. Returns false on a miss or when the tag was absent.
    pub fn remove_tag(&mut self, id: ReadingId, tag: &str) -> JournalResult<bool> {
        Ok(self.mutate(id, |r| r.remove_tag(tag))?.unwrap_or(false))
    }

    /// Toggle a tag. Returns whether it is now set, or `None` on a miss.
    pub fn toggle_tag(&mut self, id: ReadingId, tag: &str) -> JournalResult<Option<bool>> {
        self.mutate(id, |r| r.toggle_tag(tag))
    }

    /// Delete a reading. Returns false on a miss.
    pub fn remove(&mut self, id: ReadingId) -> JournalResult<bool> {
        let mut next = self.store.clone();
        if !next.remove(id) {
            return Ok(false);
        }
        self.commit_history(next)?;
        Ok(true)
    }

    /// Delete all readings. Returns how many were removed.
    pub fn clear(&mut self) -> JournalResult<usize> {
        let mut next = self.store.clone();
        let count = next.clear();
        self.commit_history(next)?;
        log::info!("cleared {count} readings");
        Ok(count)
    }

    /// Readings passing `filter`, newest first.
    pub fn filter(&self, filter: &HistoryFilter) -> Vec<&Reading> {
        filter.apply(self.store.readings())
    }

    /// Statistics over the whole history.
    pub fn statistics(&self) -> Statistics {
        Statistics::compute(self.store.readings())
    }

    /// Snapshot history and visual style for backup.
    pub fn export(&self, now: DateTime<Utc>) -> Archive {
        Archive::new(self.store.readings(), self.prefs.visual_style, now)
    }

    /// Replace history with an archive's contents.
    ///
    /// The document is validated in full first; a rejected import changes
    /// nothing. A visual style carried by the archive is applied after the
    /// history is saved. Returns the number of readings now stored.
    pub fn import(&mut self, text: &str) -> JournalResult<usize> {
        let archive = Archive::parse(text)?;
        let mut next = self.store.clone();
        next.replace_all(archive.history);
        self.commit_history(next)?;
        if let Some(style) = archive.visual_style {
            self.set_visual_style(style)?;
        }
        log::info!("imported {} readings", self.store.len());
        Ok(self.store.len())
    }

    /// Change and persist the visual style.
    pub fn set_visual_style(&mut self, style: VisualStyle) -> JournalResult<()> {
        let next = Preferences {
            visual_style: style,
            ..self.prefs
        };
        next.save_visual_style(&self.backend)?;
        self.prefs = next;
        Ok(())
    }

    /// Change and persist the theme.
    pub fn set_theme(&mut self, theme: Option<Theme>) -> JournalResult<()> {
        let next = Preferences { theme, ..self.prefs };
        next.save_theme(&self.backend)?;
        self.prefs = next;
        Ok(())
    }

    /// Change and persist the shortcuts flag.
    pub fn set_shortcuts(&mut self, enabled: bool) -> JournalResult<()> {
        let next = Preferences {
            shortcuts_enabled: enabled,
            ..self.prefs
        };
        next.save_shortcuts(&self.backend)?;
        self.prefs = next;
        Ok(())
    }

    fn mutate<T>(
        &mut self,
        id: ReadingId,
        f: impl FnOnce(&mut Reading) -> T,
    ) -> JournalResult<Option<T>> {
        let mut next = self.store.clone();
        let Some(out) = next.update(id, f) else {
            log::debug!("no reading with id {id}");
            return Ok(None);
        };
        self.commit_history(next)?;
        Ok(Some(out))
    }

    /// Save `next` and adopt it. On error the current store is kept.
    fn commit_history(&mut self, next: ReadingStore) -> JournalResult<()> {
        next.save(&self.backend)?;
        self.store = next;
        Ok(())
    }
}
