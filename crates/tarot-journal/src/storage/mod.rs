//! Raw key/value storage behind the journal.
//!
//! A backend only moves strings in and out of durable storage. What the
//! strings mean (history array, preference scalars) is decided by the store
//! and preference layers on top.

mod fs;
mod memory;

pub use fs::FsBackend;
pub use memory::MemBackend;

use crate::error::JournalResult;

/// Key of the reading history record.
pub const HISTORY_KEY: &str = "readingHistory";
/// Key of the visual style preference.
pub const VISUAL_STYLE_KEY: &str = "visualStyle";
/// Key of the theme preference.
pub const THEME_KEY: &str = "theme";
/// Key of the shortcuts preference.
pub const SHORTCUTS_KEY: &str = "showShortcuts";

/// Abstract interface for durable key/value storage.
pub trait StorageBackend {
    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` when nothing is stored. Returns `Err` only on an
    /// actual I/O failure.
    fn read(&self, key: &str) -> JournalResult<Option<String>>;

    /// Replace the value stored under `key`.
    ///
    /// MUST be atomic: a reader sees either the old or the new value.
    fn write(&self, key: &str, value: &str) -> JournalResult<()>;

    /// Delete `key`. Deleting an absent key is not an error.
    fn remove(&self, key: &str) -> JournalResult<()>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for &B {
    fn read(&self, key: &str) -> JournalResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> JournalResult<()> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> JournalResult<()> {
        (**self).remove(key)
    }
}
