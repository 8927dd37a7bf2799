//! Reading journal: persisted history, statistics, preferences and backups.
//!
//! [`ReadingSession`] is the coordinating controller. It owns a
//! [`StorageBackend`], the [`ReadingStore`] and the [`Preferences`]; the
//! filtering, statistics and transcript helpers are plain functions over
//! reading slices.

pub mod archive;
pub mod config;
pub mod error;
pub mod prefs;
pub mod query;
pub mod session;
pub mod stats;
pub mod storage;
pub mod store;
pub mod transcript;

pub use archive::{ARCHIVE_VERSION, Archive};
pub use config::JournalConfig;
pub use error::{JournalError, JournalResult};
pub use prefs::{Preferences, Theme, VisualStyle};
pub use query::{COMMON_TAGS, HistoryFilter, all_tags};
pub use session::ReadingSession;
pub use stats::{FrequencyMap, Statistics};
pub use storage::{FsBackend, MemBackend, StorageBackend};
pub use store::{DEFAULT_CAPACITY, ReadingStore};
pub use transcript::{history_markdown, reading_text};
