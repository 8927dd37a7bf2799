//! Configuration for the reading journal.

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::storage::FsBackend;
use crate::store::DEFAULT_CAPACITY;

/// Where and how much history is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalConfig {
    /// Directory holding the history and preference files.
    pub data_dir: PathBuf,
    /// Maximum number of readings kept.
    pub capacity: usize,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl JournalConfig {
    /// Set the data directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Set the history capacity (at least 1).
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    /// A filesystem backend rooted at the data directory.
    pub fn backend(&self) -> FsBackend {
        FsBackend::new(&self.data_dir)
    }
}

/// The platform data directory, or `.tarot` in the working directory when
/// none can be determined.
pub fn default_data_dir() -> PathBuf {
    ProjectDirs::from("", "", "tarot")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".tarot"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = JournalConfig::default();
        assert_eq!(cfg.capacity, 100);
        assert!(!cfg.data_dir.as_os_str().is_empty());
    }

    #[test]
    fn builder_methods() {
        let cfg = JournalConfig::default()
            .with_data_dir("/tmp/tarot-test")
            .with_capacity(10);
        assert_eq!(cfg.data_dir, PathBuf::from("/tmp/tarot-test"));
        assert_eq!(cfg.capacity, 10);
        assert_eq!(cfg.backend().root(), PathBuf::from("/tmp/tarot-test").as_path());
    }

    #[test]
    fn capacity_floor() {
        assert_eq!(JournalConfig::default().with_capacity(0).capacity, 1);
    }
}
