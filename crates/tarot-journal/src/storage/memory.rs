use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::StorageBackend;
use crate::error::{JournalError, JournalResult};

/// In-memory storage backend for tests.
///
/// Uses `RefCell` so the trait can take `&self`; the journal is
/// single-threaded.
#[derive(Debug, Default)]
pub struct MemBackend {
    values: RefCell<HashMap<String, String>>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    /// An empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Seed a raw value, bypassing write error simulation.
    pub fn insert(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl StorageBackend for MemBackend {
    fn read(&self, key: &str) -> JournalResult<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> JournalResult<()> {
        if self.simulate_write_error.get() {
            return Err(JournalError::Store("simulated write error".to_string()));
        }
        self.insert(key, value);
        Ok(())
    }

    fn remove(&self, key: &str) -> JournalResult<()> {
        if self.simulate_write_error.get() {
            return Err(JournalError::Store("simulated write error".to_string()));
        }
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_write_remove() {
        let backend = MemBackend::new();
        assert_eq!(backend.read("a").unwrap(), None);
        backend.write("a", "1").unwrap();
        assert_eq!(backend.read("a").unwrap().as_deref(), Some("1"));
        backend.remove("a").unwrap();
        assert_eq!(backend.read("a").unwrap(), None);
    }

    #[test]
    fn simulated_write_error() {
        let backend = MemBackend::new();
        backend.write("a", "1").unwrap();
        backend.set_simulate_write_error(true);
        assert!(matches!(backend.write("a", "2"), Err(JournalError::Store(_))));
        assert_eq!(backend.read("a").unwrap().as_deref(), Some("1"));
    }
}
