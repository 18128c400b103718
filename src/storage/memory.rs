use super::KeyValueStore;
use crate::errors::{AppError, AppResult};
use std::collections::BTreeMap;

/// In-process store. Counts successful writes and can be told to fail, which
/// is how tests simulate a full or disabled storage.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
    writes: usize,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    /// Number of successful `set` calls.
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn fail_reads(&mut self, on: bool) {
        self.fail_reads = on;
    }

    pub fn fail_writes(&mut self, on: bool) {
        self.fail_writes = on;
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        if self.fail_reads {
            return Err(AppError::Storage("storage is not readable".into()));
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        if self.fail_writes {
            return Err(AppError::Storage("quota exceeded".into()));
        }
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        if self.fail_writes {
            return Err(AppError::Storage("storage is read-only".into()));
        }
        self.entries.remove(key);
        Ok(())
    }
}
