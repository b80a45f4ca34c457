use super::KeyValueStore;
use crate::error::{DashError, Result};
use std::collections::HashMap;
use std::io;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `get` fails, as with storage disabled by the platform.
    pub fn with_failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Every `set` and `remove` fails, as with an exhausted quota.
    pub fn with_failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Toggles write failures on a store that already holds data.
    pub fn set_failing_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn unavailable(what: &str) -> DashError {
    DashError::Io(io::Error::other(format!("storage {} unavailable", what)))
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads {
            return Err(unavailable("read"));
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(unavailable("quota"));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.fail_writes {
            return Err(unavailable("write"));
        }
        self.entries.remove(key);
        Ok(())
    }
}
