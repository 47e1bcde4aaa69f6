//! Local key-value storage
//!
//! A tiny string-to-string store standing in for browser local storage. The
//! file-backed store keeps every key in one JSON object and rewrites the
//! whole file on each `set`.

use crate::error::StoreError;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Storage key holding the favorite event ids
pub const FAVORITES_KEY: &str = "ticketsafer-favorites";

/// String key-value storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Store persisted as a JSON object in a single file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `~/.ticketsafer/storage.json`
    pub fn open_default() -> Result<Self, StoreError> {
        let dir = crate::config::Config::config_dir().ok_or(StoreError::NoStorageDir)?;
        Ok(Self::new(dir.join("storage.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Map<String, Value>, StoreError> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(Map::new());
        }

        Ok(serde_json::from_str(&contents)?)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.read_all()?;
        Ok(entries
            .get(key)
            .and_then(|value| value.as_str())
            .map(str::to_string))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        // An unreadable file is replaced rather than blocking every later write
        let mut entries = match self.read_all() {
            Ok(entries) => entries,
            Err(StoreError::Json(e)) => {
                tracing::warn!("Discarding malformed storage file {}: {}", self.path.display(), e);
                Map::new()
            }
            Err(e) => return Err(e),
        };
        entries.insert(key.to_string(), Value::String(value.to_string()));

        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let contents = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

/// In-memory store, used when no storage directory is available
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_store_missing_file_reads_none() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("storage.json"));
        assert_eq!(store.get(FAVORITES_KEY).unwrap(), None);
    }

    #[test]
    fn test_file_store_roundtrip_keeps_other_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");
        let mut store = JsonFileStore::new(&path);

        store.set("other", "value").unwrap();
        store.set(FAVORITES_KEY, "[1,2]").unwrap();

        let reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.get(FAVORITES_KEY).unwrap().as_deref(), Some("[1,2]"));
        assert_eq!(reopened.get("other").unwrap().as_deref(), Some("value"));
    }

    #[test]
    fn test_file_store_overwrites_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "not json").unwrap();

        let mut store = JsonFileStore::new(&path);
        assert!(matches!(store.get("x"), Err(StoreError::Json(_))));

        store.set("x", "y").unwrap();
        assert_eq!(store.get("x").unwrap().as_deref(), Some("y"));
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
