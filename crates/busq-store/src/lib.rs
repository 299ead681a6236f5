//! String key-value storage shared by the booking pages
//!
//! Values are opaque strings (JSON blobs written by callers). Saving a key
//! replaces its previous value.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use busq_types::{Result, StoreError};

/// File name of the on-disk store inside the store directory
pub const STORE_FILE: &str = "storage.json";

/// Minimal string key-value storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key, returning whether it was present
    fn remove(&self, key: &str) -> Result<bool>;
}

/// In-process store, lost when dropped
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        Ok(self.entries.borrow_mut().remove(key).is_some())
    }
}

/// JSON object file on disk, rewritten on every mutation
pub struct FileStore {
    store_path: PathBuf,
    entries: RefCell<HashMap<String, String>>,
}

impl FileStore {
    /// Create or load a store in `store_dir`.
    ///
    /// An unreadable or malformed store file loads as empty.
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join(STORE_FILE);

        let entries = if store_path.exists() {
            let file = File::open(&store_path)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).unwrap_or_else(|e| {
                tracing::warn!(path = %store_path.display(), error = %e, "ignoring malformed store file");
                HashMap::new()
            })
        } else {
            HashMap::new()
        };

        tracing::debug!(path = %store_path.display(), keys = entries.len(), "opened store");

        Ok(Self {
            store_path,
            entries: RefCell::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.store_path
    }

    /// Write `entries` to a sibling temp file, then rename it over the store
    fn persist(&self, entries: &HashMap<String, String>) -> Result<()> {
        let tmp_path = self.store_path.with_extension("json.tmp");
        let io_error =
            |path: &Path, e: std::io::Error| StoreError::IoError(format!("{}: {}", path.display(), e));

        let file = File::create(&tmp_path).map_err(|e| io_error(&tmp_path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, entries)?;
        writer
            .into_inner()
            .map_err(|e| io_error(&tmp_path, e.into_error()))?
            .sync_all()
            .map_err(|e| io_error(&tmp_path, e))?;
        fs::rename(&tmp_path, &self.store_path).map_err(|e| io_error(&self.store_path, e))?;

        tracing::debug!(path = %self.store_path.display(), "store written");
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut next = self.entries.borrow().clone();
        next.insert(key.to_string(), value.to_string());
        self.persist(&next)?;
        *self.entries.borrow_mut() = next;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        if !self.entries.borrow().contains_key(key) {
            return Ok(false);
        }
        let mut next = self.entries.borrow().clone();
        next.remove(key);
        self.persist(&next)?;
        *self.entries.borrow_mut() = next;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert_eq!(store.get("a").unwrap(), None);
        store.set("a", "1").unwrap();
        store.set("a", "2").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("2"));
        assert!(store.remove("a").unwrap());
        assert!(!store.remove("a").unwrap());
    }

    #[test]
    fn test_file_store_persists_across_open() {
        let dir = TempDir::new().unwrap();
        {
            let store = FileStore::open(dir.path().to_path_buf()).unwrap();
            store.set("pendingReservation", "{\"id\":\"BQ-1\"}").unwrap();
            store.set("other", "x").unwrap();
            store.remove("other").unwrap();
        }

        let store = FileStore::open(dir.path().to_path_buf()).unwrap();
        assert_eq!(
            store.get("pendingReservation").unwrap().as_deref(),
            Some("{\"id\":\"BQ-1\"}")
        );
        assert_eq!(store.get("other").unwrap(), None);
        assert!(store.path().ends_with(STORE_FILE));
    }

    #[test]
    fn test_file_store_malformed_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(STORE_FILE), "not json").unwrap();

        let store = FileStore::open(dir.path().to_path_buf()).unwrap();
        assert_eq!(store.get("pendingReservation").unwrap(), None);
        store.set("k", "v").unwrap();

        let reopened = FileStore::open(dir.path().to_path_buf()).unwrap();
        assert_eq!(reopened.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_file_store_failed_write_keeps_previous_state() {
        let dir = TempDir::new().unwrap();
        let store_dir = dir.path().join("store");
        let store = FileStore::open(store_dir.clone()).unwrap();
        store.set("k", "v1").unwrap();

        fs::remove_dir_all(&store_dir).unwrap();
        assert!(store.set("k", "v2").is_err());
        assert!(store.remove("k").is_err());
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v1"));
    }

    #[test]
    fn test_file_store_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path().to_path_buf()).unwrap();
        store.set("k", "v").unwrap();
        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from(STORE_FILE)]);
    }

    #[test]
    fn test_file_store_creates_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = FileStore::open(nested.clone()).unwrap();
        store.set("k", "v").unwrap();
        assert!(nested.join(STORE_FILE).exists());
    }
}
