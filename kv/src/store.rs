//! Core KvStore implementation

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while reading or writing records
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// The main key-value store
pub struct KvStore {
    /// Base path for storage
    base_path: PathBuf,
}

impl KvStore {
    /// Open or create a store at the given path
    pub fn open(path: impl AsRef<Path>) -> crate::Result<Self> {
        let base_path = path.as_ref().to_path_buf();
        fs::create_dir_all(&base_path)?;
        debug!(?base_path, "Opened kv store");
        Ok(Self { base_path })
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", key))
    }

    /// Serialize a value under a key, replacing any prior record
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(value)?;
        fs::write(self.record_path(key), content)?;
        info!(key, "Saved record");
        Ok(())
    }

    /// Load the record under a key
    ///
    /// Absent, unreadable, or malformed records all read as `None`.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.record_path(key);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(_) => {
                debug!(key, "No record found");
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "Discarding malformed record");
                None
            }
        }
    }

    /// Check whether a record exists for a key
    pub fn exists(&self, key: &str) -> bool {
        self.record_path(key).exists()
    }

    /// Remove the record under a key, if any
    pub fn delete(&self, key: &str) -> crate::Result<()> {
        let path = self.record_path(key);
        if path.exists() {
            fs::remove_file(&path)?;
            info!(key, "Deleted record");
        }
        Ok(())
    }

    /// List all keys with a stored record
    pub fn keys(&self) -> crate::Result<Vec<String>> {
        let mut keys = Vec::new();

        for entry in fs::read_dir(&self.base_path)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().map(|e| e == "json").unwrap_or(false)
                && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
            {
                keys.push(stem.to_string());
            }
        }

        keys.sort();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    #[test]
    fn test_save_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let store = KvStore::open(temp.path()).unwrap();

        let mut doc = BTreeMap::new();
        doc.insert("lunch-tuesday".to_string(), "불고기".to_string());
        store.save("mealPlan", &doc).unwrap();

        let loaded: BTreeMap<String, String> = store.load("mealPlan").unwrap();
        assert_eq!(loaded, doc);
    }

    #[test]
    fn test_load_absent_key() {
        let temp = TempDir::new().unwrap();
        let store = KvStore::open(temp.path()).unwrap();

        let loaded: Option<Vec<String>> = store.load("missing");
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_malformed_record() {
        let temp = TempDir::new().unwrap();
        let store = KvStore::open(temp.path()).unwrap();

        fs::write(temp.path().join("todos.json"), "{not json").unwrap();

        let loaded: Option<Vec<String>> = store.load("todos");
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_overwrites_prior_record() {
        let temp = TempDir::new().unwrap();
        let store = KvStore::open(temp.path()).unwrap();

        store.save("rec", &vec!["old".to_string()]).unwrap();
        store.save("rec", &vec!["new".to_string()]).unwrap();

        let loaded: Vec<String> = store.load("rec").unwrap();
        assert_eq!(loaded, vec!["new".to_string()]);
    }

    #[test]
    fn test_exists_and_delete() {
        let temp = TempDir::new().unwrap();
        let store = KvStore::open(temp.path()).unwrap();

        assert!(!store.exists("rec"));
        store.save("rec", &42u32).unwrap();
        assert!(store.exists("rec"));

        store.delete("rec").unwrap();
        assert!(!store.exists("rec"));

        // Deleting an absent key is a no-op
        store.delete("rec").unwrap();
    }

    #[test]
    fn test_keys_sorted() {
        let temp = TempDir::new().unwrap();
        let store = KvStore::open(temp.path()).unwrap();

        store.save("todos", &1u32).unwrap();
        store.save("mealPlan", &2u32).unwrap();

        assert_eq!(store.keys().unwrap(), vec!["mealPlan", "todos"]);
    }

    proptest! {
        #[test]
        fn prop_round_trip_is_identity(doc in proptest::collection::btree_map("\\PC{1,20}", "\\PC{0,40}", 0..20)) {
            let temp = TempDir::new().unwrap();
            let store = KvStore::open(temp.path()).unwrap();

            store.save("rec", &doc).unwrap();
            let loaded: BTreeMap<String, String> = store.load("rec").unwrap();
            prop_assert_eq!(loaded, doc);
        }
    }
}
