//! JSON file backed key-value store
//!
//! Plays the role of browser local storage: a single JSON object mapping
//! keys to string values, kept in `<data_dir>/storage.json`.
//!
//! Every `set` rewrites the whole document through a temporary file
//! followed by a rename, so a crash mid-write leaves the previous document.

use quotebook_application::{KeyValueStore, StorageError};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};

/// File name of the storage document inside the data directory.
pub const STORAGE_FILE_NAME: &str = "storage.json";

type Document = BTreeMap<String, String>;

/// Key-value store persisted to a JSON file.
///
/// Writers are serialized through an internal mutex; the file is not locked
/// against other processes.
#[derive(Debug)]
pub struct FileKeyValueStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileKeyValueStore {
    /// Store backed by the file at `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Store backed by [`STORAGE_FILE_NAME`] inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(STORAGE_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<Document, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Document::new()),
            Err(e) => return Err(e.into()),
        };

        if raw.trim().is_empty() {
            return Ok(Document::new());
        }

        serde_json::from_str(&raw).map_err(|e| {
            StorageError::Corrupt(format!("{}: {}", self.path.display(), e))
        })
    }

    /// Read the document for modification, starting over if it is corrupt.
    fn read_for_update(&self) -> Result<Document, StorageError> {
        match self.read_document() {
            Err(StorageError::Corrupt(reason)) => {
                warn!("Discarding corrupt storage document: {}", reason);
                Ok(Document::new())
            }
            other => other,
        }
    }

    fn write_document(&self, document: &Document) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(document)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        debug!("Wrote storage document {}", self.path.display());
        Ok(())
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_document()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut document = self.read_for_update()?;
        document.insert(key.to_string(), value.to_string());
        self.write_document(&document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotebook_application::{QUOTES_KEY, QuoteStore, SELECTED_CATEGORY_KEY};
    use quotebook_domain::Quote;
    use std::sync::Arc;
    use tempfile::tempdir;

    #[test]
    fn test_get_missing_file_is_none() {
        let dir = tempdir().unwrap();
        let store = FileKeyValueStore::in_dir(dir.path());
        assert_eq!(store.get(QUOTES_KEY).unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_set_get_survives_reopen() {
        let dir = tempdir().unwrap();
        let store = FileKeyValueStore::in_dir(dir.path().join("nested"));

        store.set(SELECTED_CATEGORY_KEY, "Life").unwrap();
        assert_eq!(store.get(SELECTED_CATEGORY_KEY).unwrap().as_deref(), Some("Life"));

        // Survives a fresh handle on the same file
        let reopened = FileKeyValueStore::new(store.path());
        assert_eq!(reopened.get(SELECTED_CATEGORY_KEY).unwrap().as_deref(), Some("Life"));

        store.set(SELECTED_CATEGORY_KEY, "all").unwrap();
        assert_eq!(reopened.get(SELECTED_CATEGORY_KEY).unwrap().as_deref(), Some("all"));
    }

    #[test]
    fn test_keys_are_independent() {
        let dir = tempdir().unwrap();
        let store = FileKeyValueStore::in_dir(dir.path());

        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.set("a", "3").unwrap();

        assert_eq!(store.get("a").unwrap().as_deref(), Some("3"));
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
        assert!(!dir.path().join("storage.json.tmp").exists());
    }

    #[test]
    fn test_corrupt_document() {
        let dir = tempdir().unwrap();
        let store = FileKeyValueStore::in_dir(dir.path());
        fs::write(store.path(), "{not valid json").unwrap();

        assert!(matches!(store.get(QUOTES_KEY), Err(StorageError::Corrupt(_))));

        // Writing starts a fresh document
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_quote_store_round_trip_through_file() {
        let dir = tempdir().unwrap();
        let storage = Arc::new(FileKeyValueStore::in_dir(dir.path()));

        let store = QuoteStore::open(storage.clone());
        store.add("Persisted on disk", "Files").unwrap();

        let reopened = QuoteStore::open(storage);
        assert_eq!(reopened.count(), 4);
        assert_eq!(
            reopened.snapshot().last(),
            Some(&Quote::new("Persisted on disk", "Files"))
        );
    }

    #[test]
    fn test_quote_store_falls_back_on_corrupt_file() {
        let dir = tempdir().unwrap();
        let storage = Arc::new(FileKeyValueStore::in_dir(dir.path()));
        fs::write(storage.path(), "]]]").unwrap();

        let store = QuoteStore::open(storage);
        assert_eq!(store.count(), 3);
    }
}
