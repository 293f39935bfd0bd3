//! JSON file key/value store.
//!
//! The whole store is one JSON object (`{"key": "value", ...}`). Every
//! operation re-reads the file, so separate processes sharing a path see
//! each other's writes; concurrent writers race and the last write wins.
//! Writes go to a uniquely named sibling temp file first and are renamed
//! into place, so readers never observe a half-written store.

use composer_application::ports::key_value_store::{KeyValueStore, StoreError};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

type Entries = BTreeMap<String, String>;

/// Key/value store persisted as a JSON object file.
pub struct JsonFileKeyValueStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process
    lock: Mutex<()>,
}

impl JsonFileKeyValueStore {
    /// Open (or prepare to create) a store at `path`.
    ///
    /// Creates parent directories and checks that an existing file parses.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let store = Self {
            path,
            lock: Mutex::new(()),
        };
        let entries = store.load()?;
        debug!(
            "Opened key/value store {} ({} keys)",
            store.path.display(),
            entries.len()
        );
        Ok(store)
    }

    /// Get the path to the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Entries, StoreError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => return Err(e.into()),
        };
        if raw.trim().is_empty() {
            return Ok(Entries::new());
        }
        serde_json::from_str(&raw)
            .map_err(|e| StoreError::Corrupt(format!("{}: {}", self.path.display(), e)))
    }

    fn persist(&self, entries: &Entries) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }

    fn update(&self, apply: impl FnOnce(&mut Entries) -> bool) -> Result<(), StoreError> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))?;
        let mut entries = self.load()?;
        if apply(&mut entries) {
            self.persist(&entries)?;
        }
        Ok(())
    }
}

impl KeyValueStore for JsonFileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
            true
        })
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.update(|entries| entries.remove(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("local-storage.json");

        let store = JsonFileKeyValueStore::open(&path).unwrap();
        store.set("blogContent", "<p>hello</p>").unwrap();
        drop(store);

        let reopened = JsonFileKeyValueStore::open(&path).unwrap();
        assert_eq!(
            reopened.get("blogContent").unwrap().as_deref(),
            Some("<p>hello</p>")
        );
    }

    #[test]
    fn test_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileKeyValueStore::open(dir.path().join("nested/dir/store.json")).unwrap();
        assert_eq!(store.get("blogTitle").unwrap(), None);
        assert!(store.remove("blogTitle").is_ok());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_remove_deletes_only_that_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileKeyValueStore::open(dir.path().join("s.json")).unwrap();
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();

        store.remove("a").unwrap();

        assert_eq!(store.get("a").unwrap(), None);
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_two_handles_share_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shared.json");
        let first = JsonFileKeyValueStore::open(&path).unwrap();
        let second = JsonFileKeyValueStore::open(&path).unwrap();

        first.set("blogContent", "<p>one</p>").unwrap();
        second.set("blogContent", "<p>two</p>").unwrap();

        assert_eq!(
            first.get("blogContent").unwrap().as_deref(),
            Some("<p>two</p>")
        );
    }

    #[test]
    fn test_concurrent_writers_never_lose_a_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contended.json");

        let writers: Vec<_> = ["left", "right"]
            .into_iter()
            .map(|name| {
                let store = JsonFileKeyValueStore::open(&path).unwrap();
                std::thread::spawn(move || {
                    (0..300)
                        .filter_map(|i| {
                            store
                                .set("blogContent", &format!("<p>{name} {i}</p>"))
                                .err()
                        })
                        .map(|e| e.to_string())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for writer in writers {
            let errors = writer.join().unwrap();
            assert!(errors.is_empty(), "writes failed: {:?}", errors);
        }

        let store = JsonFileKeyValueStore::open(&path).unwrap();
        let last = store.get("blogContent").unwrap().unwrap();
        assert!(last == "<p>left 299</p>" || last == "<p>right 299</p>");

        let leftovers = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "not json").unwrap();

        let result = JsonFileKeyValueStore::open(&path);
        assert!(matches!(result, Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn test_file_is_a_flat_json_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flat.json");
        let store = JsonFileKeyValueStore::open(&path).unwrap();
        store.set("blogType", "Health").unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value, serde_json::json!({ "blogType": "Health" }));
    }
}
