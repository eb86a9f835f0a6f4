//! A key/value store persisted as one JSON object on disk.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};

use super::KeyValueStore;

/// A store backed by a single JSON file.
///
/// The file holds a JSON object whose values are the stored strings. Every
/// [`save`](KeyValueStore::save) rewrites the file; a save that cannot be
/// written leaves the store as it was. A missing file opens
/// as an empty store, and so does a file that is not a JSON object of
/// strings (a warning is logged and the file is replaced on the next save).
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Opens the store at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Storage`] if the file exists but cannot be read.
    pub fn open<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref().to_path_buf();

        let entries = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| EngineError::Storage {
                key: path.display().to_string(),
                message: e.to_string(),
            })?;
            match serde_json::from_str(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Ignoring malformed state file");
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };

        debug!(path = %path.display(), keys = entries.len(), "Opened state file");
        Ok(Self { path, entries })
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, key: &str) -> EngineResult<()> {
        let storage_error = |message: String| EngineError::Storage {
            key: key.to_string(),
            message,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| storage_error(e.to_string()))?;
        }
        let content =
            serde_json::to_string_pretty(&self.entries).map_err(|e| storage_error(e.to_string()))?;
        fs::write(&self.path, content).map_err(|e| storage_error(e.to_string()))
    }
}

impl KeyValueStore for JsonFileStore {
    fn load(&self, key: &str) -> EngineResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> EngineResult<()> {
        let previous = self.entries.insert(key.to_string(), value.to_string());
        if let Err(err) = self.flush(key) {
            // Keep memory in step with what is on disk.
            match previous {
                Some(old) => self.entries.insert(key.to_string(), old),
                None => self.entries.remove(key),
            };
            return Err(err);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("state.json")).unwrap();
        assert!(store.load("tab").unwrap().is_none());
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.save("hourlyRate", "\"250\"").unwrap();
        store.save("selectedMonth", "2").unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(
            reopened.load("hourlyRate").unwrap().as_deref(),
            Some("\"250\"")
        );
        assert_eq!(reopened.load("selectedMonth").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.save("tab", "\"breakdown\"").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_malformed_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let store = JsonFileStore::open(&path).unwrap();
        assert!(store.load("tab").unwrap().is_none());
        assert_eq!(store.path(), path.as_path());
    }

    #[test]
    fn test_failed_write_leaves_entries_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let mut store = JsonFileStore {
            path: blocker.join("state.json"),
            entries: BTreeMap::from([("tab".to_string(), "\"calculator\"".to_string())]),
        };

        assert!(matches!(
            store.save("tab", "\"breakdown\""),
            Err(EngineError::Storage { .. })
        ));
        assert!(store.save("hourlyRate", "\"250\"").is_err());

        assert_eq!(store.load("tab").unwrap().as_deref(), Some("\"calculator\""));
        assert!(store.load("hourlyRate").unwrap().is_none());
    }
}
