use std::collections::HashMap;

use crate::error::EngineResult;

use super::KeyValueStore;

/// A store that lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    entries: HashMap<String, String>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for InMemoryStore {
    fn load(&self, key: &str) -> EngineResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> EngineResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_and_retrieve() {
        let mut store = InMemoryStore::new();
        store.save("tab", "\"calculator\"").unwrap();

        assert_eq!(
            store.load("tab").unwrap().as_deref(),
            Some("\"calculator\"")
        );
        assert!(
            store.load("missing").unwrap().is_none(),
            "Non-existent key should return None"
        );
    }

    #[test]
    fn test_save_overwrites() {
        let mut store = InMemoryStore::new();
        store.save("selectedMonth", "1").unwrap();
        store.save("selectedMonth", "2").unwrap();

        assert_eq!(store.load("selectedMonth").unwrap().as_deref(), Some("2"));
        assert_eq!(store.len(), 1);
    }
}
