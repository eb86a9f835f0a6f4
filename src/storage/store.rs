//! The key/value store trait and typed JSON helpers.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{EngineError, EngineResult};

/// A flat string key/value store.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` if absent.
    fn load(&self, key: &str) -> EngineResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, value: &str) -> EngineResult<()>;
}

/// Loads and deserializes a JSON value.
///
/// Returns `Ok(None)` when the key is absent and
/// [`EngineError::Serialization`] when the stored text is not valid JSON
/// for `T`.
pub fn load_json<T, S>(store: &S, key: &str) -> EngineResult<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.load(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Serializes a value as JSON and stores it.
pub fn save_json<T, S>(store: &mut S, key: &str, value: &T) -> EngineResult<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|e| EngineError::Storage {
        key: key.to_string(),
        message: e.to_string(),
    })?;
    store.save(key, &raw)
}
