//! In-memory key/value storage.
//!
//! Stands in for a browser-style `localStorage`: string keys, string values,
//! nothing survives the process. Each value lives behind the map's shard
//! lock, so concurrent writers to one key resolve to the last write.

use dashmap::DashMap;

/// Process-local key/value store, handed to repositories at construction.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: DashMap<String, String>,
}

impl MemoryStorage {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a copy of the value stored under `key`.
    pub fn get_item(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    /// Store `value` under `key`, replacing whatever was there.
    pub fn set_item(&self, key: &str, value: String) {
        let previous = self.entries.insert(key.to_string(), value);
        tracing::trace!(key, replaced = previous.is_some(), "storage item set");
    }

    /// Remove the value under `key`, returning it if present.
    pub fn remove_item(&self, key: &str) -> Option<String> {
        self.entries.remove(key).map(|(_, value)| value)
    }

    /// Drop every key.
    pub fn clear(&self) {
        self.entries.clear();
        tracing::debug!("storage cleared");
    }

    /// Check if `key` has a value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_storage_is_empty() {
        let storage = MemoryStorage::new();

        assert!(storage.is_empty());
        assert_eq!(storage.get_item("users"), None);
        assert!(!storage.contains_key("users"));
    }

    #[test]
    fn test_set_item_overwrites() {
        let storage = MemoryStorage::new();
        storage.set_item("users", "first".to_string());
        storage.set_item("users", "second".to_string());

        assert_eq!(storage.get_item("users").as_deref(), Some("second"));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_remove_item() {
        let storage = MemoryStorage::new();
        storage.set_item("users", "value".to_string());

        assert_eq!(storage.remove_item("users").as_deref(), Some("value"));
        assert_eq!(storage.remove_item("users"), None);
        assert!(storage.is_empty());
    }

    #[test]
    fn test_clear_drops_all_keys() {
        let storage = MemoryStorage::new();
        storage.set_item("a", "1".to_string());
        storage.set_item("b", "2".to_string());
        assert_eq!(storage.len(), 2);

        storage.clear();

        assert!(storage.is_empty());
        assert_eq!(storage.get_item("a"), None);
    }
}
