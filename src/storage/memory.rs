//! In-memory key-value substrate
//!
//! A `HashMap` behind a mutex, used as the injected test double for the
//! persistence service. Nothing here is durable.

use crate::error::Result;
use crate::storage::KeyValueStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Volatile implementation of [`KeyValueStore`]
#[derive(Default)]
pub struct MemoryStore {
    data: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value directly, bypassing the trait
    ///
    /// Useful for tests that need malformed JSON under a collection key.
    pub fn seed(&self, key: &str, value: &str) {
        self.data
            .lock()
            .expect("memory store lock poisoned")
            .insert(key.to_string(), value.to_string());
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let data = self.data.lock().expect("memory store lock poisoned");
        Ok(data.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut data = self.data.lock().expect("memory store lock poisoned");
        data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut data = self.data.lock().expect("memory store lock poisoned");
        data.remove(key);
        Ok(())
    }

    async fn multi_remove(&self, keys: &[&str]) -> Result<()> {
        let mut data = self.data.lock().expect("memory store lock poisoned");
        for key in keys {
            data.remove(*key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_remove() {
        let store = MemoryStore::new();
        store.set("k", "v").await.expect("set failed");
        assert_eq!(store.get("k").await.expect("get failed").as_deref(), Some("v"));

        store.remove("k").await.expect("remove failed");
        assert!(store.get("k").await.expect("get failed").is_none());
    }

    #[tokio::test]
    async fn test_multi_remove_ignores_missing_keys() {
        let store = MemoryStore::new();
        store.set("a", "1").await.expect("set failed");

        store
            .multi_remove(&["a", "never_existed"])
            .await
            .expect("multi_remove failed");

        assert!(store.get("a").await.expect("get failed").is_none());
    }

    #[tokio::test]
    async fn test_seed_is_visible_through_trait() {
        let store = MemoryStore::new();
        store.seed("raw", "{not json");
        assert_eq!(
            store.get("raw").await.expect("get failed").as_deref(),
            Some("{not json")
        );
    }
}
