use super::KeyValueStore;

use anyhow::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// Process-local store. Contents are lost when the process exits.
#[derive(Clone, Default)]
pub struct MemoryStore {
    data: Arc<DashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.get(key).map(|entry| entry.value().clone()))
    }

    async fn set_item(&self, key: &str, value: String) -> Result<()> {
        tracing::trace!("MemoryStore: set '{}' ({} bytes)", key, value.len());
        self.data.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        self.data.remove(key);
        Ok(())
    }
}
