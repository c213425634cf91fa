//! Key-Value Storage Module
//!
//! The persistence seam of the application. Everything the app remembers lives
//! under string keys as serialized JSON documents, the same shape a browser's
//! local storage offers.
//!
//! ## Core Concepts
//! - **`KeyValueStore`**: the injected interface. Callers never reach for a global.
//! - **Backends**: `MemoryStore` keeps values in process, `FileStore` writes one
//!   JSON file per key into a data directory.
//! - **Typed access**: `load_json` / `save_json` wrap the raw string API with `serde`.

pub mod file;
pub mod memory;

#[cfg(test)]
mod tests;

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

pub use file::FileStore;
pub use memory::MemoryStore;

/// A persistent string-keyed store holding serialized values.
///
/// Implementations only need to make a single `set_item` visible to later
/// `get_item` calls. Read-modify-write sequences are serialized by the caller.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the raw value stored under `key`, or `None` if it was never written.
    async fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value stored under `key`.
    async fn set_item(&self, key: &str, value: String) -> Result<()>;

    /// Drops `key`. Removing a missing key is not an error.
    async fn remove_item(&self, key: &str) -> Result<()>;
}

/// Reads and deserializes the value under `key`.
pub async fn load_json<T>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>>
where
    T: DeserializeOwned,
{
    match store.get_item(key).await? {
        Some(raw) => {
            let value = serde_json::from_str(&raw)
                .map_err(|e| anyhow::anyhow!("Corrupt value under key '{}': {}", key, e))?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

/// Serializes `value` and stores it under `key`.
pub async fn save_json<T>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set_item(key, raw).await
}
