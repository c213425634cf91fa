//! Storage Module Tests
//!
//! Validates both key-value backends and the typed JSON helpers.
//!
//! ## Test Scopes
//! - **MemoryStore**: Put/Get/Remove semantics.
//! - **FileStore**: Persistence across reopen, key validation, missing keys.
//! - **JSON helpers**: Typed load/save and corrupt-value reporting.

#[cfg(test)]
mod tests {
    use crate::storage::{FileStore, KeyValueStore, MemoryStore, load_json, save_json};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct TestEntry {
        id: String,
        name: String,
    }

    // ============================================================
    // MEMORY STORE TESTS
    // ============================================================

    #[tokio::test]
    async fn test_memory_store_get_missing_key() {
        let store = MemoryStore::new();

        let value = store.get_item("contacts").await.unwrap();
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_memory_store_set_and_get() {
        let store = MemoryStore::new();

        store.set_item("contacts", "[]".to_string()).await.unwrap();

        assert_eq!(store.get_item("contacts").await.unwrap(), Some("[]".to_string()));
        assert!(store.get_item("other").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_memory_store_overwrite_value() {
        let store = MemoryStore::new();

        store.set_item("k", "first".to_string()).await.unwrap();
        store.set_item("k", "second".to_string()).await.unwrap();

        assert_eq!(store.get_item("k").await.unwrap(), Some("second".to_string()));
    }

    #[tokio::test]
    async fn test_memory_store_remove() {
        let store = MemoryStore::new();

        store.set_item("k", "v".to_string()).await.unwrap();
        store.remove_item("k").await.unwrap();
        // Removing twice is fine
        store.remove_item("k").await.unwrap();

        assert!(store.get_item("k").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_memory_store_clones_share_data() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set_item("k", "v".to_string()).await.unwrap();

        assert_eq!(other.get_item("k").await.unwrap(), Some("v".to_string()));
    }

    // ============================================================
    // FILE STORE TESTS
    // ============================================================

    #[tokio::test]
    async fn test_file_store_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("data");

        let store = FileStore::open(&dir).await.unwrap();

        assert!(dir.is_dir());
        assert_eq!(store.dir(), dir.as_path());
    }

    #[tokio::test]
    async fn test_file_store_missing_key_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::open(tmp.path()).await.unwrap();

        assert!(store.get_item("contacts").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_file_store_persists_across_reopen() {
        let tmp = tempfile::tempdir().unwrap();

        {
            let store = FileStore::open(tmp.path()).await.unwrap();
            store
                .set_item("contacts", r#"[{"id":"abc"}]"#.to_string())
                .await
                .unwrap();
        }

        let reopened = FileStore::open(tmp.path()).await.unwrap();
        let value = reopened.get_item("contacts").await.unwrap();
        assert_eq!(value, Some(r#"[{"id":"abc"}]"#.to_string()));
        assert!(tmp.path().join("contacts.json").is_file());
    }

    #[tokio::test]
    async fn test_file_store_leaves_no_temp_file() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::open(tmp.path()).await.unwrap();

        store.set_item("contacts", "[]".to_string()).await.unwrap();

        let names: Vec<String> = std::fs::read_dir(tmp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["contacts.json".to_string()]);
    }

    #[tokio::test]
    async fn test_file_store_remove() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::open(tmp.path()).await.unwrap();

        store.set_item("k", "v".to_string()).await.unwrap();
        store.remove_item("k").await.unwrap();
        store.remove_item("k").await.unwrap();

        assert!(store.get_item("k").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_file_store_rejects_path_like_keys() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::open(tmp.path()).await.unwrap();

        for key in ["", "../escape", "a/b", "with space"] {
            let result = store.set_item(key, "x".to_string()).await;
            assert!(result.is_err(), "Key {:?} should be rejected", key);
        }
    }

    // ============================================================
    // JSON HELPERS
    // ============================================================

    #[tokio::test]
    async fn test_save_and_load_json() {
        let store = MemoryStore::new();
        let entries = vec![
            TestEntry {
                id: "1".to_string(),
                name: "Ada".to_string(),
            },
            TestEntry {
                id: "2".to_string(),
                name: "Grace".to_string(),
            },
        ];

        save_json(&store, "entries", &entries).await.unwrap();
        let loaded: Option<Vec<TestEntry>> = load_json(&store, "entries").await.unwrap();

        assert_eq!(loaded, Some(entries));
    }

    #[tokio::test]
    async fn test_load_json_missing_key() {
        let store = MemoryStore::new();

        let loaded: Option<Vec<TestEntry>> = load_json(&store, "entries").await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_load_json_corrupt_value_is_error() {
        let store = MemoryStore::new();
        store.set_item("entries", "not json".to_string()).await.unwrap();

        let result: anyhow::Result<Option<Vec<TestEntry>>> = load_json(&store, "entries").await;

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Corrupt value under key 'entries'"));
    }
}
