//! File-based storage implementation

mod credentials;

pub use credentials::CredentialStore;

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

use crate::domain::traits::CommandStore;
use crate::domain::entities::CommandBook;
use crate::application::errors::StorageError;

/// Custom commands kept in memory and mirrored to a pretty-printed JSON file.
///
/// Every mutation rewrites the whole file. The write lock is held across the
/// write, so mutations within one process never interleave.
pub struct JsonCommandStore {
    path: PathBuf,
    book: RwLock<CommandBook>,
}

impl JsonCommandStore {
    /// Empty store that will persist to `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            book: RwLock::new(CommandBook::new()),
        }
    }

    /// Load saved commands. A missing file is an empty store; an unreadable
    /// or corrupt file is logged and also treated as empty.
    pub async fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let book = match Self::read(&path).await {
            Ok(Some(book)) => {
                tracing::info!("Loaded {} custom commands from {}", book.len(), path.display());
                book
            }
            Ok(None) => {
                tracing::info!("No command file at {}, starting empty", path.display());
                CommandBook::new()
            }
            Err(e) => {
                tracing::error!("Error loading {}: {}", path.display(), e);
                CommandBook::new()
            }
        };

        Self {
            path,
            book: RwLock::new(book),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(path: &Path) -> Result<Option<CommandBook>, StorageError> {
        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&content)?))
    }

    async fn persist(&self, book: &CommandBook) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(book)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}

#[async_trait]
impl CommandStore for JsonCommandStore {
    async fn get(&self, name: &str) -> Result<Option<String>, StorageError> {
        let book = self.book.read().await;
        Ok(book.get(name).map(str::to_string))
    }

    async fn set(&self, name: &str, response: &str) -> Result<(), StorageError> {
        let mut book = self.book.write().await;
        let mut updated = book.clone();
        updated.insert(name, response);
        self.persist(&updated).await?;
        *book = updated;
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<bool, StorageError> {
        let mut book = self.book.write().await;
        if !book.contains(name) {
            return Ok(false);
        }
        let mut updated = book.clone();
        updated.remove(name);
        self.persist(&updated).await?;
        *book = updated;
        Ok(true)
    }

    async fn list(&self) -> Result<Vec<String>, StorageError> {
        let book = self.book.read().await;
        Ok(book.names().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonCommandStore::load(dir.path().join("commands.json")).await;

        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("commands.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = JsonCommandStore::load(&path).await;
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn set_get_delete() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonCommandStore::load(dir.path().join("commands.json")).await;

        store.set("hi", "hello").await.unwrap();
        assert_eq!(store.get("hi").await.unwrap().as_deref(), Some("hello"));
        assert!(store.contains("hi").await.unwrap());

        assert!(store.delete("hi").await.unwrap());
        assert_eq!(store.get("hi").await.unwrap(), None);
        assert!(!store.delete("hi").await.unwrap());
    }

    #[tokio::test]
    async fn file_is_pretty_printed_in_insertion_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("commands.json");
        let store = JsonCommandStore::load(&path).await;

        store.set("zeta", "last letter").await.unwrap();
        store.set("alpha", "first letter").await.unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "{\n  \"zeta\": \"last letter\",\n  \"alpha\": \"first letter\"\n}");
    }

    #[tokio::test]
    async fn reload_lists_each_key_once_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("commands.json");
        std::fs::write(&path, r#"{"b": "2", "a": "1", "c": "3"}"#).unwrap();

        let store = JsonCommandStore::load(&path).await;
        store.set("a", "one").await.unwrap();

        let reloaded = JsonCommandStore::load(&path).await;
        assert_eq!(reloaded.list().await.unwrap(), vec!["b", "a", "c"]);
        assert_eq!(reloaded.get("a").await.unwrap().as_deref(), Some("one"));
    }

    #[tokio::test]
    async fn failed_write_leaves_memory_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        // The target path is a directory, so the write fails
        let store = JsonCommandStore::new(dir.path());

        assert!(store.set("hi", "hello").await.is_err());
        assert_eq!(store.get("hi").await.unwrap(), None);
    }

    #[tokio::test]
    async fn creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("commands.json");
        let store = JsonCommandStore::new(&path);

        store.set("hi", "hello").await.unwrap();
        assert!(path.exists());
        assert_eq!(store.path(), path.as_path());
    }
}
