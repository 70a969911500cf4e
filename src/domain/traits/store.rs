use async_trait::async_trait;
use crate::application::errors::StorageError;

/// Store trait - persistence for custom commands
#[async_trait]
pub trait CommandStore: Send + Sync {
    async fn get(&self, name: &str) -> Result<Option<String>, StorageError>;

    /// Insert or overwrite, persisted before returning
    async fn set(&self, name: &str, response: &str) -> Result<(), StorageError>;

    /// Returns false when the name was not stored
    async fn delete(&self, name: &str) -> Result<bool, StorageError>;

    /// Command names in insertion order
    async fn list(&self) -> Result<Vec<String>, StorageError>;

    async fn contains(&self, name: &str) -> Result<bool, StorageError> {
        Ok(self.get(name).await?.is_some())
    }
}
