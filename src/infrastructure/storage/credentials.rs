use std::path::PathBuf;

use crate::application::errors::StorageError;
use crate::domain::entities::Credentials;

const CREDENTIALS_FILE: &str = "creds.json";

/// Session credentials saved under the auth directory
#[derive(Debug, Clone)]
pub struct CredentialStore {
    dir: PathBuf,
}

impl CredentialStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(CREDENTIALS_FILE)
    }

    /// Saved credentials, `None` before the first pairing
    pub async fn load(&self) -> Result<Option<Credentials>, StorageError> {
        let content = match tokio::fs::read_to_string(self.path()).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&content)?))
    }

    pub async fn save(&self, credentials: &Credentials) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let json = serde_json::to_string_pretty(credentials)?;
        tokio::fs::write(self.path(), json).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn load_before_save_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::new(dir.path().join("auth"));
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::new(dir.path().join("auth"));
        let creds = Credentials(json!({ "me": { "id": "123@s.whatsapp.net" }, "registered": true }));

        store.save(&creds).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(creds));
    }
}
