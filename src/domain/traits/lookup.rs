use async_trait::async_trait;
use crate::application::errors::LookupError;
use crate::domain::entities::LookupProfile;

/// Lookup trait - resolves a game account into a display profile
#[async_trait]
pub trait LookupAdapter: Send + Sync {
    /// Adapter name, for logs
    fn name(&self) -> &str;

    async fn lookup(&self, user_id: &str, zone_id: &str) -> Result<LookupProfile, LookupError>;
}
