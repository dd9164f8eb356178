use async_trait::async_trait;

use crate::domain::repositories::StoreError;

/// Identity port. Accounts, credentials and profiles live outside this
/// crate; the embedding layer implements this against its user store so
/// that rooms can label registered players with a display name.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Display name for a user id, None when the directory has no entry
    async fn display_name(&self, user_id: &str) -> Result<Option<String>, StoreError>;
}
