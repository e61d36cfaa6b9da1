use async_trait::async_trait;

use crate::auth::application::domain::entities::User;

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: i64) -> Result<Option<User>, String>;

    /// Lookup by normalized (lowercase) email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, String>;
}
