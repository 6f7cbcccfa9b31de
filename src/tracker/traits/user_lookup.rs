use async_trait::async_trait;
use crate::tracker::structs::user::User;

#[async_trait]
pub trait UserLookup: Send + Sync {
    async fn find_by_secret(&self, secret: &str) -> Option<User>;
}
