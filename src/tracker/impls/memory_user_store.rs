use async_trait::async_trait;
use log::debug;
use parking_lot::RwLock;
use crate::config::structs::user_config::UserConfig;
use crate::tracker::structs::memory_user_store::MemoryUserStore;
use crate::tracker::structs::user::User;
use crate::tracker::traits::user_lookup::UserLookup;
use crate::tracker::types::ahash_map::AHashMap;

impl MemoryUserStore {
    pub fn new() -> MemoryUserStore
    {
        MemoryUserStore {
            users: RwLock::new(AHashMap::default()),
        }
    }

    pub fn from_config(users: &[UserConfig]) -> MemoryUserStore
    {
        let store = MemoryUserStore::new();
        for user in users {
            store.insert(User {
                username: user.username.clone(),
                secret: user.secret.clone(),
            });
        }
        store
    }

    /// Returns the user previously registered under the same secret, if any.
    pub fn insert(&self, user: User) -> Option<User>
    {
        debug!("[USERS] Registering user {}", user.username);
        self.users.write().insert(user.secret.to_ascii_lowercase(), user)
    }

    pub fn remove(&self, secret: &str) -> Option<User>
    {
        self.users.write().remove(&secret.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize
    {
        self.users.read().len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.users.read().is_empty()
    }
}

#[async_trait]
impl UserLookup for MemoryUserStore {
    async fn find_by_secret(&self, secret: &str) -> Option<User>
    {
        self.users.read().get(&secret.to_ascii_lowercase()).cloned()
    }
}
