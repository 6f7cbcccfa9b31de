use parking_lot::RwLock;
use crate::tracker::structs::user::User;
use crate::tracker::types::ahash_map::AHashMap;

/// Users kept in memory, keyed by lower-cased hex secret.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    pub(crate) users: RwLock<AHashMap<String, User>>,
}
