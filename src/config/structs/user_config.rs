use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserConfig {
    pub username: String,
    /// Hex encoded announce secret.
    pub secret: String,
}
