use serde::Serialize;
use crate::tracker::structs::info_hash::InfoHash;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatUpdate {
    pub info_hash: InfoHash,
    pub seeders: u64,
    pub leechers: u64,
}
