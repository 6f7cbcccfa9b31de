use crate::tracker::structs::info_hash::InfoHash;

/// The parts of a `.torrent` file the tracker cares about.
///
/// `info` holds the exact bencoded bytes of the info dictionary as they
/// appeared in the file, so the info hash can always be recomputed from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metainfo {
    pub info_hash: InfoHash,
    pub announce: Option<String>,
    pub comment: Option<String>,
    pub created_by: Option<String>,
    pub creation_date: Option<i64>,
    pub encoding: Option<String>,
    pub name: Option<String>,
    pub info: Vec<u8>,
}
