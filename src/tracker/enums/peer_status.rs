use serde::{Deserialize, Serialize};

/// Where a peer stands in the swarm.
///
/// `Quasi` marks a peer that has announced but not yet reported any
/// transfer statistics; it is counted with the leechers.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PeerStatus {
    Seeding,
    Leeching,
    Quasi,
}
