use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    #[error("invalid statistics")]
    MalformedStats,

    #[error("peer is not registered")]
    PeerNotFound,
}
