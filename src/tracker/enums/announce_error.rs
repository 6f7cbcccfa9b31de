use thiserror::Error;

/// Reasons an announce is refused.
///
/// The `Display` text of each variant is sent verbatim to the client as the
/// `failure reason`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnnounceError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("user could not be found")]
    UserNotFound,

    #[error("secret out of date")]
    AuthenticationFailed,

    #[error("torrent not found")]
    TorrentNotFound,

    #[error("invalid statistics")]
    MalformedStats,
}
