use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetainfoError {
    #[error("unable to decode bencode: {0}")]
    Decode(String),

    #[error("metainfo is not a dictionary")]
    NotADictionary,

    #[error("metainfo has no info dictionary")]
    MissingInfo,
}
