use bip_bencode::{BDecodeOpt, BDictAccess, BRefAccess, BencodeRef};
use sha1::{Digest, Sha1};
use crate::bencode::enums::metainfo_error::MetainfoError;
use crate::bencode::structs::metainfo::Metainfo;
use crate::tracker::structs::info_hash::InfoHash;

impl Metainfo {
    pub fn decode(data: &[u8]) -> Result<Metainfo, MetainfoError>
    {
        let bencode = BencodeRef::decode(data, BDecodeOpt::default())
            .map_err(|e| MetainfoError::Decode(e.to_string()))?;
        let dict = bencode.dict().ok_or(MetainfoError::NotADictionary)?;
        let info = dict.lookup(b"info").ok_or(MetainfoError::MissingInfo)?;
        let info_dict = info.dict().ok_or(MetainfoError::MissingInfo)?;

        let text = |key: &[u8]| dict.lookup(key).and_then(|value| value.str()).map(String::from);

        Ok(Metainfo {
            info_hash: Self::info_hash_of(info.buffer()),
            announce: text(b"announce"),
            comment: text(b"comment"),
            created_by: text(b"created by"),
            creation_date: dict.lookup(b"creation date").and_then(|value| value.int()),
            encoding: text(b"encoding"),
            name: info_dict.lookup(b"name").and_then(|value| value.str()).map(String::from),
            info: info.buffer().to_vec(),
        })
    }

    /// SHA-1 of the bencoded info dictionary.
    pub fn info_hash_of(info: &[u8]) -> InfoHash
    {
        let digest = Sha1::digest(info);
        let mut hash = [0u8; 20];
        hash.copy_from_slice(digest.as_slice());
        InfoHash(hash)
    }

    /// `{base}/{secret}/{tag}/announce`, the URL a user's copy of the torrent announces to.
    pub fn private_announce_url(base: &str, secret: &str, auth_tag: &str) -> String
    {
        format!("{}/{}/{}/announce", base.trim_end_matches('/'), secret, auth_tag)
    }
}
