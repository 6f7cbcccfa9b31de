use bip_bencode::{ben_bytes, ben_map};
use crate::bencode::structs::announce_response::AnnounceResponse;

/// Bencodes `{ "failure reason": reason }`.
pub fn encode_failure(reason: &str) -> Vec<u8>
{
    ben_map! {
        "failure reason" => ben_bytes!(reason)
    }.encode()
}

pub fn encode_announce_response(response: &AnnounceResponse) -> Vec<u8>
{
    response.encode()
}
