use std::borrow::Cow;
use bip_bencode::{ben_bytes, ben_int, ben_map, BMutAccess};
use crate::bencode::structs::announce_response::AnnounceResponse;

impl AnnounceResponse {
    pub fn encode(&self) -> Vec<u8>
    {
        let mut response = ben_map! {
            "interval" => ben_int!(self.interval),
            "min interval" => ben_int!(self.min_interval),
            "complete" => ben_int!(self.complete as i64),
            "incomplete" => ben_int!(self.incomplete as i64),
            "peers" => ben_bytes!(self.peers.peers.clone())
        };

        if !self.peers.peers6.is_empty() {
            if let Some(dict) = response.dict_mut() {
                dict.insert(Cow::from(b"peers6".to_vec()), ben_bytes!(self.peers.peers6.clone()));
            }
        }

        response.encode()
    }
}
