use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use log::{debug, warn};
use crate::bencode::bencode::{encode_announce_response, encode_failure};
use crate::bencode::structs::announce_response::AnnounceResponse;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::announce_error::AnnounceError;
use crate::tracker::enums::stats_error::StatsError;
use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::peer_stats::PeerStats;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn validate_announce(&self, remote_addr: IpAddr, secret: &str, auth_tag: &str, query: &HashMap<String, Vec<Vec<u8>>>) -> Result<AnnounceQueryRequest, AnnounceError>
    {
        fn get_required_bytes<'a>(query: &'a HashMap<String, Vec<Vec<u8>>>, field: &str) -> Result<&'a [u8], AnnounceError> {
            query.get(field)
                .and_then(|values| values.first())
                .map(|value| value.as_slice())
                .ok_or_else(|| AnnounceError::InvalidRequest(format!("missing {}", field)))
        }

        fn get_optional_str<'a>(query: &'a HashMap<String, Vec<Vec<u8>>>, field: &str) -> Option<&'a str> {
            query.get(field)
                .and_then(|values| values.first())
                .and_then(|bytes| std::str::from_utf8(bytes).ok())
        }

        fn get_counter(query: &HashMap<String, Vec<Vec<u8>>>, field: &str) -> Result<String, AnnounceError> {
            Ok(String::from_utf8_lossy(get_required_bytes(query, field)?).into_owned())
        }

        let info_hash = InfoHash::try_from(get_required_bytes(query, "info_hash")?)
            .map_err(|_| AnnounceError::InvalidRequest(String::from("invalid info_hash size")))?;

        let peer_id = get_required_bytes(query, "peer_id")?;
        if peer_id.is_empty() {
            return Err(AnnounceError::InvalidRequest(String::from("invalid peer_id")));
        }

        let port = std::str::from_utf8(get_required_bytes(query, "port")?)
            .ok()
            .and_then(|port| port.parse::<u16>().ok())
            .ok_or_else(|| AnnounceError::InvalidRequest(String::from("invalid port")))?;

        let ip = get_optional_str(query, "ip")
            .and_then(|ip| ip.parse::<IpAddr>().ok())
            .unwrap_or(remote_addr);

        let numwant = get_optional_str(query, "numwant")
            .and_then(|numwant| numwant.parse::<i64>().ok());

        Ok(AnnounceQueryRequest {
            info_hash,
            peer_id: PeerId::from(peer_id),
            peer_addr: SocketAddr::new(ip, port),
            uploaded: get_counter(query, "uploaded")?,
            downloaded: get_counter(query, "downloaded")?,
            left: get_counter(query, "left")?,
            numwant,
            secret: secret.to_string(),
            auth_tag: auth_tag.to_string(),
        })
    }

    /// Peers to return for a client-supplied `numwant`.
    ///
    /// Absent or zero falls back to the configured default; anything above
    /// the configured maximum is capped. Negative values pass through.
    pub fn resolve_numwant(&self, numwant: Option<i64>) -> i64
    {
        let tracker_config = &self.config.tracker_config;
        match numwant {
            None | Some(0) => tracker_config.default_numwant as i64,
            Some(numwant) => numwant.min(tracker_config.max_numwant as i64),
        }
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn handle_announce(&self, announce_query: AnnounceQueryRequest) -> Result<AnnounceResponse, AnnounceError>
    {
        let user = self.users.find_by_secret(&announce_query.secret).await
            .ok_or(AnnounceError::UserNotFound)?;

        if !self.verifier.verify(&announce_query.secret, &announce_query.auth_tag) {
            return Err(AnnounceError::AuthenticationFailed);
        }

        let torrent = self.get_or_load_torrent(&announce_query.info_hash).await
            .ok_or(AnnounceError::TorrentNotFound)?;

        let stats = PeerStats::parse(&announce_query.uploaded, &announce_query.downloaded, &announce_query.left)
            .map_err(|_| AnnounceError::MalformedStats)?;

        debug!("[ANNOUNCE] {} announcing {} for infohash {}", user.username, announce_query.peer_id, announce_query.info_hash);
        torrent.add_peer(announce_query.peer_id.clone(), announce_query.peer_addr, &announce_query.secret);

        match torrent.apply_stats_for(&announce_query.peer_id, &stats) {
            Ok(()) => {}
            Err(StatsError::MalformedStats) => return Err(AnnounceError::MalformedStats),
            Err(StatsError::PeerNotFound) => {
                warn!("[ANNOUNCE] Peer {} vanished from {} before its statistics were applied", announce_query.peer_id, announce_query.info_hash);
                return Err(AnnounceError::InvalidRequest(String::from("peer could not be registered")));
            }
        }

        let (seeders, leechers) = torrent.enumerate_peers();
        if let Some(publisher) = &self.stat_publisher {
            publisher.publish(announce_query.info_hash, seeders, leechers);
        }

        let tracker_config = &self.config.tracker_config;
        Ok(AnnounceResponse {
            interval: tracker_config.request_interval as i64,
            min_interval: tracker_config.request_interval_minimum as i64,
            complete: seeders,
            incomplete: leechers,
            peers: torrent.peer_list(self.resolve_numwant(announce_query.numwant)),
        })
    }

    /// Runs one announce end to end and returns the bencoded response body.
    ///
    /// Failures never escape: they are rendered as a `failure reason` dictionary.
    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn announce(&self, remote_addr: IpAddr, secret: &str, auth_tag: &str, query: &HashMap<String, Vec<Vec<u8>>>) -> Vec<u8>
    {
        let result = match self.validate_announce(remote_addr, secret, auth_tag, query) {
            Ok(announce_query) => self.handle_announce(announce_query).await,
            Err(error) => Err(error),
        };

        match result {
            Ok(response) => {
                match remote_addr {
                    IpAddr::V4(_) => self.update_stats(StatsEvent::Tcp4AnnouncesHandled, 1),
                    IpAddr::V6(_) => self.update_stats(StatsEvent::Tcp6AnnouncesHandled, 1),
                };
                encode_announce_response(&response)
            }
            Err(error) => {
                debug!("[ANNOUNCE] Refused announce from {}: {}", remote_addr, error);
                self.update_stats(Self::failure_event(&error), 1);
                encode_failure(&error.to_string())
            }
        }
    }

    fn failure_event(error: &AnnounceError) -> StatsEvent
    {
        match error {
            AnnounceError::InvalidRequest(_) => StatsEvent::InvalidRequests,
            AnnounceError::UserNotFound => StatsEvent::UsersNotFound,
            AnnounceError::AuthenticationFailed => StatsEvent::AuthenticationFailures,
            AnnounceError::TorrentNotFound => StatsEvent::TorrentsNotFound,
            AnnounceError::MalformedStats => StatsEvent::MalformedStats,
        }
    }
}
