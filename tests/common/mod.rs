#![allow(dead_code)]
use bip_bencode::{ben_bytes, ben_int, ben_map, BDecodeOpt, BDictAccess, BRefAccess, BencodeRef};
use rand::RngExt;
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use tempfile::TempDir;
use private_tracker::bencode::structs::metainfo::Metainfo;
use private_tracker::common::structs::manual_clock::ManualClock;
use private_tracker::config::structs::configuration::Configuration;
use private_tracker::config::structs::http_trackers_config::HttpTrackersConfig;
use private_tracker::security::structs::secret_verifier::SecretVerifier;
use private_tracker::tracker::structs::broadcast_stat_publisher::BroadcastStatPublisher;
use private_tracker::tracker::structs::info_hash::InfoHash;
use private_tracker::tracker::structs::memory_torrent_store::MemoryTorrentStore;
use private_tracker::tracker::structs::memory_user_store::MemoryUserStore;
use private_tracker::tracker::structs::peer_id::PeerId;
use private_tracker::tracker::structs::torrent_tracker::TorrentTracker;
use private_tracker::tracker::structs::user::User;

pub const SHARED_KEY: &str = "f75778f7425be4db0369d09af37a6c2b9ab3dea0e53e7bd57412e4b060e607f7";

pub type TestTracker = Arc<TorrentTracker>;
pub type TestConfig = Arc<Configuration>;
pub type Query = HashMap<String, Vec<Vec<u8>>>;

pub struct TestEnv {
    pub tracker: TestTracker,
    pub users: Arc<MemoryUserStore>,
    pub torrents: Arc<MemoryTorrentStore>,
    pub publisher: Arc<BroadcastStatPublisher>,
    pub clock: Arc<ManualClock>,
}

pub fn create_test_config() -> Configuration {
    let mut config: Configuration = Configuration::init();
    config.tracker_config.shared_key = SHARED_KEY.to_string();
    config
}

pub fn create_test_http_config() -> HttpTrackersConfig {
    HttpTrackersConfig {
        enabled: true,
        bind_address: "127.0.0.1:0".to_string(),
        real_ip: "X-Real-IP".to_string(),
        keep_alive: 5,
        request_timeout: 10,
        disconnect_timeout: 5,
        threads: 1,
    }
}

pub fn create_test_env_with(config: Configuration) -> TestEnv {
    let users = Arc::new(MemoryUserStore::new());
    let torrents = Arc::new(MemoryTorrentStore::new());
    let publisher = Arc::new(BroadcastStatPublisher::new(64));
    let clock = Arc::new(ManualClock::new());
    let tracker = Arc::new(TorrentTracker::with_clock(
        Arc::new(config),
        users.clone(),
        torrents.clone(),
        Some(publisher.clone()),
        clock.clone(),
    ));
    TestEnv { tracker, users, torrents, publisher, clock }
}

pub fn create_test_env() -> TestEnv {
    create_test_env_with(create_test_config())
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn random_info_hash() -> InfoHash {
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    InfoHash(bytes)
}

pub fn random_peer_id() -> PeerId {
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    PeerId::from(bytes)
}

pub fn random_secret() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 16] = rng.random();
    hex::encode(bytes)
}

/// Bencoded `.torrent` with a random name so every call yields a new info hash.
pub fn mock_torrent_file() -> Vec<u8> {
    let mut rng = rand::rng();
    let salt: u64 = rng.random();
    ben_map! {
        "announce" => ben_bytes!("http://tracker.local/announce"),
        "created by" => ben_bytes!("tests"),
        "creation date" => ben_int!(1700000000),
        "info" => ben_map! {
            "length" => ben_int!(1048576),
            "name" => ben_bytes!(format!("file-{salt}.bin")),
            "piece length" => ben_int!(262144),
            "pieces" => ben_bytes!(vec![0u8; 80])
        }
    }.encode()
}

pub fn mock_metainfo() -> Metainfo {
    Metainfo::decode(&mock_torrent_file()).expect("mock torrent decodes")
}

/// Registers a user and returns its secret with a valid tag.
pub fn register_user(env: &TestEnv, username: &str) -> (String, String) {
    let secret = random_secret();
    env.users.insert(User { username: username.to_string(), secret: secret.clone() });
    let tag = SecretVerifier::new(SHARED_KEY).issue(&secret).expect("hex secret");
    (secret, tag)
}

pub fn register_torrent(env: &TestEnv) -> InfoHash {
    env.torrents.insert(mock_metainfo())
}

pub fn announce_query(info_hash: &InfoHash, peer_id: &PeerId, port: u16, left: u64) -> Query {
    let mut query = Query::new();
    query.insert("info_hash".to_string(), vec![info_hash.0.to_vec()]);
    query.insert("peer_id".to_string(), vec![peer_id.as_bytes().to_vec()]);
    query.insert("port".to_string(), vec![port.to_string().into_bytes()]);
    query.insert("uploaded".to_string(), vec![b"0".to_vec()]);
    query.insert("downloaded".to_string(), vec![b"0".to_vec()]);
    query.insert("left".to_string(), vec![left.to_string().into_bytes()]);
    query
}

pub fn set_field(query: &mut Query, field: &str, value: &str) {
    query.insert(field.to_string(), vec![value.as_bytes().to_vec()]);
}

pub fn remote_ip() -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1))
}

#[derive(Debug, Default)]
pub struct DecodedResponse {
    pub failure_reason: Option<String>,
    pub interval: Option<i64>,
    pub min_interval: Option<i64>,
    pub complete: Option<i64>,
    pub incomplete: Option<i64>,
    pub peers: Option<Vec<u8>>,
    pub peers6: Option<Vec<u8>>,
}

pub fn decode_response(body: &[u8]) -> DecodedResponse {
    let bencode = BencodeRef::decode(body, BDecodeOpt::default()).expect("response is bencoded");
    let dict = bencode.dict().expect("response is a dictionary");
    let int = |key: &[u8]| dict.lookup(key).and_then(|value| value.int());
    let bytes = |key: &[u8]| dict.lookup(key).and_then(|value| value.bytes()).map(|value| value.to_vec());
    DecodedResponse {
        failure_reason: dict.lookup(b"failure reason").and_then(|value| value.str()).map(String::from),
        interval: int(b"interval"),
        min_interval: int(b"min interval"),
        complete: int(b"complete"),
        incomplete: int(b"incomplete"),
        peers: bytes(b"peers"),
        peers6: bytes(b"peers6"),
    }
}

/// Registers `count` fresh peers on `info_hash` through the announce path.
pub async fn announce_many(env: &TestEnv, secret: &str, tag: &str, info_hash: &InfoHash, count: usize) -> Vec<PeerId> {
    let mut peer_ids = Vec::with_capacity(count);
    for i in 0..count {
        let peer_id = random_peer_id();
        let query = announce_query(info_hash, &peer_id, 6881 + i as u16, 100);
        let body = env.tracker.announce(remote_ip(), secret, tag, &query).await;
        assert!(decode_response(&body).failure_reason.is_none());
        peer_ids.push(peer_id);
    }
    peer_ids
}
