// Performance benchmarks for the private tracker
// Run with: cargo bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::RngExt;
use std::collections::HashMap;
use std::hint::black_box;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::Arc;
use private_tracker::bencode::bencode::encode_announce_response;
use private_tracker::bencode::structs::announce_response::AnnounceResponse;
use private_tracker::bencode::structs::compact_peers::CompactPeers;
use private_tracker::bencode::structs::metainfo::Metainfo;
use private_tracker::common::structs::system_clock::SystemClock;
use private_tracker::config::structs::configuration::Configuration;
use private_tracker::security::structs::secret_verifier::SecretVerifier;
use private_tracker::tracker::structs::info_hash::InfoHash;
use private_tracker::tracker::structs::memory_torrent_store::MemoryTorrentStore;
use private_tracker::tracker::structs::memory_user_store::MemoryUserStore;
use private_tracker::tracker::structs::peer_id::PeerId;
use private_tracker::tracker::structs::peer_map::PeerMap;
use private_tracker::tracker::structs::torrent_tracker::TorrentTracker;
use private_tracker::tracker::structs::user::User;

const SHARED_KEY: &str = "benchmark-shared-key";

fn random_peer_id() -> PeerId {
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    PeerId::from(bytes)
}

fn ipv4(i: usize) -> SocketAddr {
    SocketAddr::new(IpAddr::V4(Ipv4Addr::new(10, 0, (i / 256) as u8, (i % 256) as u8)), 6881)
}

fn populated_peer_map(count: usize) -> PeerMap {
    let peers = PeerMap::new(Arc::new(SystemClock));
    for i in 0..count {
        let peer_id = random_peer_id();
        peers.upsert(peer_id.clone(), ipv4(i), "00");
        let _ = peers.update_stats(&peer_id, "0", "0", if i % 4 == 0 { "0" } else { "100" });
    }
    peers
}

fn bench_peer_map_upsert(c: &mut Criterion) {
    let peers = populated_peer_map(1000);

    c.bench_function("peer_map_upsert", |b| {
        b.iter(|| {
            let peer_id = random_peer_id();
            peers.upsert(peer_id.clone(), ipv4(1), "00");
            black_box(peers.update_stats(&peer_id, "10", "20", "30"))
        });
    });
}

fn bench_peer_map_sample(c: &mut Criterion) {
    let peers = populated_peer_map(1000);
    let mut group = c.benchmark_group("peer_map_sample");

    for numwant in [10i64, 50, 100, 200].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(numwant), numwant, |b, &numwant| {
            b.iter(|| black_box(peers.sample(numwant)));
        });
    }

    group.finish();
}

fn bench_peer_map_enumerate(c: &mut Criterion) {
    let peers = populated_peer_map(1000);

    c.bench_function("peer_map_enumerate_1000", |b| {
        b.iter(|| black_box(peers.enumerate()));
    });
}

fn bench_response_encoding(c: &mut Criterion) {
    let mut compact = CompactPeers::default();
    for i in 0..50 {
        compact.push(ipv4(i));
    }
    compact.push(SocketAddr::new(IpAddr::V6(Ipv6Addr::LOCALHOST), 6881));
    let response = AnnounceResponse {
        interval: 300,
        min_interval: 10,
        complete: 12,
        incomplete: 38,
        peers: compact,
    };

    c.bench_function("announce_response_encode", |b| {
        b.iter(|| black_box(encode_announce_response(&response)));
    });
}

fn bench_secret_verification(c: &mut Criterion) {
    let verifier = SecretVerifier::new(SHARED_KEY);
    let secret = "0123456789abcdef0123456789abcdef";
    let tag = verifier.issue(secret).unwrap_or_default();

    c.bench_function("secret_verify", |b| {
        b.iter(|| black_box(verifier.verify(secret, &tag)));
    });
}

fn bench_announce(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let mut config = Configuration::init();
    config.tracker_config.shared_key = SHARED_KEY.to_string();

    let users = Arc::new(MemoryUserStore::new());
    let secret = "0123456789abcdef0123456789abcdef".to_string();
    users.insert(User { username: "bench".to_string(), secret: secret.clone() });
    let tag = SecretVerifier::new(SHARED_KEY).issue(&secret).unwrap_or_default();

    let torrents = Arc::new(MemoryTorrentStore::new());
    let metainfo = Metainfo {
        info_hash: InfoHash([7u8; 20]),
        announce: None,
        comment: None,
        created_by: None,
        creation_date: None,
        encoding: None,
        name: None,
        info: Vec::new(),
    };
    let info_hash = torrents.insert(metainfo);
    let tracker = TorrentTracker::new(Arc::new(config), users, torrents, None);

    c.bench_function("announce_end_to_end", |b| {
        b.iter(|| {
            let mut query: HashMap<String, Vec<Vec<u8>>> = HashMap::new();
            query.insert("info_hash".to_string(), vec![info_hash.0.to_vec()]);
            query.insert("peer_id".to_string(), vec![random_peer_id().as_bytes().to_vec()]);
            query.insert("port".to_string(), vec![b"6881".to_vec()]);
            query.insert("uploaded".to_string(), vec![b"0".to_vec()]);
            query.insert("downloaded".to_string(), vec![b"0".to_vec()]);
            query.insert("left".to_string(), vec![b"100".to_vec()]);
            black_box(rt.block_on(tracker.announce(IpAddr::V4(Ipv4Addr::LOCALHOST), &secret, &tag, &query)))
        });
    });
}

criterion_group!(
    benches,
    bench_peer_map_upsert,
    bench_peer_map_sample,
    bench_peer_map_enumerate,
    bench_response_encoding,
    bench_secret_verification,
    bench_announce,
);

criterion_main!(benches);
