mod common;

use std::net::SocketAddr;
use std::sync::Arc;
use actix_web::{test, App};
use actix_web::http::StatusCode;
use private_tracker::http::http::http_service_routes;
use private_tracker::http::structs::http_service_data::HttpServiceData;
use private_tracker::tracker::structs::info_hash::InfoHash;
use private_tracker::tracker::structs::peer_id::PeerId;

fn service_data(env: &common::TestEnv) -> Arc<HttpServiceData> {
    Arc::new(HttpServiceData {
        torrent_tracker: env.tracker.clone(),
        http_trackers_config: Arc::new(common::create_test_http_config()),
    })
}

fn percent(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("%{byte:02X}")).collect()
}

fn announce_uri(secret: &str, tag: &str, info_hash: &InfoHash, peer_id: &PeerId) -> String {
    format!(
        "/{}/{}/announce?info_hash={}&peer_id={}&port=6881&uploaded=0&downloaded=0&left=1000",
        secret,
        tag,
        percent(&info_hash.0),
        percent(peer_id.as_bytes())
    )
}

#[actix_web::test]
async fn test_http_announce_endpoint() {
    let env = common::create_test_env();
    let (secret, tag) = common::register_user(&env, "alice");
    let info_hash = common::register_torrent(&env);
    let peer_id = common::random_peer_id();
    let app = test::init_service(App::new().configure(http_service_routes(service_data(&env)))).await;

    let req = test::TestRequest::get()
        .uri(&announce_uri(&secret, &tag, &info_hash, &peer_id))
        .peer_addr("192.168.1.20:50000".parse::<SocketAddr>().unwrap())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let response = common::decode_response(&body);
    assert!(response.failure_reason.is_none(), "Unexpected failure: {:?}", response.failure_reason);
    assert_eq!(response.peers, Some(vec![192, 168, 1, 20, 0x1a, 0xe1]));
}

#[actix_web::test]
async fn test_http_announce_failure_is_bencoded() {
    let env = common::create_test_env();
    let (secret, _) = common::register_user(&env, "alice");
    let info_hash = common::register_torrent(&env);
    let app = test::init_service(App::new().configure(http_service_routes(service_data(&env)))).await;

    let req = test::TestRequest::get()
        .uri(&announce_uri(&secret, "deadbeef", &info_hash, &common::random_peer_id()))
        .peer_addr("192.168.1.20:50000".parse::<SocketAddr>().unwrap())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    assert_eq!(body.as_ref(), b"d14:failure reason18:secret out of datee");
}

#[actix_web::test]
async fn test_http_unknown_path() {
    let env = common::create_test_env();
    let app = test::init_service(App::new().configure(http_service_routes(service_data(&env)))).await;

    for uri in ["/announce", "/scrape", "/a/b/c/announce", "/"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri} should not be routed");
        let body = test::read_body(resp).await;
        assert_eq!(common::decode_response(&body).failure_reason.as_deref(), Some("unknown request"));
    }
}

#[actix_web::test]
async fn test_http_real_ip_header() {
    let env = common::create_test_env();
    let (secret, tag) = common::register_user(&env, "alice");
    let info_hash = common::register_torrent(&env);
    let peer_id = common::random_peer_id();
    let app = test::init_service(App::new().configure(http_service_routes(service_data(&env)))).await;

    let req = test::TestRequest::get()
        .uri(&announce_uri(&secret, &tag, &info_hash, &peer_id))
        .peer_addr("127.0.0.1:50000".parse::<SocketAddr>().unwrap())
        .insert_header(("X-Real-IP", "203.0.113.7"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let torrent = env.tracker.torrents_sharding.get(&info_hash).unwrap();
    assert_eq!(torrent.peers.get(&peer_id).unwrap().peer_addr, "203.0.113.7:6881".parse::<SocketAddr>().unwrap());
}

#[actix_web::test]
async fn test_http_unparsable_real_ip_header() {
    let env = common::create_test_env();
    let (secret, tag) = common::register_user(&env, "alice");
    let info_hash = common::register_torrent(&env);
    let app = test::init_service(App::new().configure(http_service_routes(service_data(&env)))).await;

    let req = test::TestRequest::get()
        .uri(&announce_uri(&secret, &tag, &info_hash, &common::random_peer_id()))
        .peer_addr("127.0.0.1:50000".parse::<SocketAddr>().unwrap())
        .insert_header(("X-Real-IP", "somewhere"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let body = test::read_body(resp).await;
    assert_eq!(common::decode_response(&body).failure_reason.as_deref(), Some("unknown origin ip"));
    assert!(env.tracker.torrents_sharding.is_empty());
}
