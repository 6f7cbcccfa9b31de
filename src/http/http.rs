use std::future::Future;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use actix_web::dev::ServerHandle;
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use log::{debug, info};
use crate::bencode::bencode::encode_failure;
use crate::common::common::parse_query;
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::http::structs::http_service_data::HttpServiceData;
use crate::http::types::{QueryFailure, QueryMap};
use crate::tracker::structs::torrent_tracker::TorrentTracker;

pub fn http_service_routes(data: Arc<HttpServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.service(web::resource("/{secret}/{auth_tag}/announce").route(web::get().to(http_service_announce)));
        cfg.default_service(web::route().to(http_service_not_found));
    })
}

pub async fn http_service(
    addr: SocketAddr,
    data: Arc<TorrentTracker>,
    http_server_object: HttpTrackersConfig
) -> Result<(ServerHandle, impl Future<Output=Result<(), std::io::Error>>), std::io::Error>
{
    let keep_alive = http_server_object.keep_alive;
    let request_timeout = http_server_object.request_timeout;
    let disconnect_timeout = http_server_object.disconnect_timeout;
    let threads = http_server_object.threads;
    let service_data = Arc::new(HttpServiceData {
        torrent_tracker: data,
        http_trackers_config: Arc::new(http_server_object),
    });

    info!("[HTTP] Starting server listener on {}", addr);
    let server = HttpServer::new(move || {
        App::new()
            .configure(http_service_routes(service_data.clone()))
    })
        .keep_alive(Duration::from_secs(keep_alive))
        .client_request_timeout(Duration::from_secs(request_timeout))
        .client_disconnect_timeout(Duration::from_secs(disconnect_timeout))
        .workers(threads as usize)
        .bind((addr.ip(), addr.port()))?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

pub async fn http_service_announce(request: HttpRequest, path: web::Path<(String, String)>, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let ip = match http_validate_ip(&request, &data) {
        Ok(ip) => ip,
        Err(result) => return result,
    };

    let query_map = match http_service_query_hashing(parse_query(Some(request.query_string().to_string()))) {
        Ok(result) => result,
        Err(err) => return err,
    };

    let (secret, auth_tag) = path.into_inner();
    let body = data.torrent_tracker.announce(ip, &secret, &auth_tag, &query_map).await;
    HttpResponse::Ok().content_type(ContentType::plaintext()).body(body)
}

pub async fn http_service_not_found(request: HttpRequest) -> HttpResponse
{
    debug!("[HTTP] Request from {:?}: 404 Not Found ({})", request.peer_addr(), request.path());
    HttpResponse::NotFound().content_type(ContentType::plaintext()).body(encode_failure("unknown request"))
}

/// Origin address of a request.
///
/// When `real_ip` names a header and the request carries it, the header wins
/// and must parse as an IP address. Otherwise the socket peer address is used.
pub fn http_service_retrieve_remote_ip(request: &HttpRequest, real_ip: &str) -> Result<IpAddr, ()>
{
    if !real_ip.is_empty() {
        if let Some(header) = request.headers().get(real_ip) {
            return header.to_str()
                .ok()
                .and_then(|value| IpAddr::from_str(value.trim()).ok())
                .ok_or(());
        }
    }
    request.peer_addr().map(|addr| addr.ip()).ok_or(())
}

pub fn http_validate_ip(request: &HttpRequest, data: &HttpServiceData) -> Result<IpAddr, HttpResponse>
{
    http_service_retrieve_remote_ip(request, &data.http_trackers_config.real_ip).map_err(|_| {
        HttpResponse::Ok().content_type(ContentType::plaintext()).body(encode_failure("unknown origin ip"))
    })
}

pub fn http_service_query_hashing(query_map_result: Result<QueryMap, CustomError>) -> Result<QueryMap, QueryFailure>
{
    query_map_result.map_err(|e| {
        HttpResponse::Ok().content_type(ContentType::plaintext()).body(encode_failure(&e.to_string()))
    })
}
