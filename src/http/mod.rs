//! HTTP tracker transport.
//!
//! Serves private announces over actix-web. The user secret and the auth tag
//! travel in the path, everything else in the query string:
//!
//! - `/{secret}/{auth_tag}/announce?info_hash=..&peer_id=..&port=..&uploaded=..&downloaded=..&left=..`
//!
//! Every answer is a bencoded dictionary. Refused announces still get
//! `200 OK` with a `failure reason`; only unknown routes get `404`.

/// Data structures for HTTP request handling.
pub mod structs;

/// Type aliases for HTTP module.
pub mod types;

/// Core HTTP service implementation.
#[allow(clippy::module_inception)]
pub mod http;
