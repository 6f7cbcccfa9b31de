//! Announce authentication.
//!
//! Every private announce URL carries a user secret and a tag. The tag is
//! `HMAC-SHA256(shared_key, secret)` computed by this tracker when the user's
//! `.torrent` was issued, so a request is only honoured when the tag still
//! matches under the current shared key.

/// Verifier data structures.
pub mod structs;

/// Implementation blocks for the verifier.
pub mod impls;
