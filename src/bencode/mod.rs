//! Wire codec for the tracker protocol.
//!
//! Everything a client sees goes through here: announce responses and
//! failure dictionaries are bencoded with `bip_bencode`, peer contacts are
//! packed in the compact binary format (BEP 23, BEP 7 for `peers6`), and
//! `.torrent` metainfo is decoded far enough to derive the info hash.
//!
//! # Example
//!
//! ```rust,ignore
//! use private_tracker::bencode::bencode::encode_failure;
//!
//! let body = encode_failure("torrent not found");
//! assert_eq!(body, b"d14:failure reason17:torrent not founde".to_vec());
//! ```

/// Encoding helpers used by the HTTP layer.
#[allow(clippy::module_inception)]
pub mod bencode;

/// Codec error enumerations.
pub mod enums;

/// Wire data structures (responses, compact peers, metainfo).
pub mod structs;

/// Implementation blocks for wire data structures.
pub mod impls;
