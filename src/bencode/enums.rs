/// Errors raised while decoding `.torrent` files.
pub mod metainfo_error;
