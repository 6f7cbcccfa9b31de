/// HMAC-SHA256 tag verifier keyed with the tracker's shared key.
pub mod secret_verifier;
