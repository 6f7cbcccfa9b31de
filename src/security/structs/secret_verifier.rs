/// Checks that an `auth_tag` was issued by this tracker for a `secret`.
///
/// The key is the raw bytes of the configured shared key. Secrets and tags
/// travel hex-encoded.
#[derive(Clone)]
pub struct SecretVerifier {
    pub(crate) key: Vec<u8>,
}
