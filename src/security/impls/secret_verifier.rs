use std::fmt;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use crate::security::structs::secret_verifier::SecretVerifier;

type HmacSha256 = Hmac<Sha256>;

impl SecretVerifier {
    pub fn new(shared_key: &str) -> SecretVerifier
    {
        SecretVerifier {
            key: shared_key.as_bytes().to_vec(),
        }
    }

    fn mac_for(&self, secret: &[u8]) -> Option<HmacSha256>
    {
        let mut mac = HmacSha256::new_from_slice(&self.key).ok()?;
        mac.update(secret);
        Some(mac)
    }

    /// `false` on any decode failure as well as on a mismatch; callers can't tell them apart.
    pub fn verify(&self, secret_hex: &str, tag_hex: &str) -> bool
    {
        let (secret, tag) = match (hex::decode(secret_hex), hex::decode(tag_hex)) {
            (Ok(secret), Ok(tag)) => (secret, tag),
            _ => return false,
        };
        match self.mac_for(&secret) {
            None => false,
            Some(mac) => mac.verify_slice(&tag).is_ok()
        }
    }

    /// Hex tag for `secret_hex`, or `None` when the secret is not hex.
    pub fn issue(&self, secret_hex: &str) -> Option<String>
    {
        let secret = hex::decode(secret_hex).ok()?;
        let mac = self.mac_for(&secret)?;
        Some(hex::encode(mac.finalize().into_bytes()))
    }
}

impl fmt::Debug for SecretVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretVerifier").field("key", &"<redacted>").finish()
    }
}
