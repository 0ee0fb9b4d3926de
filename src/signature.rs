//! HMAC-SHA1 webhook signature validation.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// Header carrying the payload signature on webhook deliveries.
pub const SIGNATURE_HEADER: &str = "x-hub-signature";

/// Scheme prefix on the signature header value.
const SIGNATURE_PREFIX: &str = "sha1=";

/// Sign payload bytes, producing the signature header value.
///
/// # Arguments
///
/// * `payload` - Raw payload bytes, exactly as they go over the wire
/// * `secret` - Shared webhook secret
///
/// # Returns
///
/// Signature in the format `sha1=<hex digest>`.
pub fn sign(payload: &[u8], secret: &SecretString) -> String {
    let mut mac = HmacSha1::new_from_slice(secret.expose_secret().as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(payload);

    format!(
        "{}{}",
        SIGNATURE_PREFIX,
        hex::encode(mac.finalize().into_bytes())
    )
}

/// Verify an HMAC-SHA1 signature over payload bytes.
///
/// Expects the `sha1=<hex digest>` header format. Any malformation
/// (missing prefix, invalid hex, wrong digest length) is reported as
/// `false`, never as an error.
///
/// The digest comparison is constant-time: how long it takes does not
/// depend on where the first mismatching byte occurs.
pub fn verify(payload: &[u8], signature: &str, secret: &SecretString) -> bool {
    let sig_hex = match signature.strip_prefix(SIGNATURE_PREFIX) {
        Some(hex) => hex,
        None => return false,
    };

    // Decode hex signature
    let expected = match hex::decode(sig_hex) {
        Ok(bytes) => bytes,
        Err(_) => return false,
    };

    // Compute HMAC
    let mut mac = match HmacSha1::new_from_slice(secret.expose_secret().as_bytes()) {
        Ok(mac) => mac,
        Err(_) => return false,
    };
    mac.update(payload);

    // Constant-time comparison; also rejects length mismatches
    mac.verify_slice(&expected).is_ok()
}
