//! HS256 signing and verification

use crate::header::HEADER;
use crate::segment::message;
use crate::utils::base64url;

use constant_time_eq::constant_time_eq;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Compute the signature segment for a payload segment.
///
/// HMAC-SHA256 keyed by `secret` over `HEADER + "." + payload`, returned as
/// unpadded Base64URL. Pure: the same inputs always give the same output.
pub fn sign(payload: &str, secret: &[u8]) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret).expect("HMAC accepts keys of any length");
    mac.update(message(HEADER, payload).as_bytes());
    base64url::encode_segment(&mac.finalize().into_bytes())
}

/// Check a signature segment against a header and payload segment.
///
/// The signed message always uses the fixed [`HEADER`], so any other header
/// segment never verifies. The comparison runs in constant time over the
/// encoded signature; only the length can short-circuit it.
pub fn verify(header: &str, payload: &str, signature: &str, secret: &[u8]) -> bool {
    let expected = sign(payload, secret);
    let header_ok = constant_time_eq(header.as_bytes(), HEADER.as_bytes());
    let signature_ok = constant_time_eq(expected.as_bytes(), signature.as_bytes());
    header_ok & signature_ok
}
