//! Base64URL encoding/decoding per RFC 4648
//!
//! This module provides a thin wrapper around the `base64` crate using the
//! URL-safe alphabet without padding, which is the only form a token segment
//! may take.

use crate::error::{Error, Result};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

/// Encode bytes to a Base64URL segment (no padding)
pub fn encode_segment(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Decode a Base64URL segment to bytes
///
/// Rejects characters outside the URL-safe alphabet, `=` padding and
/// lengths that cannot come from unpadded Base64URL.
pub fn decode_segment(input: &str) -> Result<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(input)
        .map_err(|e| Error::FormatInvalidBase64(format!("Base64URL decode failed: {e}")))
}
