//! Splitting and joining the three-part token structure

use crate::error::{Error, Result};
use crate::header::SEPARATOR;

/// Split a token into its header, payload and signature segments.
///
/// Splits strictly on `.` and succeeds only for exactly three pieces. Empty
/// pieces count, so `"a.b."` splits while `"a.b"` and `"a.b.c.d"` do not.
/// Nothing is decoded here.
pub fn split_token(token: &str) -> Result<(&str, &str, &str)> {
    let mut parts = token.split(SEPARATOR);
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(header), Some(payload), Some(signature), None) => Ok((header, payload, signature)),
        _ => Err(Error::FormatInvalid {
            found: token.split(SEPARATOR).count(),
        }),
    }
}

/// The signed portion of a token: `header + "." + payload`
pub fn message(header: &str, payload: &str) -> String {
    let mut out = String::with_capacity(header.len() + 1 + payload.len());
    out.push_str(header);
    out.push(SEPARATOR);
    out.push_str(payload);
    out
}

/// Join the three segments of a token
pub(crate) fn join(header: &str, payload: &str, signature: &str) -> String {
    let mut out = message(header, payload);
    out.reserve(1 + signature.len());
    out.push(SEPARATOR);
    out.push_str(signature);
    out
}
