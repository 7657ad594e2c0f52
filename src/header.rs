use crate::error::{Error, Result};

/// The only header segment this crate produces or accepts.
///
/// Base64URL of [`HEADER_JSON`]. It is compared as opaque bytes and never
/// parsed, so the algorithm cannot be chosen by whoever wrote the token.
pub const HEADER: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9";

/// Decoded form of [`HEADER`].
pub const HEADER_JSON: &str = r#"{"alg":"HS256","typ":"JWT"}"#;

/// Segment separator
pub const SEPARATOR: char = '.';

/// Check that a header segment is byte-identical to [`HEADER`].
pub(crate) fn ensure_header(segment: &str) -> Result<()> {
    if segment.as_bytes() == HEADER.as_bytes() {
        Ok(())
    } else {
        Err(Error::HeaderInvalid)
    }
}
