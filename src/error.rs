//! Errors for hsjwt

use crate::header::HEADER;
use thiserror::Error;

/// hsjwt Errors
///
/// Every check in the pipeline is terminal: a token that fails any stage is
/// rejected with exactly one of these variants.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ============================================================================
    // Format Errors
    // ============================================================================
    #[error("Invalid token format: expected three segments separated by '.', found {found}")]
    FormatInvalid { found: usize },

    #[error("Base64URL decoding failed: {0}")]
    FormatInvalidBase64(String),

    // ============================================================================
    // Header Errors
    // ============================================================================
    #[error("Unsupported header: header segment must be {}", HEADER)]
    HeaderInvalid,

    // ============================================================================
    // Signature Errors
    // ============================================================================
    #[error("Signature verification failed")]
    SignatureInvalid,

    // ============================================================================
    // Claims Errors
    // ============================================================================
    #[error("Could not parse payload into a claims set: {0}")]
    PayloadInvalid(String),

    #[error("Could not serialize claims: {0}")]
    SerializationFailed(String),

    // ============================================================================
    // Token Errors (never returned by decode)
    // ============================================================================
    #[error("Token expired at {expired_at} (now: {now})")]
    TokenExpired { expired_at: i64, now: i64 },

    #[error("Required token claim '{0}' is missing")]
    TokenMissingClaim(String),
}

impl Error {
    /// Structural failures: wrong segment count or a segment that is not Base64URL.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Error::FormatInvalid { .. } | Error::FormatInvalidBase64(_)
        )
    }
}

/// Result type alias for hsjwt operations
pub type Result<T> = std::result::Result<T, Error>;
