//! Liveness of a claims set
//!
//! Decoding a token proves it is authentic, not that it is still valid.
//! These checks are separate so callers can still read an expired but
//! authentic token, for example to refresh it.

use crate::claims::Claims;
use crate::error::{Error, Result};
use std::time::{SystemTime, UNIX_EPOCH};

/// Whether `claims` are live at `now` (seconds since Unix epoch)
///
/// True iff `exp` is present and `now <= exp`. A token expiring exactly at
/// `now` is still live. No clock skew is applied.
pub fn is_live(claims: &Claims, now: i64) -> bool {
    claims.exp.is_some_and(|exp| now <= exp)
}

/// [`is_live`] against the system clock
pub fn is_live_now(claims: &Claims) -> bool {
    is_live(claims, current_timestamp())
}

/// [`is_live`] as a `Result`, for callers propagating with `?`
pub fn ensure_live(claims: &Claims, now: i64) -> Result<()> {
    match claims.exp {
        None => Err(Error::TokenMissingClaim("exp".into())),
        Some(exp) if now <= exp => Ok(()),
        Some(exp) => Err(Error::TokenExpired {
            expired_at: exp,
            now,
        }),
    }
}

/// Get current Unix timestamp
pub fn current_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_else(|_| std::time::Duration::from_secs(0))
        .as_secs() as i64
}
