//! # hsjwt - HS256-only JSON Web Tokens
//!
//! **hsjwt** issues and verifies compact signed tokens carrying a small set of
//! registered claims. A token is bound to a shared secret: anyone holding the
//! secret can check it was not altered and, separately, that it has not
//! expired.
//!
//! ## Quick Start
//!
//! ```
//! use hsjwt::{decode, encode, is_live, Claims};
//!
//! let claims = Claims::new()
//!     .issuer("whoyou.io")
//!     .subject("john@example.com")
//!     .expires_at(100_000);
//!
//! let token = encode(&claims, b"secret")?;
//! assert_eq!(
//!     token,
//!     "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
//!      eyJpc3MiOiJ3aG95b3UuaW8iLCJleHAiOjEwMDAwMCwic3ViIjoiam9obkBleGFtcGxlLmNvbSJ9.\
//!      xF8mxxOSt5yDGvQfmoO-f2MoDILVQkk-6NKasgAk6_8"
//! );
//!
//! let decoded = decode(&token, b"secret")?;
//! assert_eq!(decoded, claims);
//! assert!(is_live(&decoded, 100_000));
//! assert!(!is_live(&decoded, 100_001));
//! # Ok::<(), hsjwt::Error>(())
//! ```
//!
//! ## Validation Flow
//!
//! ```text
//! token
//!     │ split_token()        exactly three '.'-separated segments
//!     ▼
//! parsed
//!     │ header check         byte-equal to HEADER
//!     ▼
//! header valid
//!     │ verify()             HMAC-SHA256, constant-time comparison
//!     ▼
//! authentic
//!     │ payload decode       Base64URL, then JSON object
//!     ▼
//! Claims  ── is_live(now) ──▶ live / expired
//! ```
//!
//! Any failing step rejects the token. [`decode`] stops at `Claims`; callers
//! that care about expiration call [`is_live`] (or [`ensure_live`]) themselves.
//!
//! ## Security
//!
//! ### Pinned Algorithm
//!
//! There is exactly one header, [`HEADER`]. It is compared as opaque bytes,
//! never parsed, so a token cannot select `none` or any other algorithm.
//!
//! ### Timing Attack Protection
//!
//! Signature comparison uses the
//! [`constant_time_eq`](https://crates.io/crates/constant_time_eq) crate.
//!
//! ### Secrets
//!
//! Secrets are passed on every call and are never stored, cached or logged.
//!
//! ## Logging
//!
//! Rejections are reported through [`tracing`] at `debug` level with the
//! failing stage. No subscriber is installed by this crate.
//!
//! ## References
//!
//! - [RFC 7519](https://datatracker.ietf.org/doc/html/rfc7519) - JSON Web Token (JWT)
//! - [RFC 4648 §5](https://datatracker.ietf.org/doc/html/rfc4648#section-5) - Base64URL

mod claims;
mod error;
mod expiration;
mod header;
mod segment;
mod signature;
mod token;

pub mod utils;

// Public Interface
pub use claims::Claims;
pub use error::{Error, Result};
pub use expiration::{current_timestamp, ensure_live, is_live, is_live_now};
pub use header::{HEADER, HEADER_JSON, SEPARATOR};
pub use segment::{message, split_token};
pub use signature::{sign, verify};
pub use token::{decode, encode, stamp, stamp_at};
pub use utils::{decode_segment, encode_segment};
