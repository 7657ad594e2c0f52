//! The claims set carried inside a token
//!
//! Every field is optional. Absent fields are left out of the JSON payload
//! entirely and missing keys read back as `None`.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Registered claims supported by hsjwt
///
/// Fields serialize in declaration order, which fixes the payload bytes for
/// a given set of values.
///
/// ```
/// use hsjwt::Claims;
///
/// let claims = Claims::new()
///     .issuer("whoyou.io")
///     .subject("john@example.com")
///     .expires_at(100_000);
///
/// assert_eq!(claims.sub.as_deref(), Some("john@example.com"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer (iss)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,

    /// Audience (aud)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,

    /// Expiration Time (exp) - seconds since Unix epoch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Issued At (iat) - seconds since Unix epoch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Subject (sub)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Not Before (nbf) - opaque, never interpreted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nbf: Option<String>,

    /// JWT ID (jti)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

impl Claims {
    /// Create an empty claims set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the issuer
    pub fn issuer(mut self, iss: impl Into<String>) -> Self {
        self.iss = Some(iss.into());
        self
    }

    /// Set the audience
    pub fn audience(mut self, aud: impl Into<String>) -> Self {
        self.aud = Some(aud.into());
        self
    }

    /// Set the subject
    pub fn subject(mut self, sub: impl Into<String>) -> Self {
        self.sub = Some(sub.into());
        self
    }

    /// Set the token id
    pub fn jwt_id(mut self, jti: impl Into<String>) -> Self {
        self.jti = Some(jti.into());
        self
    }

    /// Set the not-before marker
    pub fn not_before(mut self, nbf: impl Into<String>) -> Self {
        self.nbf = Some(nbf.into());
        self
    }

    /// Set the issued-at time
    pub fn issued_at(mut self, iat: i64) -> Self {
        self.iat = Some(iat);
        self
    }

    /// Set the expiration time
    pub fn expires_at(mut self, exp: i64) -> Self {
        self.exp = Some(exp);
        self
    }

    /// See [`crate::stamp`]
    pub fn stamp(self, term: Duration) -> Self {
        crate::token::stamp(self, term)
    }

    /// See [`crate::is_live`]
    pub fn is_live(&self, now: i64) -> bool {
        crate::expiration::is_live(self, now)
    }

    pub(crate) fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| Error::SerializationFailed(e.to_string()))
    }

    pub(crate) fn from_json(bytes: &[u8]) -> Result<Self> {
        // serde would also build a struct from a JSON array
        let value: serde_json::Value =
            serde_json::from_slice(bytes).map_err(|e| Error::PayloadInvalid(e.to_string()))?;
        if !value.is_object() {
            return Err(Error::PayloadInvalid(
                "payload is not a JSON object".to_string(),
            ));
        }
        serde_json::from_value(value).map_err(|e| Error::PayloadInvalid(e.to_string()))
    }
}
