//! Bearer token claims
//!
//! The access token is a JWT issued and signed by the backend. The client
//! treats it as opaque except for two claims: the subject (the viewer's
//! user id) and the expiry instant. The signature is never verified
//! client-side; only the server can do that.

use crate::error::{Error, Result};
use chrono::{DateTime, TimeZone, Utc};
use jsonwebtoken::{DecodingKey, Validation};
use serde::Deserialize;

/// The claims the client reads out of the access token
#[derive(Debug, Clone, Deserialize)]
pub struct Claims {
    /// Subject: the authenticated user's id
    pub sub: String,
    /// Expiry as a Unix timestamp (seconds)
    pub exp: i64,
}

impl Claims {
    /// Expiry as a UTC instant
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }

    /// Whether the token has expired.
    ///
    /// The comparison is exact (`now >= exp`); there is no early-refresh
    /// window, matching the backend's own check.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Decode the claims of a bearer token without verifying its signature.
///
/// A token that cannot be decoded is treated as malformed; the gateway maps
/// that to a terminal session failure.
pub fn decode_claims(token: &str) -> Result<Claims> {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    let data = jsonwebtoken::decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map_err(|e| Error::TokenDecode {
            message: e.to_string(),
        })?;

    Ok(data.claims)
}

#[cfg(test)]
mod token_tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde::Serialize;

    #[derive(Serialize)]
    struct TestClaims {
        sub: String,
        exp: i64,
    }

    fn make_token(sub: &str, exp: i64) -> String {
        encode(
            &Header::default(),
            &TestClaims {
                sub: sub.to_string(),
                exp,
            },
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap()
    }

    #[test]
    fn test_decode_claims() {
        let exp = Utc::now().timestamp() + 3600;
        let token = make_token("user-1", exp);

        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.exp, exp);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_expired_claims() {
        let token = make_token("user-1", Utc::now().timestamp() - 60);
        let claims = decode_claims(&token).unwrap();
        assert!(claims.is_expired());
    }

    #[test]
    fn test_malformed_token_is_decode_error() {
        let err = decode_claims("definitely-not-a-jwt").unwrap_err();
        assert!(matches!(err, Error::TokenDecode { .. }));
        assert!(err.is_terminal());
    }

    #[test]
    fn test_signature_is_not_verified() {
        // The payload is readable even though we don't hold the signing key.
        let token = make_token("user-2", Utc::now().timestamp() + 10);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.sub, "user-2");
    }
}
