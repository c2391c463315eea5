//! Best-effort inspection of bearer tokens
//!
//! The backend issues JWTs. The client never validates them; it only peeks
//! at the `exp` claim to tell the user how long the session has left.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Deserialize)]
struct Claims {
    exp: i64, // Unix timestamp
}

/// Expiry encoded in a JWT, or `None` for opaque or malformed tokens
pub fn expires_at(token: &str) -> Option<DateTime<Utc>> {
    // JWT format: header.payload.signature
    let mut parts = token.split('.');
    let (_, payload, _) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let claims: Claims = serde_json::from_slice(&bytes).ok()?;
    DateTime::from_timestamp(claims.exp, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt_with_payload(payload: &str) -> String {
        format!(
            "{}.{}.signature",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    #[test]
    fn test_expiry_from_jwt() {
        let token = jwt_with_payload(r#"{"sub":"guest@example.com","exp":1700000000}"#);
        let exp = expires_at(&token).unwrap();
        assert_eq!(exp.timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_opaque_token_has_no_expiry() {
        assert!(expires_at("not-a-jwt").is_none());
        assert!(expires_at("a.b.c.d").is_none());
    }

    #[test]
    fn test_payload_without_exp() {
        let token = jwt_with_payload(r#"{"sub":"guest@example.com"}"#);
        assert!(expires_at(&token).is_none());
    }

    #[test]
    fn test_garbage_payload() {
        assert!(expires_at("header.%%%%.sig").is_none());
    }
}
