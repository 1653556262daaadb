//! Bearer token type.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// An opaque bearer token presented in the `Authorization` header.
///
/// The API issues these as JWTs, but the client treats the value as opaque
/// apart from a best-effort peek at the `role` claim.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Not validated client-side; the server is the authority
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Create a new token from a server-issued value.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token value for use in authorization headers.
    ///
    /// # Security
    ///
    /// Use only when constructing HTTP authorization headers or persisting
    /// the session.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Best-effort extraction of the `role` claim from a JWT payload.
    ///
    /// The signature is not verified; the claim is only used for client-side
    /// gating and the server re-checks the role on every request. Returns
    /// `None` when the token is not a JWT or carries no role.
    pub fn role_claim(&self) -> Option<String> {
        let payload = self.0.split('.').nth(1)?;
        let bytes = URL_SAFE_NO_PAD
            .decode(payload.trim_end_matches('='))
            .ok()?;
        let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
        claims.get("role")?.as_str().map(str::to_string)
    }
}

// Hide token value in Debug output
impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AuthToken").field(&"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fake_jwt(claims: serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(claims.to_string().as_bytes());
        format!("{}.{}.signature", header, payload)
    }

    #[test]
    fn token_hides_value_in_debug() {
        let token = AuthToken::new("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.abc.def");
        let debug = format!("{:?}", token);
        assert!(!debug.contains("eyJ"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn role_claim_from_jwt() {
        let token = AuthToken::new(fake_jwt(json!({"user_id": "u1", "role": "admin"})));
        assert_eq!(token.role_claim().as_deref(), Some("admin"));
    }

    #[test]
    fn role_claim_absent() {
        let token = AuthToken::new(fake_jwt(json!({"user_id": "u1"})));
        assert!(token.role_claim().is_none());
    }

    #[test]
    fn role_claim_none_for_opaque_token() {
        let token = AuthToken::new("not-a-jwt");
        assert!(token.role_claim().is_none());
    }
}
