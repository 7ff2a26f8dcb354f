//! Request credentials for the GroupShare API.
//!
//! The token is an opaque session credential owned by the embedding shell.
//! It is never validated here, only threaded explicitly into every network
//! call through a [`RequestContext`] — there is no ambient auth state.

use secrecy::{ExposeSecret, SecretString};

/// Opaque bearer token for the current session.
#[derive(Debug, Clone)]
pub struct AuthToken(SecretString);

impl AuthToken {
    /// Wraps a raw token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(SecretString::new(token.into()))
    }

    /// Exposes the raw token for header construction.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

/// Per-call request context carrying the caller's credential.
#[derive(Debug, Clone)]
pub struct RequestContext {
    token: AuthToken,
}

impl RequestContext {
    /// Creates a context from an existing token.
    pub fn new(token: AuthToken) -> Self {
        Self { token }
    }

    /// Convenience constructor from a raw token string.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::new(AuthToken::new(token))
    }

    /// Renders the `Authorization` header value.
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.token.expose())
    }
}
