//! Explicit authentication context for backend requests.
//!
//! The original storefront read the auth token from persistent browser
//! storage at module load, which made every component ambiently coupled
//! to a global. Here the token is an explicit value constructed once by
//! the page shell and handed to [`crate::api::BackendClient`], so the
//! cart can be exercised in tests without any global environment.

use secrecy::{ExposeSecret, SecretString};

/// Bearer credential attached to every backend request.
///
/// Implements `Debug` manually to redact the token value.
#[derive(Clone, Default)]
pub struct AuthContext {
    token: Option<SecretString>,
}

impl AuthContext {
    /// Context carrying a signed-in user's token.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(SecretString::from(token.into())),
        }
    }

    /// Context for an anonymous visitor (no stored token).
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { token: None }
    }

    /// Whether a token is present.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Value for the `Authorization` header.
    ///
    /// A missing token produces `"Token "` with an empty value rather
    /// than withholding the header; the backend is the one that rejects
    /// unauthenticated requests. This mirrors the deployed client, which
    /// always sent the header.
    #[must_use]
    pub fn header_value(&self) -> String {
        match &self.token {
            Some(token) => format!("Token {}", token.expose_secret()),
            None => "Token ".to_string(),
        }
    }
}

impl std::fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthContext")
            .field(
                "token",
                &self.token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}
