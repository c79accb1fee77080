//! Mock session adapter for testing.
//!
//! Implements `SessionIssuer` and `SessionValidator` without any
//! cryptography: issued tokens are remembered and only those (plus tokens
//! registered with `with_user`) validate.
//!
//! # Example
//!
//! ```ignore
//! use helphive::adapters::auth::MockSessionCodec;
//!
//! let codec = MockSessionCodec::new().with_user("valid-token", "org@example.com");
//! let user = codec.validate("valid-token").await?;
//! assert_eq!(user.email, "org@example.com");
//! ```

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::{SessionIssuer, SessionValidator};

/// Mock session codec for testing.
#[derive(Debug, Default)]
pub struct MockSessionCodec {
    /// Map of valid tokens to the email they identify
    tokens: RwLock<HashMap<String, String>>,
    /// Error returned by every `validate` call, if set
    force_error: RwLock<Option<AuthError>>,
    /// Whether `issue` fails
    fail_issue: bool,
}

impl MockSessionCodec {
    /// Creates a new empty mock codec.
    pub fn new() -> Self {
        Self::default()
    }

    /// A codec whose `issue` always fails.
    pub fn failing_issue() -> Self {
        Self {
            fail_issue: true,
            ..Self::default()
        }
    }

    /// Adds a valid token that maps to `email`.
    pub fn with_user(self, token: impl Into<String>, email: impl Into<String>) -> Self {
        self.tokens
            .write()
            .unwrap()
            .insert(token.into(), email.into());
        self
    }

    /// Forces all validations to return the specified error.
    pub fn with_error(self, error: AuthError) -> Self {
        *self.force_error.write().unwrap() = Some(error);
        self
    }

    /// Returns the number of registered valid tokens.
    pub fn token_count(&self) -> usize {
        self.tokens.read().unwrap().len()
    }
}

impl SessionIssuer for MockSessionCodec {
    fn issue(&self, email: &str) -> Result<String, AuthError> {
        if self.fail_issue {
            return Err(AuthError::SigningFailed("mock signer disabled".to_string()));
        }
        let token = format!("mock-token:{}", email);
        self.tokens
            .write()
            .unwrap()
            .insert(token.clone(), email.to_string());
        Ok(token)
    }
}

#[async_trait]
impl SessionValidator for MockSessionCodec {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        if let Some(error) = self.force_error.read().unwrap().clone() {
            return Err(error);
        }

        self.tokens
            .read()
            .unwrap()
            .get(token)
            .map(AuthenticatedUser::new)
            .ok_or(AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn registered_token_validates() {
        let codec = MockSessionCodec::new().with_user("t", "a@example.com");
        assert_eq!(codec.validate("t").await.unwrap().email, "a@example.com");
    }

    #[tokio::test]
    async fn unknown_token_is_invalid() {
        let codec = MockSessionCodec::new();
        assert_eq!(codec.validate("nope").await, Err(AuthError::InvalidToken));
    }

    #[tokio::test]
    async fn issued_token_is_accepted() {
        let codec = MockSessionCodec::new();
        let token = codec.issue("b@example.com").unwrap();
        assert_eq!(codec.token_count(), 1);
        assert_eq!(codec.validate(&token).await.unwrap().email, "b@example.com");
    }

    #[tokio::test]
    async fn forced_error_overrides_tokens() {
        let codec = MockSessionCodec::new()
            .with_user("t", "a@example.com")
            .with_error(AuthError::TokenExpired);
        assert_eq!(codec.validate("t").await, Err(AuthError::TokenExpired));
    }

    #[test]
    fn failing_issue_returns_signing_error() {
        let codec = MockSessionCodec::failing_issue();
        assert!(matches!(
            codec.issue("a@example.com"),
            Err(AuthError::SigningFailed(_))
        ));
    }
}
