//! Authentication types for the domain layer.
//!
//! The session cookie carries a signed token whose only identity claim is
//! the user's email. Any token adapter populates `AuthenticatedUser` via the
//! `SessionValidator` port.

use thiserror::Error;

/// Identity extracted from a verified session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Email claim from the token.
    pub email: String,
}

impl AuthenticatedUser {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    /// Returns true if this identity owns resources keyed by `email`.
    ///
    /// Comparison is exact; emails are not case-folded.
    pub fn owns(&self, email: &str) -> bool {
        self.email == email
    }
}

/// Authentication errors that can occur while issuing or validating tokens.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The token is malformed or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token has expired.
    #[error("Token expired")]
    TokenExpired,

    /// The token could not be signed.
    #[error("Failed to sign token: {0}")]
    SigningFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owns_matches_exact_email() {
        let user = AuthenticatedUser::new("alice@example.com");
        assert!(user.owns("alice@example.com"));
        assert!(!user.owns("bob@example.com"));
        assert!(!user.owns("Alice@example.com"));
    }

    #[test]
    fn signing_failed_displays_cause() {
        let err = AuthError::SigningFailed("key too short".to_string());
        assert_eq!(err.to_string(), "Failed to sign token: key too short");
    }
}
