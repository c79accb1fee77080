//! Session issuing port.
//!
//! Counterpart of `SessionValidator`: turns an identity into a signed token
//! that the validator will later accept.

use crate::domain::foundation::AuthError;

/// Signs session tokens.
pub trait SessionIssuer: Send + Sync {
    /// Sign a token carrying `email` as its identity claim.
    ///
    /// # Errors
    ///
    /// - `AuthError::SigningFailed` if the token cannot be produced
    fn issue(&self, email: &str) -> Result<String, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_issuer_is_object_safe() {
        fn _accepts_dyn(_issuer: &dyn SessionIssuer) {}
    }
}
