//! Session token configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Shortest HMAC secret accepted outside development.
const MIN_PRODUCTION_SECRET_LEN: usize = 32;

/// Longest accepted token lifetime (ten years).
const MAX_TOKEN_TTL_DAYS: u64 = 3650;

/// Session token configuration (HS256 signed cookie)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Shared secret used to sign and verify session tokens
    pub token_secret: SecretString,

    /// Lifetime of issued tokens in days
    #[serde(default = "default_token_ttl_days")]
    pub token_ttl_days: u64,

    /// Name of the cookie carrying the token
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
}

impl AuthConfig {
    /// Get token lifetime as Duration
    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl_days.saturating_mul(24 * 60 * 60))
    }

    /// Validate session token configuration
    ///
    /// In production, requires a secret of at least 32 bytes.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let secret = self.token_secret.expose_secret();
        if secret.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__TOKEN_SECRET"));
        }
        if *environment == Environment::Production && secret.len() < MIN_PRODUCTION_SECRET_LEN {
            return Err(ValidationError::TokenSecretTooShort(MIN_PRODUCTION_SECRET_LEN));
        }
        if self.token_ttl_days == 0 || self.token_ttl_days > MAX_TOKEN_TTL_DAYS {
            return Err(ValidationError::InvalidTokenTtl);
        }
        if self.cookie_name.trim().is_empty() {
            return Err(ValidationError::InvalidCookieName);
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: SecretString::new(String::new()),
            token_ttl_days: default_token_ttl_days(),
            cookie_name: default_cookie_name(),
        }
    }
}

fn default_token_ttl_days() -> u64 {
    365
}

fn default_cookie_name() -> String {
    "token".to_string()
}
