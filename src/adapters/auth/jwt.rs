//! HS256 JWT adapter for session tokens.
//!
//! Implements both `SessionIssuer` and `SessionValidator` with one shared
//! secret. Tokens carry the user's email plus `iat`/`exp`:
//!
//! ```text
//! { "email": "org@example.com", "iat": 1717000000, "exp": 1748536000 }
//! ```
//!
//! # Example
//!
//! ```ignore
//! use helphive::adapters::auth::JwtSessionCodec;
//!
//! let codec = JwtSessionCodec::from_config(&config.auth);
//! let token = codec.issue("org@example.com")?;
//! let user = codec.validate(&token).await?;
//! ```

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::{SessionIssuer, SessionValidator};

/// Claims embedded in a session token.
#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    email: String,
    iat: i64,
    exp: i64,
}

/// Signs and verifies session tokens with an HMAC secret.
#[derive(Clone)]
pub struct JwtSessionCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl JwtSessionCodec {
    pub fn new(secret: &SecretString, ttl: Duration) -> Self {
        let secret = secret.expose_secret().as_bytes();
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(&config.token_secret, config.token_ttl())
    }

    fn sign(&self, email: &str, issued_at: DateTime<Utc>) -> Result<String, AuthError> {
        let iat = issued_at.timestamp();
        let claims = SessionClaims {
            email: email.to_string(),
            iat,
            exp: iat.saturating_add(i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX)),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to sign session token: {}", e);
            AuthError::SigningFailed(e.to_string())
        })
    }
}

impl SessionIssuer for JwtSessionCodec {
    fn issue(&self, email: &str) -> Result<String, AuthError> {
        self.sign(email, Utc::now())
    }
}

#[async_trait]
impl SessionValidator for JwtSessionCodec {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp"]);

        let token_data =
            decode::<SessionClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Session token expired");
                        AuthError::TokenExpired
                    }
                    _ => {
                        tracing::warn!("Session token rejected: {}", e);
                        AuthError::InvalidToken
                    }
                }
            })?;

        let email = token_data.claims.email;
        if email.is_empty() {
            tracing::warn!("Session token has an empty email claim");
            return Err(AuthError::InvalidToken);
        }

        Ok(AuthenticatedUser::new(email))
    }
}

impl std::fmt::Debug for JwtSessionCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSessionCodec")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
