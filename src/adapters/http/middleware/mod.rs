//! HTTP middleware for axum.
//!
//! - `auth` - Session cookie validation and the `RequireAuth` extractor

pub mod auth;

pub use auth::{require_session, AuthRejection, AuthState, RequireAuth};
