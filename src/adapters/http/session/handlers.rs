//! HTTP handlers for session endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::cookie::CookieJar;

use crate::ports::SessionIssuer;

use super::cookie::CookiePolicy;
use super::dto::{IssueTokenRequest, IssueTokenResponse, LogoutResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SessionHandlers {
    issuer: Arc<dyn SessionIssuer>,
    cookie: CookiePolicy,
}

impl SessionHandlers {
    pub fn new(issuer: Arc<dyn SessionIssuer>, cookie: CookiePolicy) -> Self {
        Self { issuer, cookie }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /jwt - Issue a session token cookie
pub async fn issue_token(
    State(handlers): State<SessionHandlers>,
    jar: CookieJar,
    Json(req): Json<IssueTokenRequest>,
) -> Response {
    match handlers.issuer.issue(&req.email) {
        Ok(token) => {
            tracing::info!(email = %req.email, "Session token issued");
            let jar = jar.add(handlers.cookie.session_cookie(token));
            (jar, Json(IssueTokenResponse::issued())).into_response()
        }
        Err(e) => {
            tracing::error!(email = %req.email, error = %e, "Failed to issue session token");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(IssueTokenResponse::failed(e.to_string())),
            )
                .into_response()
        }
    }
}

/// GET /logout - Clear the session cookie
pub async fn logout(State(handlers): State<SessionHandlers>, jar: CookieJar) -> Response {
    let jar = jar.add(handlers.cookie.removal_cookie());
    (jar, Json(LogoutResponse { success: true })).into_response()
}
