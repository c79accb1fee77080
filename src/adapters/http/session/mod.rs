//! HTTP adapter for session endpoints.
//!
//! - `POST /jwt` - Issue a session token as an HTTP-only cookie
//! - `GET /logout` - Clear the session cookie

mod cookie;
mod dto;
mod handlers;
mod routes;

pub use cookie::CookiePolicy;
pub use dto::{IssueTokenRequest, IssueTokenResponse, LogoutResponse};
pub use handlers::SessionHandlers;
pub use routes::session_routes;
