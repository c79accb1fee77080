//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, the authenticated identity and error types
//! that form the vocabulary of the HelpHive domain.

mod auth;
mod errors;
mod ids;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode};
pub use ids::{PostId, VolunteerRequestId};
