//! HTTP adapters - REST API implementations.
//!
//! Each resource has its own HTTP adapter for endpoint exposure; `router`
//! assembles them with the cross-cutting layers.

pub mod error;
pub mod middleware;
pub mod post;
pub mod router;
pub mod session;
pub mod volunteer_request;

// Re-export key types for convenience
pub use error::{domain_error_response, ErrorResponse};
pub use router::{app_router, AppServices, RouterConfig};
