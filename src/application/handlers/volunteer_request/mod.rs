//! Volunteer request handlers.
//!
//! ## Commands
//! - Applying to a post (stores the request and claims a slot atomically)
//! - Withdrawing a request
//!
//! ## Queries
//! - All requests
//! - A volunteer's own requests (owner only)

mod apply_to_post;
mod delete_request;
mod list_requests;
mod list_volunteer_requests;

// Commands
pub use apply_to_post::{ApplyToPostCommand, ApplyToPostHandler};
pub use delete_request::{DeleteRequestCommand, DeleteRequestHandler};

// Queries
pub use list_requests::{ListRequestsHandler, ListRequestsQuery};
pub use list_volunteer_requests::{ListVolunteerRequestsHandler, ListVolunteerRequestsQuery};
