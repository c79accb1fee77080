//! HTTP adapter for volunteer request endpoints.
//!
//! - `POST /requests` - Apply to a post
//! - `GET /requests` - All requests
//! - `GET /requests/:email` - A volunteer's own requests (session required)
//! - `DELETE /request/:id` - Withdraw a request

mod dto;
mod handlers;
mod routes;

pub use dto::CreateRequestBody;
pub use handlers::VolunteerRequestHandlers;
pub use routes::volunteer_request_routes;
