//! HTTP adapter for post endpoints.
//!
//! - `POST /posts` - Publish a post
//! - `GET /posts?search=` - List posts by deadline, optionally searching titles
//! - `GET /posts/:id` - Single post or `null`
//! - `PUT /posts/:id[?upsert=true]` - Merge fields into a post (session required)
//! - `GET /post/:email` - An organizer's own posts (session required)
//! - `DELETE /post/:id` - Delete a post

mod dto;
mod handlers;
mod routes;

pub use dto::{SearchQuery, UpdatePostQuery};
pub use handlers::PostHandlers;
pub use routes::post_routes;
