//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod post;
pub mod volunteer_request;

pub use post::{
    CreatePostCommand, CreatePostHandler, DeletePostCommand, DeletePostHandler, GetPostHandler,
    GetPostQuery, ListOrganizerPostsHandler, ListOrganizerPostsQuery, ListPostsHandler,
    ListPostsQuery, UpdatePostCommand, UpdatePostHandler,
};
pub use volunteer_request::{
    ApplyToPostCommand, ApplyToPostHandler, DeleteRequestCommand, DeleteRequestHandler,
    ListRequestsHandler, ListRequestsQuery, ListVolunteerRequestsHandler,
    ListVolunteerRequestsQuery,
};
