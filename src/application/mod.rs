//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::{
    // Post handlers
    CreatePostCommand, CreatePostHandler, DeletePostCommand, DeletePostHandler,
    GetPostHandler, GetPostQuery, ListOrganizerPostsHandler, ListOrganizerPostsQuery,
    ListPostsHandler, ListPostsQuery, UpdatePostCommand, UpdatePostHandler,
    // Volunteer request handlers
    ApplyToPostCommand, ApplyToPostHandler, DeleteRequestCommand, DeleteRequestHandler,
    ListRequestsHandler, ListRequestsQuery, ListVolunteerRequestsHandler,
    ListVolunteerRequestsQuery,
};
