//! Post handlers.
//!
//! ## Commands
//! - Creating, updating (optionally upserting) and deleting posts
//!
//! ## Queries
//! - Public listing with title search
//! - Single post lookup
//! - Organizer-scoped listing (owner only)

mod create_post;
mod delete_post;
mod get_post;
mod list_organizer_posts;
mod list_posts;
mod update_post;

// Commands
pub use create_post::{CreatePostCommand, CreatePostHandler};
pub use delete_post::{DeletePostCommand, DeletePostHandler};
pub use update_post::{UpdatePostCommand, UpdatePostHandler};

// Queries
pub use get_post::{GetPostHandler, GetPostQuery};
pub use list_organizer_posts::{ListOrganizerPostsHandler, ListOrganizerPostsQuery};
pub use list_posts::{ListPostsHandler, ListPostsQuery};
