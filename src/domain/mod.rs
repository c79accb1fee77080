//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, auth identity, errors)
//! - `post` - Help posts published by organizers, plus search and ordering
//! - `volunteer_request` - Applications a volunteer makes to a post

pub mod foundation;
pub mod post;
pub mod volunteer_request;
