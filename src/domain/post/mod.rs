//! Post domain module.
//!
//! A post is an organizer's call for volunteers. Its `volunteers_needed`
//! counter drops by one each time a volunteer applies.

mod document;
mod query;

pub use document::{Post, PostContent, PostPatch};
pub use query::{sort_by_deadline, PostOrder, PostQuery};
