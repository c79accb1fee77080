//! Volunteer request domain module.
//!
//! A volunteer request records one volunteer applying to one post. At most
//! one request may exist per (volunteer email, post) pair.

mod document;

pub use document::{NewVolunteerRequest, VolunteerRequest};
