//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Store Ports
//!
//! - `PostRepository` - The `posts` collection
//! - `VolunteerRequestRepository` - The `requests` collection, including the
//!   atomic apply-and-claim-slot operation
//!
//! ## Auth Ports
//!
//! - `SessionValidator` - Verifies a session token and extracts identity
//! - `SessionIssuer` - Signs a session token for an identity

mod post_repository;
mod session_issuer;
mod session_validator;
mod volunteer_request_repository;
mod write_result;

pub use post_repository::PostRepository;
pub use session_issuer::SessionIssuer;
pub use session_validator::SessionValidator;
pub use volunteer_request_repository::{ApplyOutcome, VolunteerRequestRepository};
pub use write_result::{DeleteResult, InsertOneResult, UpdateResult};
