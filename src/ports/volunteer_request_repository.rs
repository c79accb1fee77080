//! Volunteer request repository port.
//!
//! Besides plain reads and deletes, this port owns the one multi-document
//! write in the system: storing a request and decrementing the target
//! post's `volunteers_needed` as a single atomic unit.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, VolunteerRequestId};
use crate::domain::volunteer_request::{NewVolunteerRequest, VolunteerRequest};

use super::{DeleteResult, InsertOneResult};

/// Outcome of a successful application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyOutcome {
    pub insert: InsertOneResult,

    /// Whether the referenced post existed and had its counter decremented.
    pub slot_claimed: bool,
}

/// Repository port for the `requests` collection.
#[async_trait]
pub trait VolunteerRequestRepository: Send + Sync {
    /// Store `request` and decrement the referenced post's
    /// `volunteers_needed` by one.
    ///
    /// Uniqueness of (volunteer email, post id) is enforced by the store,
    /// so concurrent identical applications yield exactly one success. A
    /// missing post does not prevent the insert; it is reported through
    /// `ApplyOutcome::slot_claimed`.
    ///
    /// # Errors
    ///
    /// - `DuplicateRequest` if the volunteer already applied to this post
    /// - `DatabaseError` on persistence failure (nothing is written)
    async fn apply(&self, request: &NewVolunteerRequest) -> Result<ApplyOutcome, DomainError>;

    /// List requests, optionally only those of one volunteer.
    ///
    /// Returns requests in creation order.
    async fn find(
        &self,
        volunteer_email: Option<&str>,
    ) -> Result<Vec<VolunteerRequest>, DomainError>;

    /// Delete the request with `id`.
    ///
    /// Does not restore the post's counter.
    async fn delete(&self, id: &VolunteerRequestId) -> Result<DeleteResult, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volunteer_request_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn VolunteerRequestRepository) {}
    }
}
