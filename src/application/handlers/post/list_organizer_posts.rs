//! ListOrganizerPostsHandler - Query handler for an organizer's own posts.

use std::sync::Arc;

use crate::domain::foundation::{AuthenticatedUser, DomainError};
use crate::domain::post::{Post, PostQuery};
use crate::ports::PostRepository;

/// Query for the posts created by `organizer_email`, made by `requester`.
#[derive(Debug, Clone)]
pub struct ListOrganizerPostsQuery {
    pub organizer_email: String,
    pub requester: AuthenticatedUser,
}

/// Handler for organizer-scoped listings.
///
/// Only the organizer may list their own posts; anyone else is refused
/// before the store is queried.
pub struct ListOrganizerPostsHandler {
    repository: Arc<dyn PostRepository>,
}

impl ListOrganizerPostsHandler {
    pub fn new(repository: Arc<dyn PostRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListOrganizerPostsQuery) -> Result<Vec<Post>, DomainError> {
        if !query.requester.owns(&query.organizer_email) {
            tracing::warn!(
                requester = %query.requester.email,
                organizer = %query.organizer_email,
                "Organizer listing refused"
            );
            return Err(DomainError::forbidden());
        }

        self.repository
            .find(&PostQuery::by_organizer(query.organizer_email))
            .await
    }
}
