//! ListVolunteerRequestsHandler - Query handler for a volunteer's own requests.

use std::sync::Arc;

use crate::domain::foundation::{AuthenticatedUser, DomainError};
use crate::domain::volunteer_request::VolunteerRequest;
use crate::ports::VolunteerRequestRepository;

#[derive(Debug, Clone)]
pub struct ListVolunteerRequestsQuery {
    pub volunteer_email: String,
    pub requester: AuthenticatedUser,
}

/// Handler for volunteer-scoped listings. Owner only.
pub struct ListVolunteerRequestsHandler {
    repository: Arc<dyn VolunteerRequestRepository>,
}

impl ListVolunteerRequestsHandler {
    pub fn new(repository: Arc<dyn VolunteerRequestRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: ListVolunteerRequestsQuery,
    ) -> Result<Vec<VolunteerRequest>, DomainError> {
        if !query.requester.owns(&query.volunteer_email) {
            tracing::warn!(
                requester = %query.requester.email,
                volunteer = %query.volunteer_email,
                "Volunteer request listing refused"
            );
            return Err(DomainError::forbidden());
        }

        self.repository.find(Some(&query.volunteer_email)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::foundation::{ErrorCode, PostId};
    use crate::domain::volunteer_request::NewVolunteerRequest;

    #[tokio::test]
    async fn owner_sees_only_own_requests() {
        let store = Arc::new(InMemoryStore::new());
        let post_id = PostId::new();
        store.apply(&NewVolunteerRequest::new("me@x.com", post_id)).await.unwrap();
        store.apply(&NewVolunteerRequest::new("you@x.com", post_id)).await.unwrap();

        let requests = ListVolunteerRequestsHandler::new(store)
            .handle(ListVolunteerRequestsQuery {
                volunteer_email: "me@x.com".to_string(),
                requester: AuthenticatedUser::new("me@x.com"),
            })
            .await
            .unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].volunteer_email(), "me@x.com");
    }

    #[tokio::test]
    async fn other_identity_is_forbidden() {
        let handler = ListVolunteerRequestsHandler::new(Arc::new(InMemoryStore::new()));
        let err = handler
            .handle(ListVolunteerRequestsQuery {
                volunteer_email: "me@x.com".to_string(),
                requester: AuthenticatedUser::new("you@x.com"),
            })
            .await
            .unwrap_err();
        assert!(err.is(ErrorCode::Forbidden));
    }
}
