//! ListRequestsHandler - Query handler for all volunteer requests.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::volunteer_request::VolunteerRequest;
use crate::ports::VolunteerRequestRepository;

#[derive(Debug, Clone, Default)]
pub struct ListRequestsQuery;

pub struct ListRequestsHandler {
    repository: Arc<dyn VolunteerRequestRepository>,
}

impl ListRequestsHandler {
    pub fn new(repository: Arc<dyn VolunteerRequestRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        _query: ListRequestsQuery,
    ) -> Result<Vec<VolunteerRequest>, DomainError> {
        self.repository.find(None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::foundation::PostId;
    use crate::domain::volunteer_request::NewVolunteerRequest;

    #[tokio::test]
    async fn returns_every_request_in_creation_order() {
        let store = Arc::new(InMemoryStore::new());
        let post_id = PostId::new();
        store.apply(&NewVolunteerRequest::new("a@x.com", post_id)).await.unwrap();
        store.apply(&NewVolunteerRequest::new("b@x.com", post_id)).await.unwrap();

        let requests = ListRequestsHandler::new(store)
            .handle(ListRequestsQuery)
            .await
            .unwrap();
        let emails: Vec<_> = requests.iter().map(|r| r.volunteer_email()).collect();
        assert_eq!(emails, vec!["a@x.com", "b@x.com"]);
    }
}
