//! ApplyToPostHandler - Command handler for a volunteer applying to a post.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::volunteer_request::NewVolunteerRequest;
use crate::ports::{InsertOneResult, VolunteerRequestRepository};

/// Command to apply to a post.
#[derive(Debug, Clone)]
pub struct ApplyToPostCommand {
    pub request: NewVolunteerRequest,
}

/// Handler for volunteer applications.
///
/// Storing the request and decrementing the post's `volunteers_needed`
/// happen as one unit in the repository. A second application by the same
/// volunteer to the same post fails with `DuplicateRequest`.
pub struct ApplyToPostHandler {
    repository: Arc<dyn VolunteerRequestRepository>,
}

impl ApplyToPostHandler {
    pub fn new(repository: Arc<dyn VolunteerRequestRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: ApplyToPostCommand) -> Result<InsertOneResult, DomainError> {
        let request = cmd.request;
        request.validate()?;

        let outcome = self.repository.apply(&request).await?;

        if !outcome.slot_claimed {
            tracing::warn!(
                post_id = %request.post_id,
                volunteer = %request.volunteer_email,
                "Request stored for a post that does not exist"
            );
        }
        tracing::info!(
            request_id = %outcome.insert.inserted_id,
            post_id = %request.post_id,
            "Volunteer request created"
        );

        Ok(outcome.insert)
    }
}
