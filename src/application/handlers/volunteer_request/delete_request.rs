//! DeleteRequestHandler - Command handler for withdrawing a request.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, VolunteerRequestId};
use crate::ports::{DeleteResult, VolunteerRequestRepository};

#[derive(Debug, Clone)]
pub struct DeleteRequestCommand {
    pub id: VolunteerRequestId,
}

/// Handler for deleting requests. The post's counter is left as is.
pub struct DeleteRequestHandler {
    repository: Arc<dyn VolunteerRequestRepository>,
}

impl DeleteRequestHandler {
    pub fn new(repository: Arc<dyn VolunteerRequestRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteRequestCommand) -> Result<DeleteResult, DomainError> {
        let result = self.repository.delete(&cmd.id).await?;
        tracing::info!(request_id = %cmd.id, deleted = result.deleted_count, "Request delete");
        Ok(result)
    }
}
