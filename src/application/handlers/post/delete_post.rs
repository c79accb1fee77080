//! DeletePostHandler - Command handler for removing a post.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, PostId};
use crate::ports::{DeleteResult, PostRepository};

#[derive(Debug, Clone)]
pub struct DeletePostCommand {
    pub id: PostId,
}

/// Handler for deleting posts. Requests that reference the post are kept.
pub struct DeletePostHandler {
    repository: Arc<dyn PostRepository>,
}

impl DeletePostHandler {
    pub fn new(repository: Arc<dyn PostRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeletePostCommand) -> Result<DeleteResult, DomainError> {
        let result = self.repository.delete(&cmd.id).await?;
        tracing::info!(post_id = %cmd.id, deleted = result.deleted_count, "Post delete");
        Ok(result)
    }
}
