//! UpdatePostHandler - Command handler for partial post updates.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, PostId};
use crate::domain::post::PostPatch;
use crate::ports::{PostRepository, UpdateResult};

/// Command to merge `patch` into the post with `id`.
#[derive(Debug, Clone)]
pub struct UpdatePostCommand {
    pub id: PostId,
    pub patch: PostPatch,

    /// Create the post under `id` when it does not exist.
    pub upsert: bool,
}

/// Handler for updating posts.
pub struct UpdatePostHandler {
    repository: Arc<dyn PostRepository>,
}

impl UpdatePostHandler {
    pub fn new(repository: Arc<dyn PostRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdatePostCommand) -> Result<UpdateResult, DomainError> {
        let result = self
            .repository
            .update(&cmd.id, &cmd.patch, cmd.upsert)
            .await?;

        if result.upserted_count > 0 {
            tracing::info!(post_id = %cmd.id, "Post created by upsert");
        } else if result.matched_count == 0 {
            tracing::debug!(post_id = %cmd.id, "Update matched no post");
        }
        Ok(result)
    }
}
