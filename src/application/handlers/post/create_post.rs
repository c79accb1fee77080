//! CreatePostHandler - Command handler for publishing a new post.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::post::PostContent;
use crate::ports::{InsertOneResult, PostRepository};

/// Command to publish a post.
#[derive(Debug, Clone)]
pub struct CreatePostCommand {
    pub content: PostContent,
}

/// Handler for creating posts.
pub struct CreatePostHandler {
    repository: Arc<dyn PostRepository>,
}

impl CreatePostHandler {
    pub fn new(repository: Arc<dyn PostRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreatePostCommand) -> Result<InsertOneResult, DomainError> {
        let content = cmd.content.strip_reserved();
        content.validate()?;

        let result = self.repository.insert(&content).await?;
        tracing::info!(
            post_id = %result.inserted_id,
            organizer = %content.organizer_email,
            "Post created"
        );
        Ok(result)
    }
}
