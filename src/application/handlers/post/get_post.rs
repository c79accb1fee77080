//! GetPostHandler - Query handler for a single post.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, PostId};
use crate::domain::post::Post;
use crate::ports::PostRepository;

#[derive(Debug, Clone)]
pub struct GetPostQuery {
    pub id: PostId,
}

/// Handler for looking up one post. A miss is `None`, not an error.
pub struct GetPostHandler {
    repository: Arc<dyn PostRepository>,
}

impl GetPostHandler {
    pub fn new(repository: Arc<dyn PostRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetPostQuery) -> Result<Option<Post>, DomainError> {
        self.repository.find_by_id(&query.id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;

    #[tokio::test]
    async fn missing_post_is_none() {
        let handler = GetPostHandler::new(Arc::new(InMemoryStore::new()));
        let result = handler.handle(GetPostQuery { id: PostId::new() }).await;
        assert!(matches!(result, Ok(None)));
    }
}
