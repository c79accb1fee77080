//! ListPostsHandler - Query handler for the public post listing.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::post::{Post, PostQuery};
use crate::ports::PostRepository;

/// Query for the public listing, optionally narrowed by title.
#[derive(Debug, Clone, Default)]
pub struct ListPostsQuery {
    pub search: Option<String>,
}

/// Handler for listing posts.
///
/// Results are sorted by ascending deadline, posts without one first.
pub struct ListPostsHandler {
    repository: Arc<dyn PostRepository>,
}

impl ListPostsHandler {
    pub fn new(repository: Arc<dyn PostRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListPostsQuery) -> Result<Vec<Post>, DomainError> {
        self.repository.find(&PostQuery::search(query.search)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::post::PostContent;
    use serde_json::json;

    async fn seed(store: &InMemoryStore, title: &str, deadline: &str) {
        let content: PostContent = serde_json::from_value(json!({
            "post_title": title,
            "organizerEmail": "o@x.com",
            "deadline": deadline,
            "volunteers_needed": 1
        }))
        .unwrap();
        store.insert(&content).await.unwrap();
    }

    #[tokio::test]
    async fn without_search_returns_all_sorted() {
        let store = Arc::new(InMemoryStore::new());
        seed(&store, "Later", "2024-12-01").await;
        seed(&store, "Sooner", "2024-01-01").await;

        let posts = ListPostsHandler::new(store)
            .handle(ListPostsQuery::default())
            .await
            .unwrap();
        let titles: Vec<_> = posts.iter().map(|p| p.content.title.as_str()).collect();
        assert_eq!(titles, vec!["Sooner", "Later"]);
    }

    #[tokio::test]
    async fn search_narrows_by_title() {
        let store = Arc::new(InMemoryStore::new());
        seed(&store, "Tree planting", "2024-12-01").await;
        seed(&store, "Blood drive", "2024-01-01").await;

        let posts = ListPostsHandler::new(store)
            .handle(ListPostsQuery {
                search: Some("TREE".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].content.title, "Tree planting");
    }
}
