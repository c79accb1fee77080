//! In-Memory Store Adapter
//!
//! Keeps posts and requests in insertion-ordered vectors behind one lock,
//! so an application's insert and counter decrement are observed together.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, PostId, VolunteerRequestId};
use crate::domain::post::{sort_by_deadline, Post, PostContent, PostOrder, PostPatch, PostQuery};
use crate::domain::volunteer_request::{NewVolunteerRequest, VolunteerRequest};
use crate::ports::{
    ApplyOutcome, DeleteResult, InsertOneResult, PostRepository, UpdateResult,
    VolunteerRequestRepository,
};

#[derive(Debug, Default)]
struct Collections {
    posts: Vec<Post>,
    requests: Vec<VolunteerRequest>,
}

impl Collections {
    fn post_mut(&mut self, id: &PostId) -> Option<&mut Post> {
        self.posts.iter_mut().find(|p| p.id == *id)
    }
}

/// In-memory implementation of both repository ports.
///
/// Clones share the same underlying collections.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<Collections>>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored posts
    pub async fn post_count(&self) -> usize {
        self.inner.read().await.posts.len()
    }

    /// Get the number of stored requests
    pub async fn request_count(&self) -> usize {
        self.inner.read().await.requests.len()
    }
}

#[async_trait]
impl PostRepository for InMemoryStore {
    async fn insert(&self, content: &PostContent) -> Result<InsertOneResult, DomainError> {
        let id = PostId::new();
        let mut inner = self.inner.write().await;
        inner.posts.push(Post::new(id, content.clone()));
        Ok(InsertOneResult::new(*id.as_uuid()))
    }

    async fn find(&self, query: &PostQuery) -> Result<Vec<Post>, DomainError> {
        let inner = self.inner.read().await;
        let mut posts: Vec<Post> = inner
            .posts
            .iter()
            .filter(|p| query.matches(p))
            .cloned()
            .collect();

        if query.order == PostOrder::DeadlineAscending {
            sort_by_deadline(&mut posts);
        }
        Ok(posts)
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner.posts.iter().find(|p| p.id == *id).cloned())
    }

    async fn update(
        &self,
        id: &PostId,
        patch: &PostPatch,
        upsert: bool,
    ) -> Result<UpdateResult, DomainError> {
        let mut inner = self.inner.write().await;

        if let Some(post) = inner.post_mut(id) {
            let modified = patch.apply_to(&mut post.content);
            return Ok(UpdateResult::matched(modified));
        }

        if !upsert {
            return Ok(UpdateResult::unmatched());
        }

        let content = patch.clone().into_content()?;
        inner.posts.push(Post::new(*id, content));
        Ok(UpdateResult::upserted(*id.as_uuid()))
    }

    async fn delete(&self, id: &PostId) -> Result<DeleteResult, DomainError> {
        let mut inner = self.inner.write().await;
        let before = inner.posts.len();
        inner.posts.retain(|p| p.id != *id);
        Ok(DeleteResult::new((before - inner.posts.len()) as u64))
    }
}

#[async_trait]
impl VolunteerRequestRepository for InMemoryStore {
    async fn apply(&self, request: &NewVolunteerRequest) -> Result<ApplyOutcome, DomainError> {
        let mut inner = self.inner.write().await;

        let key = request.dedup_key();
        if inner
            .requests
            .iter()
            .any(|r| r.application.dedup_key() == key)
        {
            return Err(DomainError::duplicate_request());
        }

        let id = VolunteerRequestId::new();
        inner
            .requests
            .push(VolunteerRequest::new(id, request.clone()));

        let slot_claimed = match inner.post_mut(&request.post_id) {
            Some(post) => {
                post.content.volunteers_needed -= 1;
                true
            }
            None => false,
        };

        Ok(ApplyOutcome {
            insert: InsertOneResult::new(*id.as_uuid()),
            slot_claimed,
        })
    }

    async fn find(
        &self,
        volunteer_email: Option<&str>,
    ) -> Result<Vec<VolunteerRequest>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner
            .requests
            .iter()
            .filter(|r| volunteer_email.map_or(true, |email| r.volunteer_email() == email))
            .cloned()
            .collect())
    }

    async fn delete(&self, id: &VolunteerRequestId) -> Result<DeleteResult, DomainError> {
        let mut inner = self.inner.write().await;
        let before = inner.requests.len();
        inner.requests.retain(|r| r.id != *id);
        Ok(DeleteResult::new((before - inner.requests.len()) as u64))
    }
}
