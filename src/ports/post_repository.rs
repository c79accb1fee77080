//! Post repository port.
//!
//! Document-style access to the `posts` collection. Implementations assign
//! ids on insert and never fail on a missing id: lookups return `None`,
//! deletes and updates report zero counts.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, PostId};
use crate::domain::post::{Post, PostContent, PostPatch, PostQuery};

use super::{DeleteResult, InsertOneResult, UpdateResult};

/// Repository port for the `posts` collection.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a new post and return its assigned id.
    async fn insert(&self, content: &PostContent) -> Result<InsertOneResult, DomainError>;

    /// List posts matching `query`, in the order it requests.
    async fn find(&self, query: &PostQuery) -> Result<Vec<Post>, DomainError>;

    /// Find a post by id.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, DomainError>;

    /// Merge `patch` into the post with `id`.
    ///
    /// When nothing matches and `upsert` is set, a post is created under
    /// `id` from the patch alone.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if an upsert lacks the fields a new post needs
    /// - `DatabaseError` on persistence failure
    async fn update(
        &self,
        id: &PostId,
        patch: &PostPatch,
        upsert: bool,
    ) -> Result<UpdateResult, DomainError>;

    /// Delete the post with `id`.
    async fn delete(&self, id: &PostId) -> Result<DeleteResult, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn PostRepository) {}
    }
}
