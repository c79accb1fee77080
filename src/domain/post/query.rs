//! Post filtering and ordering.
//!
//! Both store adapters evaluate the same query; the in-memory store uses
//! `matches` and `sort_by_deadline` directly, the PostgreSQL store
//! translates them to SQL.

use super::Post;

/// Selection applied when listing posts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostQuery {
    /// Case-insensitive substring of the title.
    pub title_contains: Option<String>,

    /// Exact organizer email.
    pub organizer_email: Option<String>,

    pub order: PostOrder,
}

/// Result ordering for post listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PostOrder {
    /// Order in which posts were created.
    #[default]
    Insertion,
    /// Ascending deadline, posts without a deadline first.
    DeadlineAscending,
}

impl PostQuery {
    /// Public listing, optionally narrowed by a title search.
    ///
    /// A blank search term means no filter.
    pub fn search(term: Option<String>) -> Self {
        Self {
            title_contains: term.filter(|t| !t.is_empty()),
            organizer_email: None,
            order: PostOrder::DeadlineAscending,
        }
    }

    /// Posts created by one organizer, in creation order.
    pub fn by_organizer(email: impl Into<String>) -> Self {
        Self {
            title_contains: None,
            organizer_email: Some(email.into()),
            order: PostOrder::Insertion,
        }
    }

    pub fn matches(&self, post: &Post) -> bool {
        if let Some(term) = &self.title_contains {
            if !contains_ignore_case(&post.content.title, term) {
                return false;
            }
        }
        if let Some(email) = &self.organizer_email {
            if &post.content.organizer_email != email {
                return false;
            }
        }
        true
    }
}

/// Stable sort by ascending deadline; `None` sorts before any deadline.
pub fn sort_by_deadline(posts: &mut [Post]) {
    posts.sort_by(|a, b| a.content.deadline.cmp(&b.content.deadline));
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
