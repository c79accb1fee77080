//! Query strings for post endpoints.
//!
//! Bodies map straight onto the domain documents (`PostContent` for
//! creation, `PostPatch` for updates), so no separate DTOs exist for them.

use serde::Deserialize;

/// `GET /posts?search=...`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub search: Option<String>,
}

/// `PUT /posts/:id?upsert=true`
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct UpdatePostQuery {
    #[serde(default)]
    pub upsert: bool,
}
