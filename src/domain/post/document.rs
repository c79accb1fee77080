//! Post documents and partial updates.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::foundation::{DomainError, PostId};

/// Field names the store assigns and callers may not set.
const RESERVED_FIELDS: &[&str] = &["_id"];

/// A help post as stored and returned to clients.
///
/// Serialized flat, so the store id appears next to the content fields as
/// `_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: PostId,

    #[serde(flatten)]
    pub content: PostContent,
}

impl Post {
    pub fn new(id: PostId, content: PostContent) -> Self {
        Self { id, content }
    }
}

/// Everything about a post except its id.
///
/// Known fields are typed; anything else the organizer sends is kept
/// verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostContent {
    #[serde(rename = "post_title")]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "organizerEmail")]
    pub organizer_email: String,

    /// ISO-8601 timestamp; ordering is lexicographic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,

    /// Remaining open slots. Required on create. Not clamped: it can go
    /// negative when more volunteers apply than were asked for.
    pub volunteers_needed: i64,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PostContent {
    /// Presence check for the fields every post must carry.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::validation("post_title", "post_title is required"));
        }
        if self.organizer_email.trim().is_empty() {
            return Err(DomainError::validation(
                "organizerEmail",
                "organizerEmail is required",
            ));
        }
        Ok(())
    }

    /// Drops store-owned keys that arrived as free-form fields.
    pub fn strip_reserved(mut self) -> Self {
        strip_reserved(&mut self.extra);
        self
    }
}

/// Field-level merge applied by `PUT /posts/:id`.
///
/// Absent (or `null`) fields leave the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PostPatch {
    #[serde(rename = "post_title", default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(rename = "organizerEmail", default)]
    pub organizer_email: Option<String>,

    #[serde(default)]
    pub deadline: Option<String>,

    #[serde(default)]
    pub volunteers_needed: Option<i64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PostPatch {
    /// Merges the patch into `content`, returning whether anything changed.
    pub fn apply_to(&self, content: &mut PostContent) -> bool {
        let mut modified = false;

        if let Some(title) = &self.title {
            modified |= replace(&mut content.title, title.clone());
        }
        if let Some(description) = &self.description {
            modified |= replace(&mut content.description, Some(description.clone()));
        }
        if let Some(email) = &self.organizer_email {
            modified |= replace(&mut content.organizer_email, email.clone());
        }
        if let Some(deadline) = &self.deadline {
            modified |= replace(&mut content.deadline, Some(deadline.clone()));
        }
        if let Some(needed) = self.volunteers_needed {
            modified |= replace(&mut content.volunteers_needed, needed);
        }
        for (key, value) in &self.extra {
            if RESERVED_FIELDS.contains(&key.as_str()) {
                continue;
            }
            if content.extra.get(key) != Some(value) {
                content.extra.insert(key.clone(), value.clone());
                modified = true;
            }
        }

        modified
    }

    /// Builds a full post from the patch, for upserts that miss.
    pub fn into_content(self) -> Result<PostContent, DomainError> {
        let content = PostContent {
            title: self.title.unwrap_or_default(),
            description: self.description,
            organizer_email: self.organizer_email.unwrap_or_default(),
            deadline: self.deadline,
            volunteers_needed: self.volunteers_needed.unwrap_or_default(),
            extra: self.extra,
        }
        .strip_reserved();
        content.validate()?;
        Ok(content)
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

fn strip_reserved(extra: &mut Map<String, Value>) {
    for key in RESERVED_FIELDS {
        extra.remove(*key);
    }
}
