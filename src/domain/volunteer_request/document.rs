//! Volunteer request documents.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::foundation::{DomainError, PostId, VolunteerRequestId};

/// A stored volunteer request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolunteerRequest {
    #[serde(rename = "_id")]
    pub id: VolunteerRequestId,

    #[serde(flatten)]
    pub application: NewVolunteerRequest,
}

impl VolunteerRequest {
    pub fn new(id: VolunteerRequestId, application: NewVolunteerRequest) -> Self {
        Self { id, application }
    }

    pub fn post_id(&self) -> PostId {
        self.application.post_id
    }

    pub fn volunteer_email(&self) -> &str {
        &self.application.volunteer_email
    }
}

/// A volunteer's application before the store assigns it an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewVolunteerRequest {
    #[serde(rename = "volunteerEmail")]
    pub volunteer_email: String,

    /// The post being applied to.
    #[serde(rename = "postId")]
    pub post_id: PostId,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NewVolunteerRequest {
    pub fn new(volunteer_email: impl Into<String>, post_id: PostId) -> Self {
        Self {
            volunteer_email: volunteer_email.into(),
            post_id,
            extra: Map::new(),
        }
    }

    pub fn with_extra(mut self, extra: Map<String, Value>) -> Self {
        self.extra = extra;
        self.extra.remove("_id");
        self
    }

    /// Presence check on the volunteer identity.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.volunteer_email.trim().is_empty() {
            return Err(DomainError::validation(
                "volunteerEmail",
                "volunteerEmail is required",
            ));
        }
        Ok(())
    }

    /// Key under which duplicate applications collide.
    pub fn dedup_key(&self) -> (&str, PostId) {
        (&self.volunteer_email, self.post_id)
    }
}
