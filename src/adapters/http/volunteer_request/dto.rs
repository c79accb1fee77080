//! Request bodies for volunteer request endpoints.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::foundation::PostId;
use crate::domain::volunteer_request::NewVolunteerRequest;

/// Body of `POST /requests`.
///
/// Older clients send the target post as `requestId`; it is accepted when
/// `postId` is absent.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRequestBody {
    #[serde(rename = "volunteerEmail")]
    pub volunteer_email: String,

    #[serde(rename = "postId", default)]
    pub post_id: Option<String>,

    #[serde(rename = "requestId", default)]
    pub request_id: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Why a body could not become a `NewVolunteerRequest`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateRequestBodyError {
    MissingPostId,
    InvalidPostId(String),
}

impl CreateRequestBody {
    pub fn into_request(self) -> Result<NewVolunteerRequest, CreateRequestBodyError> {
        let raw = self
            .post_id
            .or(self.request_id)
            .ok_or(CreateRequestBodyError::MissingPostId)?;
        let post_id = raw
            .parse::<PostId>()
            .map_err(|_| CreateRequestBodyError::InvalidPostId(raw.clone()))?;

        Ok(NewVolunteerRequest::new(self.volunteer_email, post_id).with_extra(self.extra))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> CreateRequestBody {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn post_id_is_used_and_extra_kept() {
        let id = PostId::new();
        let request = body(json!({
            "volunteerEmail": "v@x.com",
            "postId": id.to_string(),
            "suggestion": "bring gloves"
        }))
        .into_request()
        .unwrap();

        assert_eq!(request.post_id, id);
        assert_eq!(request.extra.get("suggestion"), Some(&json!("bring gloves")));
        assert!(!request.extra.contains_key("postId"));
    }

    #[test]
    fn legacy_request_id_is_accepted() {
        let id = PostId::new();
        let request = body(json!({ "volunteerEmail": "v@x.com", "requestId": id.to_string() }))
            .into_request()
            .unwrap();
        assert_eq!(request.post_id, id);
    }

    #[test]
    fn post_id_wins_over_request_id() {
        let id = PostId::new();
        let request = body(json!({
            "volunteerEmail": "v@x.com",
            "postId": id.to_string(),
            "requestId": PostId::new().to_string()
        }))
        .into_request()
        .unwrap();
        assert_eq!(request.post_id, id);
    }

    #[test]
    fn missing_post_reference_is_an_error() {
        let err = body(json!({ "volunteerEmail": "v@x.com" }))
            .into_request()
            .unwrap_err();
        assert_eq!(err, CreateRequestBodyError::MissingPostId);
    }

    #[test]
    fn malformed_post_id_is_an_error() {
        let err = body(json!({ "volunteerEmail": "v@x.com", "postId": "abc" }))
            .into_request()
            .unwrap_err();
        assert_eq!(err, CreateRequestBodyError::InvalidPostId("abc".to_string()));
    }

    #[test]
    fn client_supplied_id_is_dropped() {
        let request = body(json!({
            "_id": "forged",
            "volunteerEmail": "v@x.com",
            "postId": PostId::new().to_string()
        }))
        .into_request()
        .unwrap();
        assert!(!request.extra.contains_key("_id"));
    }
}
