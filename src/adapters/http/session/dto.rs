//! Request and response bodies for session endpoints.

use serde::{Deserialize, Serialize};

/// Body of `POST /jwt`. Other identity fields the client sends are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueTokenRequest {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueTokenResponse {
    pub status: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl IssueTokenResponse {
    pub fn issued() -> Self {
        Self {
            status: true,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            status: false,
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogoutResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_ignores_extra_identity_fields() {
        let req: IssueTokenRequest =
            serde_json::from_value(json!({ "email": "a@x.com", "name": "A" })).unwrap();
        assert_eq!(req.email, "a@x.com");
    }

    #[test]
    fn issued_response_omits_error() {
        let json = serde_json::to_value(IssueTokenResponse::issued()).unwrap();
        assert_eq!(json, json!({ "status": true }));
    }

    #[test]
    fn failed_response_carries_error() {
        let json = serde_json::to_value(IssueTokenResponse::failed("bad key")).unwrap();
        assert_eq!(json, json!({ "status": false, "error": "bad key" }));
    }
}
