//! Translation of domain errors into HTTP responses.
//!
//! Every handler funnels its `DomainError` through `domain_error_response`,
//! so status codes and bodies are decided in one place.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Standard JSON error body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn from_domain(error: &DomainError) -> Self {
        let details = (!error.details.is_empty()).then(|| {
            serde_json::Value::Object(
                error
                    .details
                    .iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
                    .collect(),
            )
        });

        Self {
            code: error.code.to_string(),
            message: error.message.clone(),
            details,
        }
    }

    pub fn invalid_id(raw: &str) -> Self {
        Self {
            code: ErrorCode::InvalidId.to_string(),
            message: format!("Invalid id: {}", raw),
            details: None,
        }
    }
}

/// Maps a domain error to its HTTP response.
pub fn domain_error_response(error: DomainError) -> Response {
    match error.code {
        // The web client shows this text verbatim.
        ErrorCode::DuplicateRequest => (StatusCode::BAD_REQUEST, error.message).into_response(),
        ErrorCode::Forbidden => (
            StatusCode::FORBIDDEN,
            Json(serde_json::json!({ "message": "forbidden access" })),
        )
            .into_response(),
        ErrorCode::ValidationFailed | ErrorCode::InvalidId => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::from_domain(&error)),
        )
            .into_response(),
        ErrorCode::DatabaseError => {
            tracing::error!(code = %error.code, "{}", error.message);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::from_domain(&error)),
            )
                .into_response()
        }
    }
}

/// 400 response for a path id that is not a UUID.
pub fn invalid_id_response(raw: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::invalid_id(raw))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn duplicate_request_is_plain_text_400() {
        let response = domain_error_response(DomainError::duplicate_request());
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
        assert_eq!(
            body_string(response).await,
            "You have already requested on this post!"
        );
    }

    #[tokio::test]
    async fn forbidden_uses_message_body() {
        let response = domain_error_response(DomainError::forbidden());
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(body_string(response).await, r#"{"message":"forbidden access"}"#);
    }

    #[tokio::test]
    async fn validation_error_is_400_with_code() {
        let response = domain_error_response(DomainError::validation("post_title", "required"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["code"], "VALIDATION_FAILED");
        assert_eq!(body["details"]["field"], "post_title");
    }

    #[tokio::test]
    async fn database_error_is_500() {
        let response = domain_error_response(DomainError::database("Failed to list posts", "boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["code"], "DATABASE_ERROR");
    }

    #[test]
    fn invalid_id_is_400() {
        let response = invalid_id_response("not-a-uuid");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
