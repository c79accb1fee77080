//! HTTP handlers for volunteer request endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{domain_error_response, invalid_id_response, ErrorResponse};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::volunteer_request::{
    ApplyToPostCommand, ApplyToPostHandler, DeleteRequestCommand, DeleteRequestHandler,
    ListRequestsHandler, ListRequestsQuery, ListVolunteerRequestsHandler,
    ListVolunteerRequestsQuery,
};
use crate::domain::foundation::{ErrorCode, VolunteerRequestId};
use crate::ports::VolunteerRequestRepository;

use super::dto::{CreateRequestBody, CreateRequestBodyError};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct VolunteerRequestHandlers {
    apply_handler: Arc<ApplyToPostHandler>,
    list_handler: Arc<ListRequestsHandler>,
    list_volunteer_handler: Arc<ListVolunteerRequestsHandler>,
    delete_handler: Arc<DeleteRequestHandler>,
}

impl VolunteerRequestHandlers {
    pub fn new(repository: Arc<dyn VolunteerRequestRepository>) -> Self {
        Self {
            apply_handler: Arc::new(ApplyToPostHandler::new(repository.clone())),
            list_handler: Arc::new(ListRequestsHandler::new(repository.clone())),
            list_volunteer_handler: Arc::new(ListVolunteerRequestsHandler::new(repository.clone())),
            delete_handler: Arc::new(DeleteRequestHandler::new(repository)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /requests - Apply to a post
pub async fn create_request(
    State(handlers): State<VolunteerRequestHandlers>,
    Json(body): Json<CreateRequestBody>,
) -> Response {
    let request = match body.into_request() {
        Ok(request) => request,
        Err(CreateRequestBodyError::MissingPostId) => {
            let error = ErrorResponse {
                code: ErrorCode::ValidationFailed.to_string(),
                message: "postId is required".to_string(),
                details: None,
            };
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(error)).into_response();
        }
        Err(CreateRequestBodyError::InvalidPostId(raw)) => return invalid_id_response(&raw),
    };

    match handlers
        .apply_handler
        .handle(ApplyToPostCommand { request })
        .await
    {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /requests - List all requests
pub async fn list_requests(State(handlers): State<VolunteerRequestHandlers>) -> Response {
    match handlers.list_handler.handle(ListRequestsQuery).await {
        Ok(requests) => (StatusCode::OK, Json(requests)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /requests/:email - List the caller's own requests
pub async fn list_volunteer_requests(
    State(handlers): State<VolunteerRequestHandlers>,
    RequireAuth(user): RequireAuth,
    Path(email): Path<String>,
) -> Response {
    let query = ListVolunteerRequestsQuery {
        volunteer_email: email,
        requester: user,
    };

    match handlers.list_volunteer_handler.handle(query).await {
        Ok(requests) => (StatusCode::OK, Json(requests)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// DELETE /request/:id - Withdraw a request
pub async fn delete_request(
    State(handlers): State<VolunteerRequestHandlers>,
    Path(id): Path<String>,
) -> Response {
    let Ok(id) = id.parse::<VolunteerRequestId>() else {
        return invalid_id_response(&id);
    };

    match handlers.delete_handler.handle(DeleteRequestCommand { id }).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => domain_error_response(e),
    }
}
