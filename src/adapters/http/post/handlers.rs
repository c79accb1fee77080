//! HTTP handlers for post endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{domain_error_response, invalid_id_response};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::post::{
    CreatePostCommand, CreatePostHandler, DeletePostCommand, DeletePostHandler, GetPostHandler,
    GetPostQuery, ListOrganizerPostsHandler, ListOrganizerPostsQuery, ListPostsHandler,
    ListPostsQuery, UpdatePostCommand, UpdatePostHandler,
};
use crate::domain::foundation::PostId;
use crate::domain::post::{PostContent, PostPatch};
use crate::ports::PostRepository;

use super::dto::{SearchQuery, UpdatePostQuery};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct PostHandlers {
    create_handler: Arc<CreatePostHandler>,
    list_handler: Arc<ListPostsHandler>,
    get_handler: Arc<GetPostHandler>,
    list_organizer_handler: Arc<ListOrganizerPostsHandler>,
    update_handler: Arc<UpdatePostHandler>,
    delete_handler: Arc<DeletePostHandler>,
}

impl PostHandlers {
    /// Builds every post handler over one repository.
    pub fn new(repository: Arc<dyn PostRepository>) -> Self {
        Self {
            create_handler: Arc::new(CreatePostHandler::new(repository.clone())),
            list_handler: Arc::new(ListPostsHandler::new(repository.clone())),
            get_handler: Arc::new(GetPostHandler::new(repository.clone())),
            list_organizer_handler: Arc::new(ListOrganizerPostsHandler::new(repository.clone())),
            update_handler: Arc::new(UpdatePostHandler::new(repository.clone())),
            delete_handler: Arc::new(DeletePostHandler::new(repository)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /posts - Publish a post
pub async fn create_post(
    State(handlers): State<PostHandlers>,
    Json(content): Json<PostContent>,
) -> Response {
    match handlers
        .create_handler
        .handle(CreatePostCommand { content })
        .await
    {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /posts - List posts, optionally filtered by title
pub async fn list_posts(
    State(handlers): State<PostHandlers>,
    Query(query): Query<SearchQuery>,
) -> Response {
    let query = ListPostsQuery {
        search: query.search,
    };

    match handlers.list_handler.handle(query).await {
        Ok(posts) => (StatusCode::OK, Json(posts)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /posts/:id - Get one post, `null` when absent
pub async fn get_post(State(handlers): State<PostHandlers>, Path(id): Path<String>) -> Response {
    let Ok(id) = id.parse::<PostId>() else {
        return invalid_id_response(&id);
    };

    match handlers.get_handler.handle(GetPostQuery { id }).await {
        Ok(post) => (StatusCode::OK, Json(post)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /post/:email - List the caller's own posts
pub async fn list_organizer_posts(
    State(handlers): State<PostHandlers>,
    RequireAuth(user): RequireAuth,
    Path(email): Path<String>,
) -> Response {
    let query = ListOrganizerPostsQuery {
        organizer_email: email,
        requester: user,
    };

    match handlers.list_organizer_handler.handle(query).await {
        Ok(posts) => (StatusCode::OK, Json(posts)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// PUT /posts/:id - Merge fields into a post
pub async fn update_post(
    State(handlers): State<PostHandlers>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
    Query(options): Query<UpdatePostQuery>,
    Json(patch): Json<PostPatch>,
) -> Response {
    let Ok(id) = id.parse::<PostId>() else {
        return invalid_id_response(&id);
    };

    tracing::debug!(post_id = %id, editor = %user.email, upsert = options.upsert, "Updating post");
    let cmd = UpdatePostCommand {
        id,
        patch,
        upsert: options.upsert,
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// DELETE /post/:id - Delete a post
pub async fn delete_post(State(handlers): State<PostHandlers>, Path(id): Path<String>) -> Response {
    let Ok(id) = id.parse::<PostId>() else {
        return invalid_id_response(&id);
    };

    match handlers.delete_handler.handle(DeletePostCommand { id }).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => domain_error_response(e),
    }
}
