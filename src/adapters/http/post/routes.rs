//! HTTP routes for post endpoints.

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};

use crate::adapters::http::middleware::{require_session, AuthState};

use super::handlers::{
    create_post, delete_post, get_post, list_organizer_posts, list_posts, update_post,
    PostHandlers,
};

/// Creates the post router with all endpoints.
///
/// `auth` guards the organizer listing and updates.
pub fn post_routes(handlers: PostHandlers, auth: AuthState) -> Router {
    let session = middleware::from_fn_with_state(auth, require_session);

    Router::new()
        .route("/posts", post(create_post).get(list_posts))
        .route(
            "/posts/:id",
            get(get_post).merge(put(update_post).route_layer(session.clone())),
        )
        // Organizer email for GET, post id for DELETE.
        .route(
            "/post/:key",
            get(list_organizer_posts)
                .route_layer(session)
                .merge(delete(delete_post)),
        )
        .with_state(handlers)
}
