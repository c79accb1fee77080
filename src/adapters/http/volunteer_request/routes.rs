//! HTTP routes for volunteer request endpoints.

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};

use crate::adapters::http::middleware::{require_session, AuthState};

use super::handlers::{
    create_request, delete_request, list_requests, list_volunteer_requests,
    VolunteerRequestHandlers,
};

/// Creates the volunteer request router with all endpoints.
///
/// `auth` guards the volunteer-scoped listing.
pub fn volunteer_request_routes(handlers: VolunteerRequestHandlers, auth: AuthState) -> Router {
    let session = middleware::from_fn_with_state(auth, require_session);

    Router::new()
        .route("/requests", post(create_request).get(list_requests))
        .route(
            "/requests/:email",
            get(list_volunteer_requests).route_layer(session),
        )
        .route("/request/:id", delete(delete_request))
        .with_state(handlers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::adapters::auth::MockSessionCodec;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::foundation::PostId;
    use crate::domain::post::PostContent;
    use crate::ports::PostRepository;

    fn app(store: &InMemoryStore) -> Router {
        let codec = MockSessionCodec::new().with_user("vol-token", "v@x.com");
        volunteer_request_routes(
            VolunteerRequestHandlers::new(Arc::new(store.clone())),
            AuthState::new(Arc::new(codec), "token"),
        )
    }

    fn apply(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/requests")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    async fn seed_post(store: &InMemoryStore, needed: i64) -> PostId {
        let content: PostContent = serde_json::from_value(json!({
            "post_title": "Relief",
            "organizerEmail": "o@x.com",
            "volunteers_needed": needed
        }))
        .unwrap();
        PostId::from_uuid(store.insert(&content).await.unwrap().inserted_id)
    }

    #[tokio::test]
    async fn apply_then_duplicate() {
        let store = InMemoryStore::new();
        let post_id = seed_post(&store, 3).await;
        let body = json!({ "volunteerEmail": "v@x.com", "postId": post_id.to_string() });

        let response = app(&store).oneshot(apply(body.clone())).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app(&store).oneshot(apply(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_bytes(response).await,
            b"You have already requested on this post!".to_vec()
        );

        assert_eq!(store.request_count().await, 1);
        assert_eq!(
            store.find_by_id(&post_id).await.unwrap().unwrap().content.volunteers_needed,
            2
        );
    }

    #[tokio::test]
    async fn apply_with_legacy_field_name() {
        let store = InMemoryStore::new();
        let post_id = seed_post(&store, 1).await;

        let response = app(&store)
            .oneshot(apply(json!({ "volunteerEmail": "v@x.com", "requestId": post_id.to_string() })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn apply_without_post_reference_is_unprocessable() {
        let store = InMemoryStore::new();
        let response = app(&store)
            .oneshot(apply(json!({ "volunteerEmail": "v@x.com" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn volunteer_listing_requires_matching_session() {
        let store = InMemoryStore::new();
        let post_id = seed_post(&store, 5).await;
        for email in ["v@x.com", "w@x.com"] {
            app(&store)
                .oneshot(apply(json!({ "volunteerEmail": email, "postId": post_id.to_string() })))
                .await
                .unwrap();
        }

        let request = |uri: &str, cookie: Option<&str>| {
            let mut builder = Request::builder().uri(uri);
            if let Some(cookie) = cookie {
                builder = builder.header(header::COOKIE, cookie);
            }
            builder.body(Body::empty()).unwrap()
        };

        let response = app(&store).oneshot(request("/requests/v@x.com", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app(&store)
            .oneshot(request("/requests/w@x.com", Some("token=vol-token")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let response = app(&store)
            .oneshot(request("/requests/v@x.com", Some("token=vol-token")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["volunteerEmail"], "v@x.com");
        assert_eq!(body[0]["postId"], json!(post_id.to_string()));

        let response = app(&store).oneshot(request("/requests", None)).await.unwrap();
        let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn delete_unknown_request_reports_zero() {
        let store = InMemoryStore::new();
        let response = app(&store)
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/request/{}", PostId::new()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body["deletedCount"], 0);
    }
}
