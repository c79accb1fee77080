//! Top-level router assembly.
//!
//! Merges the resource routers and wraps them in the CORS, timeout and
//! trace layers shared by every endpoint.

use std::sync::Arc;
use std::time::Duration;

use axum::http::{header::CONTENT_TYPE, HeaderValue, Method};
use axum::{routing::get, Router};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;

use crate::config::AppConfig;
use crate::ports::{PostRepository, SessionIssuer, SessionValidator, VolunteerRequestRepository};

use super::middleware::AuthState;
use super::post::{post_routes, PostHandlers};
use super::session::{session_routes, CookiePolicy, SessionHandlers};
use super::volunteer_request::{volunteer_request_routes, VolunteerRequestHandlers};

const LIVENESS_MESSAGE: &str = "HelpHive Server is running...";

/// Port implementations the router is built over.
#[derive(Clone)]
pub struct AppServices {
    pub posts: Arc<dyn PostRepository>,
    pub requests: Arc<dyn VolunteerRequestRepository>,
    pub session_validator: Arc<dyn SessionValidator>,
    pub session_issuer: Arc<dyn SessionIssuer>,
}

/// HTTP-facing settings derived from `AppConfig`.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    pub cookie_name: String,
    pub production: bool,
    pub cors_origins: Vec<String>,
    pub request_timeout: Duration,
}

impl RouterConfig {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            cookie_name: config.auth.cookie_name.clone(),
            production: config.is_production(),
            cors_origins: config.server.cors_origins_list(),
            request_timeout: Duration::from_secs(config.server.request_timeout_secs),
        }
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            cookie_name: "token".to_string(),
            production: false,
            cors_origins: Vec::new(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Builds the complete application router.
pub fn app_router(services: AppServices, config: &RouterConfig) -> Router {
    let auth = AuthState::new(services.session_validator, config.cookie_name.as_str());
    let cookies = CookiePolicy::new(config.cookie_name.clone(), config.production);

    let trace_layer = TraceLayer::new_for_http()
        .on_response(
            DefaultOnResponse::new()
                .include_headers(false)
                .latency_unit(LatencyUnit::Micros),
        )
        .on_failure(DefaultOnFailure::new().latency_unit(LatencyUnit::Micros));

    Router::new()
        .route("/", get(liveness))
        .merge(session_routes(SessionHandlers::new(
            services.session_issuer,
            cookies,
        )))
        .merge(post_routes(PostHandlers::new(services.posts), auth.clone()))
        .merge(volunteer_request_routes(
            VolunteerRequestHandlers::new(services.requests),
            auth,
        ))
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(cors_layer(&config.cors_origins))
        .layer(trace_layer)
}

/// GET / - Liveness probe
async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}

/// CORS for the configured web client origins, with cookies allowed.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use crate::adapters::auth::MockSessionCodec;
    use crate::adapters::memory::InMemoryStore;

    fn app() -> Router {
        let store = InMemoryStore::new();
        let codec = Arc::new(MockSessionCodec::new());
        let services = AppServices {
            posts: Arc::new(store.clone()),
            requests: Arc::new(store),
            session_validator: codec.clone(),
            session_issuer: codec,
        };
        let config = RouterConfig {
            cors_origins: vec!["http://localhost:5173".to_string()],
            ..Default::default()
        };
        app_router(services, &config)
    }

    #[tokio::test]
    async fn liveness_returns_banner() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], LIVENESS_MESSAGE.as_bytes());
    }

    #[tokio::test]
    async fn cors_allows_configured_origin_with_credentials() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/posts")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:5173"
        );
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_CREDENTIALS],
            "true"
        );
    }

    #[tokio::test]
    async fn cors_ignores_unknown_origin() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/posts")
                    .header(header::ORIGIN, "https://evil.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[test]
    fn router_config_reads_app_config() {
        let mut config = AppConfig {
            server: Default::default(),
            database: Default::default(),
            auth: Default::default(),
        };
        config.auth.cookie_name = "session".to_string();
        config.server.request_timeout_secs = 12;

        let router_config = RouterConfig::from_config(&config);
        assert_eq!(router_config.cookie_name, "session");
        assert_eq!(router_config.request_timeout, Duration::from_secs(12));
        assert_eq!(router_config.cors_origins.len(), 3);
        assert!(!router_config.production);
    }
}
