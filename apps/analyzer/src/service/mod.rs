// Reference analysis service: the HTTP side of the submission contract.
// POST /api/extract takes a multipart resume + job description and answers
// with `{data}` or `{error}`; skill matching is dictionary-based.

pub mod entities;
pub mod handlers;
pub mod health;
pub mod pdf;
pub mod skills;
pub mod state;

use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

pub use state::ServiceState;

pub fn build_router(state: ServiceState) -> Router {
    let cors = cors_layer(&state.config.frontend_origin);

    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/extract",
            post(handlers::handle_extract)
                .layer(DefaultBodyLimit::max(state.config.max_upload_bytes)),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

fn cors_layer(origin: &str) -> CorsLayer {
    let allow_origin = match origin.parse::<HeaderValue>() {
        Ok(value) => AllowOrigin::exact(value),
        Err(e) => {
            warn!("FRONTEND_ORIGIN '{origin}' is not a valid header value ({e}); allowing any origin");
            AllowOrigin::any()
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    use crate::config::{
        Config, DEFAULT_ANALYSIS_ENDPOINT, DEFAULT_FRONTEND_ORIGIN, DEFAULT_MAX_UPLOAD_BYTES,
    };

    fn router() -> Router {
        build_router(ServiceState::new(Config {
            analysis_endpoint: DEFAULT_ANALYSIS_ENDPOINT.to_string(),
            request_timeout: None,
            port: 8000,
            frontend_origin: DEFAULT_FRONTEND_ORIGIN.to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            rust_log: "info".to_string(),
        }))
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let response = router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_cors_allows_frontend_origin() {
        let response = router()
            .oneshot(
                Request::get("/health")
                    .header("origin", DEFAULT_FRONTEND_ORIGIN)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            response.headers()["access-control-allow-origin"],
            DEFAULT_FRONTEND_ORIGIN
        );
    }

    #[tokio::test]
    async fn test_extract_requires_post() {
        let response = router()
            .oneshot(Request::get("/api/extract").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
