use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// CORS layer for a comma-separated list of allowed origins
///
/// Unparseable entries are skipped; if nothing valid remains, any origin is
/// allowed.
pub fn create_cors_layer(allowed_origins: &str) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .filter_map(|origin| {
            let origin = origin.trim();
            if origin.is_empty() {
                None
            } else {
                origin.parse::<HeaderValue>().ok()
            }
        })
        .collect();

    let origins = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
            Method::HEAD,
        ])
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("x-request-id"),
        ])
        .allow_credentials(false)
        .max_age(std::time::Duration::from_secs(86400)) // 24 hours
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    async fn preflight(allowed: &str, origin: &str) -> axum::response::Response {
        let app = Router::new()
            .route("/api/example", get(|| async { "[]" }))
            .layer(create_cors_layer(allowed));

        app.oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/example")
                .header("origin", origin)
                .header("access-control-request-method", "GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_listed_origin_is_allowed() {
        let response = preflight(
            "https://app.example.com, http://localhost:3000",
            "http://localhost:3000",
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "http://localhost:3000"
        );
    }

    #[tokio::test]
    async fn test_unlisted_origin_gets_no_allow_header() {
        let response = preflight("https://app.example.com", "https://evil.example").await;

        assert!(response
            .headers()
            .get("access-control-allow-origin")
            .is_none());
    }

    #[tokio::test]
    async fn test_empty_list_allows_any_origin() {
        let response = preflight("", "https://anywhere.example").await;

        assert_eq!(response.headers()["access-control-allow-origin"], "*");
    }
}
