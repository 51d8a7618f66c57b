//! Request extractors that reject with the API's JSON error body
//!
//! axum's own `Json` and `Path` extractors answer malformed input with a
//! plain-text body. These wrappers route the rejection through [`ApiError`]
//! so every 4xx carries `{"error": ...}`.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::api::errors::ApiError;
use crate::application::errors::ItemUseCaseError;
use crate::domain::value_objects::ItemId;

/// JSON body extractor; invalid or mistyped bodies become a 400
#[derive(Debug, Clone, Copy)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(inner) = Json::<T>::from_request(req, state)
            .await
            .map_err(ApiError::from)?;
        Ok(ValidatedJson(inner))
    }
}

/// `{id}` path segment parsed as an [`ItemId`]
#[derive(Debug, Clone, Copy)]
pub struct ItemIdPath(pub ItemId);

impl<S> FromRequestParts<S> for ItemIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(ApiError::from)?;

        Ok(ItemIdPath(parse_item_id(&raw)?))
    }
}

/// `{blobName}/{id}` segments of the combined delete route
#[derive(Debug, Clone)]
pub struct BlobItemPath {
    pub blob_name: String,
    pub id: ItemId,
}

impl<S> FromRequestParts<S> for BlobItemPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path((blob_name, raw_id)) = Path::<(String, String)>::from_request_parts(parts, state)
            .await
            .map_err(ApiError::from)?;

        Ok(BlobItemPath {
            blob_name,
            id: parse_item_id(&raw_id)?,
        })
    }
}

fn parse_item_id(raw: &str) -> Result<ItemId, ApiError> {
    raw.parse::<ItemId>()
        .map_err(|e| ApiError::from(ItemUseCaseError::from(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, StatusCode},
        routing::{get, put},
        Router,
    };
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Debug, Deserialize)]
    struct EchoBody {
        name: String,
    }

    fn app() -> Router {
        Router::new()
            .route(
                "/items/{id}",
                get(|ItemIdPath(id): ItemIdPath| async move { id.value().to_string() }),
            )
            .route(
                "/echo",
                put(|ValidatedJson(body): ValidatedJson<EchoBody>| async move { body.name }),
            )
            .route(
                "/items/{id}/{item_id}",
                get(|path: BlobItemPath| async move {
                    format!("{}:{}", path.blob_name, path.id.value())
                }),
            )
    }

    async fn call(request: Request) -> (StatusCode, String) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn get_request(uri: &str) -> Request {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn put_json(body: &str) -> Request {
        Request::builder()
            .method("PUT")
            .uri("/echo")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn error_of(body: &str) -> String {
        let json: serde_json::Value = serde_json::from_str(body).unwrap();
        json["error"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_item_id_path_parses_number() {
        let (status, body) = call(get_request("/items/42")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "42");
    }

    #[tokio::test]
    async fn test_item_id_path_rejects_text_as_json() {
        let (status, body) = call(get_request("/items/abc")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(error_of(&body).starts_with("Invalid item ID: abc"));
    }

    #[tokio::test]
    async fn test_item_id_path_rejects_overflow() {
        let (status, body) = call(get_request("/items/99999999999")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(error_of(&body).contains("99999999999"));
    }

    #[tokio::test]
    async fn test_blob_item_path() {
        let (status, body) = call(get_request("/items/abc.png/7")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "abc.png:7");

        let (status, body) = call(get_request("/items/abc.png/seven")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(error_of(&body).starts_with("Invalid item ID"));
    }

    #[tokio::test]
    async fn test_validated_json_accepts_body() {
        let (status, body) = call(put_json(r#"{"name":"cat"}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "cat");
    }

    #[tokio::test]
    async fn test_validated_json_rejections_are_json() {
        for bad in [r#"{}"#, r#"{"name":5}"#, r#"{"name":"#] {
            let (status, body) = call(put_json(bad)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body {:?}", bad);
            assert!(error_of(&body).starts_with("Invalid request body"));
        }
    }

    #[tokio::test]
    async fn test_validated_json_without_content_type() {
        let request = Request::builder()
            .method("PUT")
            .uri("/echo")
            .body(Body::from(r#"{"name":"cat"}"#))
            .unwrap();

        let (status, body) = call(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(error_of(&body).contains("Content-Type"));
    }
}
