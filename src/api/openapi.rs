use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers::health::{HealthResponse, ReadinessResponse};
use crate::application::dto::{ItemDto, ItemPayload, MessageResponse, UploadForm, UploadResponse};

/// OpenAPI document for the image catalog API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Image Catalog API",
        version = "1.0.0",
        description = "Image metadata records backed by a blob store"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        crate::api::handlers::health::health_handler,
        crate::api::handlers::health::readiness_handler,
        crate::api::handlers::items::list_items_handler,
        crate::api::handlers::items::get_item_handler,
        crate::api::handlers::items::create_item_handler,
        crate::api::handlers::items::update_item_handler,
        crate::api::handlers::items::delete_item_handler,
        crate::api::handlers::tags::list_tags_handler,
        crate::api::handlers::tags::find_by_tag_handler,
        crate::api::handlers::upload::upload_handler,
        crate::api::handlers::delete::delete_with_blob_handler,
    ),
    components(
        schemas(
            ItemDto,
            ItemPayload,
            UploadForm,
            UploadResponse,
            MessageResponse,
            HealthResponse,
            ReadinessResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "items", description = "Item metadata CRUD"),
        (name = "tags", description = "Tag queries"),
        (name = "upload", description = "Operations touching the blob store")
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI route
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_item_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/api/example",
            "/api/example/{id}",
            "/api/example/upload",
            "/api/example/{blobName}/{id}",
            "/api/example/tags",
            "/api/example/tag",
            "/health",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing path {}",
                expected
            );
        }
    }
}
