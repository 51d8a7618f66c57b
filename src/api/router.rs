use axum::{
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;

use crate::api::handlers::{
    create_item_handler, delete_item_handler, delete_with_blob_handler, find_by_tag_handler,
    get_item_handler, health_handler, list_items_handler, list_tags_handler, readiness_handler,
    update_item_handler, upload_handler,
};
use crate::api::middleware::{cors, metrics};
use crate::api::openapi::swagger_ui;
use crate::application::use_cases::{
    CreateItemUseCase, DeleteItemUseCase, DeleteItemWithBlobUseCase, FindItemsByTagUseCase,
    GetItemUseCase, ListItemsUseCase, ListTagsUseCase, UpdateItemUseCase, UploadItemUseCase,
};

/// Application state container
#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<PgPool>,
    pub list_use_case: Arc<ListItemsUseCase>,
    pub get_use_case: Arc<GetItemUseCase>,
    pub create_use_case: Arc<CreateItemUseCase>,
    pub update_use_case: Arc<UpdateItemUseCase>,
    pub delete_use_case: Arc<DeleteItemUseCase>,
    pub upload_use_case: Arc<UploadItemUseCase>,
    pub delete_with_blob_use_case: Arc<DeleteItemWithBlobUseCase>,
    pub list_tags_use_case: Arc<ListTagsUseCase>,
    pub find_by_tag_use_case: Arc<FindItemsByTagUseCase>,
    /// Largest accepted request body, in bytes
    pub max_upload_bytes: usize,
    /// Comma-separated CORS origins
    pub allowed_origins: String,
}

/// Create router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health checks
        .route("/health", get(health_handler))
        .route(
            "/health/ready",
            get(readiness_handler).with_state(Arc::clone(&state.pool)),
        )
        // Items
        .route(
            "/api/example",
            get(list_items_handler).with_state(Arc::clone(&state.list_use_case)),
        )
        .route(
            "/api/example",
            post(create_item_handler).with_state(Arc::clone(&state.create_use_case)),
        )
        .route(
            "/api/example/{id}",
            get(get_item_handler).with_state(Arc::clone(&state.get_use_case)),
        )
        .route(
            "/api/example/{id}",
            put(update_item_handler).with_state(Arc::clone(&state.update_use_case)),
        )
        .route(
            "/api/example/{id}",
            delete(delete_item_handler).with_state(Arc::clone(&state.delete_use_case)),
        )
        // Tags (static segments win over `{id}`)
        .route(
            "/api/example/tags",
            get(list_tags_handler).with_state(Arc::clone(&state.list_tags_use_case)),
        )
        .route(
            "/api/example/tag",
            get(find_by_tag_handler).with_state(Arc::clone(&state.find_by_tag_use_case)),
        )
        // Blob-backed operations
        .route(
            "/api/example/upload",
            post(upload_handler).with_state(Arc::clone(&state.upload_use_case)),
        )
        // First segment is the blob name; the parameter keeps the `{id}` name
        // because the router allows only one parameter name per position
        .route(
            "/api/example/{id}/{item_id}",
            delete(delete_with_blob_handler)
                .with_state(Arc::clone(&state.delete_with_blob_use_case)),
        )
        .merge(swagger_ui())
        .layer(RequestBodyLimitLayer::new(state.max_upload_bytes))
        .layer(DefaultBodyLimit::disable())
        .layer(cors::create_cors_layer(&state.allowed_origins))
        .layer(axum_middleware::from_fn(metrics::metrics_middleware))
}
