use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::api::extractors::{ItemIdPath, ValidatedJson};
use crate::application::dto::{ItemDto, ItemPayload};
use crate::application::use_cases::{
    CreateItemUseCase, DeleteItemUseCase, GetItemUseCase, ListItemsUseCase, UpdateItemUseCase,
};

/// GET /api/example
#[utoipa::path(
    get,
    path = "/api/example",
    tag = "items",
    responses(
        (status = 200, description = "All items", body = [ItemDto]),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_items_handler(
    State(use_case): State<Arc<ListItemsUseCase>>,
) -> Result<Json<Vec<ItemDto>>, ApiError> {
    Ok(Json(use_case.execute().await?))
}

/// GET /api/example/{id}
#[utoipa::path(
    get,
    path = "/api/example/{id}",
    tag = "items",
    params(("id" = i32, Path, description = "Item ID")),
    responses(
        (status = 200, description = "Item found", body = ItemDto),
        (status = 400, description = "ID is not a number"),
        (status = 404, description = "Item not found")
    )
)]
pub async fn get_item_handler(
    State(use_case): State<Arc<GetItemUseCase>>,
    ItemIdPath(id): ItemIdPath,
) -> Result<Json<ItemDto>, ApiError> {
    Ok(Json(use_case.execute(id).await?))
}

/// POST /api/example
/// Insert a record as given; no blob is written
#[utoipa::path(
    post,
    path = "/api/example",
    tag = "items",
    request_body = ItemPayload,
    responses(
        (status = 201, description = "Item created", body = ItemDto),
        (status = 400, description = "Malformed body or validation failure")
    )
)]
pub async fn create_item_handler(
    State(use_case): State<Arc<CreateItemUseCase>>,
    ValidatedJson(payload): ValidatedJson<ItemPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let item = use_case.execute(payload).await?;
    let location = format!("/api/example/{}", item.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(item),
    ))
}

/// PUT /api/example/{id}
/// Replace a record in full
#[utoipa::path(
    put,
    path = "/api/example/{id}",
    tag = "items",
    params(("id" = i32, Path, description = "Item ID; must equal the body ID")),
    request_body = ItemPayload,
    responses(
        (status = 204, description = "Item replaced"),
        (status = 400, description = "Malformed ID or body, ID mismatch or validation failure"),
        (status = 404, description = "Item not found"),
        (status = 409, description = "Concurrent modification")
    )
)]
pub async fn update_item_handler(
    State(use_case): State<Arc<UpdateItemUseCase>>,
    ItemIdPath(id): ItemIdPath,
    ValidatedJson(payload): ValidatedJson<ItemPayload>,
) -> Result<StatusCode, ApiError> {
    use_case.execute(id, payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/example/{id}
/// Delete the row only; the blob it points at stays in the store
#[utoipa::path(
    delete,
    path = "/api/example/{id}",
    tag = "items",
    params(("id" = i32, Path, description = "Item ID")),
    responses(
        (status = 200, description = "Deleted record", body = ItemDto),
        (status = 400, description = "ID is not a number"),
        (status = 404, description = "Item not found")
    )
)]
pub async fn delete_item_handler(
    State(use_case): State<Arc<DeleteItemUseCase>>,
    ItemIdPath(id): ItemIdPath,
) -> Result<Json<ItemDto>, ApiError> {
    Ok(Json(use_case.execute(id).await?))
}
