use axum::{extract::State, response::Json};
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::api::extractors::BlobItemPath;
use crate::application::dto::MessageResponse;
use crate::application::use_cases::DeleteItemWithBlobUseCase;

/// DELETE /api/example/{blobName}/{id}
/// Delete a blob, then the item row
#[utoipa::path(
    delete,
    path = "/api/example/{blobName}/{id}",
    tag = "upload",
    params(
        ("blobName" = String, Path, description = "Blob key inside the container"),
        ("id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Blob and item deleted", body = MessageResponse),
        (status = 400, description = "Blob missing, malformed ID or storage failure"),
        (status = 404, description = "Blob deleted but item not found"),
        (status = 500, description = "Blob deleted but item row could not be removed")
    )
)]
pub async fn delete_with_blob_handler(
    State(use_case): State<Arc<DeleteItemWithBlobUseCase>>,
    BlobItemPath { blob_name, id }: BlobItemPath,
) -> Result<Json<MessageResponse>, ApiError> {
    use_case.execute(&blob_name, id).await?;

    Ok(Json(MessageResponse {
        message: format!("File: {} has successfully deleted", blob_name),
    }))
}
