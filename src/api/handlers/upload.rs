use axum::{
    extract::{FromRequest, Multipart, Request, State},
    http::header,
    response::Json,
};
use bytes::Bytes;
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::application::dto::{UploadForm, UploadItemRequest, UploadResponse};
use crate::application::use_cases::UploadItemUseCase;
use crate::application::validation::{ensure_multipart, non_blank};

/// POST /api/example/upload
/// Upload an image with its title and tag
#[utoipa::path(
    post,
    path = "/api/example/upload",
    tag = "upload",
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Image stored and item created", body = UploadResponse),
        (status = 400, description = "Not multipart, missing image, or upload failed")
    )
)]
pub async fn upload_handler(
    State(use_case): State<Arc<UploadItemUseCase>>,
    request: Request,
) -> Result<Json<UploadResponse>, ApiError> {
    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    // Reject before touching the body
    ensure_multipart(content_type.as_deref()).map_err(ApiError::bad_request)?;

    let mut multipart = Multipart::from_request(request, &())
        .await
        .map_err(|e| ApiError::new(e.status(), e.body_text()))?;

    let mut title = None;
    let mut tags = None;
    let mut image: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::new(e.status(), e.body_text()))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("Title") => {
                title = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| ApiError::new(e.status(), e.body_text()))?,
                );
            }
            Some("Tags") => {
                tags = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| ApiError::new(e.status(), e.body_text()))?,
                );
            }
            Some("Image") => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::new(e.status(), e.body_text()))?;
                image = Some((file_name, data));
            }
            _ => {}
        }
    }

    let (file_name, data) =
        image.ok_or_else(|| ApiError::bad_request("Multipart field 'Image' is required"))?;

    // Blank form values are stored as NULL
    let request = UploadItemRequest {
        title: non_blank(title),
        tags: non_blank(tags),
        file_name,
        content_type,
    };

    let item = use_case.execute(request, data).await?;

    Ok(Json(UploadResponse {
        message: format!(
            "File: {} has successfully uploaded",
            item.title.as_deref().unwrap_or_default()
        ),
        item,
    }))
}
