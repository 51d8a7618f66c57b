use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::application::errors::ItemUseCaseError;
use crate::application::ports::RepositoryError;
use crate::application::use_cases::{DeleteError, UploadError};

/// API error response
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message,
        }));

        (self.status, body).into_response()
    }
}

// Convert extractor rejections to API errors

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // Body read failures (e.g. over the size limit) keep their own status
            JsonRejection::BytesRejection(_) => {
                ApiError::new(rejection.status(), rejection.body_text())
            }
            _ => ApiError::bad_request(format!("Invalid request body: {}", rejection.body_text())),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::new(rejection.status(), rejection.body_text())
    }
}

// Convert use case errors to API errors

impl From<UploadError> for ApiError {
    fn from(err: UploadError) -> Self {
        match err {
            UploadError::InvalidRequest(msg) => ApiError::bad_request(msg),
            // Anything past the content-type check is reported as a bad request with detail
            UploadError::StorageFailure(msg)
            | UploadError::DecodeFailure(msg)
            | UploadError::PersistFailure(msg) => {
                ApiError::bad_request(format!("An error has occured. Details: {}", msg))
            }
        }
    }
}

impl From<DeleteError> for ApiError {
    fn from(err: DeleteError) -> Self {
        match err {
            DeleteError::InvalidRequest(msg) => ApiError::bad_request(msg),
            DeleteError::StorageFailure(msg) => ApiError::bad_request(msg),
            DeleteError::NotFound(msg) => ApiError::not_found(format!("Item not found: {}", msg)),
            DeleteError::PersistFailure(msg) => {
                ApiError::internal_error(format!("Repository error: {}", msg))
            }
        }
    }
}

impl From<ItemUseCaseError> for ApiError {
    fn from(err: ItemUseCaseError) -> Self {
        match err {
            ItemUseCaseError::InvalidRequest(msg) => ApiError::bad_request(msg),
            ItemUseCaseError::NotFound(msg) => {
                ApiError::not_found(format!("Item not found: {}", msg))
            }
            ItemUseCaseError::Conflict(msg) => {
                ApiError::conflict(format!("Concurrent modification of item {}", msg))
            }
            ItemUseCaseError::Domain(e) => ApiError::bad_request(e.to_string()),
            ItemUseCaseError::Repository(RepositoryError::NotFound(msg)) => {
                ApiError::not_found(format!("Item not found: {}", msg))
            }
            ItemUseCaseError::Repository(e) => {
                ApiError::internal_error(format!("Repository error: {}", e))
            }
        }
    }
}
