use bytes::Bytes;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::time::timeout;
use tracing::{info, warn};

use crate::application::dto::{ItemDto, UploadItemRequest};
use crate::application::ports::{BlobStore, ItemRepository};
use crate::application::use_cases::DEFAULT_IO_TIMEOUT;
use crate::application::validation::ensure_multipart;
use crate::domain::entities::NewItem;
use crate::domain::value_objects::{BlobKey, ImageDimensions};

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Storage failure: {0}")]
    StorageFailure(String),

    #[error("Decode failure: {0}")]
    DecodeFailure(String),

    #[error("Persist failure: {0}")]
    PersistFailure(String),
}

/// Use case: Upload an image and record its metadata
///
/// The blob is always written before the row. There is no transaction
/// spanning both stores: if decoding or persisting fails after the blob
/// write, the blob stays in the store with no row pointing at it.
pub struct UploadItemUseCase {
    item_repo: Arc<dyn ItemRepository>,
    blob_store: Arc<dyn BlobStore>,
    io_timeout: Duration,
}

impl UploadItemUseCase {
    pub fn new(item_repo: Arc<dyn ItemRepository>, blob_store: Arc<dyn BlobStore>) -> Self {
        Self {
            item_repo,
            blob_store,
            io_timeout: DEFAULT_IO_TIMEOUT,
        }
    }

    /// Bound each store call by `io_timeout`
    pub fn with_timeout(mut self, io_timeout: Duration) -> Self {
        self.io_timeout = io_timeout;
        self
    }

    /// Execute upload workflow
    pub async fn execute(
        &self,
        request: UploadItemRequest,
        data: Bytes,
    ) -> Result<ItemDto, UploadError> {
        // 1. Must be a multipart request before any storage I/O
        ensure_multipart(request.content_type.as_deref()).map_err(UploadError::InvalidRequest)?;

        // 2. Fresh storage key, keeping the original extension
        let key = BlobKey::generate(&request.file_name);
        let start = Instant::now();

        // 3. Write blob; no row is created unless the store confirms an address
        let url = match timeout(self.io_timeout, self.blob_store.put(&key, data.clone())).await {
            Ok(Ok(url)) if !url.trim().is_empty() => url,
            Ok(Ok(_)) => {
                return Err(UploadError::StorageFailure(
                    "An error has occured while uploading your file. Please try again."
                        .to_string(),
                ))
            }
            Ok(Err(e)) => return Err(UploadError::StorageFailure(e.to_string())),
            Err(_) => {
                return Err(UploadError::StorageFailure(format!(
                    "Blob upload timed out after {:?}",
                    self.io_timeout
                )))
            }
        };

        // 4. Dimensions come from the bytes we just stored
        let dimensions = ImageDimensions::read(&data).map_err(|e| {
            warn!(key = %key, url = %url, error = %e, "Image decode failed; uploaded blob left without a row");
            UploadError::DecodeFailure(e.to_string())
        })?;

        // 5. Build the record
        let new_item = NewItem::from_upload(request.title, request.tags, url, dimensions);

        // 6. Persist
        let item = match timeout(self.io_timeout, self.item_repo.create(new_item)).await {
            Ok(Ok(item)) => item,
            Ok(Err(e)) => {
                warn!(key = %key, error = %e, "Persisting item failed; uploaded blob left without a row");
                return Err(UploadError::PersistFailure(e.to_string()));
            }
            Err(_) => {
                warn!(key = %key, "Persisting item timed out; uploaded blob left without a row");
                return Err(UploadError::PersistFailure(format!(
                    "Database write timed out after {:?}",
                    self.io_timeout
                )));
            }
        };

        info!(
            item_id = item.id().value(),
            key = %key,
            width = dimensions.width,
            height = dimensions.height,
            duration_ms = start.elapsed().as_millis(),
            "Item uploaded"
        );

        // 7. Return DTO
        Ok(ItemDto::from(item))
    }
}
