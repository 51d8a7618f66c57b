use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::time::timeout;
use tracing::{info, warn};

use crate::application::ports::{BlobStore, ItemRepository};
use crate::application::use_cases::DEFAULT_IO_TIMEOUT;
use crate::domain::value_objects::{BlobKey, ItemId};

#[derive(Debug, Error)]
pub enum DeleteError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Storage failure: {0}")]
    StorageFailure(String),

    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("Persist failure: {0}")]
    PersistFailure(String),
}

/// Use case: Delete a blob and then the item row that references it
///
/// The blob is removed first. A blob that was already gone counts as a
/// storage failure and the row is left untouched. Nothing checks that the
/// row's url actually points at the named blob.
pub struct DeleteItemWithBlobUseCase {
    item_repo: Arc<dyn ItemRepository>,
    blob_store: Arc<dyn BlobStore>,
    io_timeout: Duration,
}

impl DeleteItemWithBlobUseCase {
    pub fn new(item_repo: Arc<dyn ItemRepository>, blob_store: Arc<dyn BlobStore>) -> Self {
        Self {
            item_repo,
            blob_store,
            io_timeout: DEFAULT_IO_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, io_timeout: Duration) -> Self {
        self.io_timeout = io_timeout;
        self
    }

    /// Execute combined delete
    pub async fn execute(&self, blob_name: &str, id: ItemId) -> Result<(), DeleteError> {
        let key = BlobKey::parse(blob_name).map_err(|e| DeleteError::InvalidRequest(e.to_string()))?;

        // 1. Blob first
        match timeout(self.io_timeout, self.blob_store.delete_if_exists(&key)).await {
            Ok(Ok(true)) => {}
            Ok(Ok(false)) => {
                return Err(DeleteError::StorageFailure("An error has occured.".to_string()))
            }
            Ok(Err(e)) => return Err(DeleteError::StorageFailure(e.to_string())),
            Err(_) => {
                return Err(DeleteError::StorageFailure(format!(
                    "Blob delete timed out after {:?}",
                    self.io_timeout
                )))
            }
        }

        // 2. Then the row
        let item = match timeout(self.io_timeout, self.item_repo.get(id)).await {
            Ok(Ok(Some(item))) => item,
            Ok(Ok(None)) => {
                warn!(key = %key, item_id = id.value(), "Blob deleted but item row does not exist");
                return Err(DeleteError::NotFound(id.to_string()));
            }
            Ok(Err(e)) => return Err(DeleteError::PersistFailure(e.to_string())),
            Err(_) => {
                return Err(DeleteError::PersistFailure(format!(
                    "Database read timed out after {:?}",
                    self.io_timeout
                )))
            }
        };

        match timeout(self.io_timeout, self.item_repo.delete(&item)).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                warn!(key = %key, item_id = id.value(), error = %e, "Blob deleted but row removal failed");
                return Err(DeleteError::PersistFailure(e.to_string()));
            }
            Err(_) => {
                warn!(key = %key, item_id = id.value(), "Blob deleted but row removal timed out");
                return Err(DeleteError::PersistFailure(format!(
                    "Database write timed out after {:?}",
                    self.io_timeout
                )));
            }
        }

        info!(key = %key, item_id = id.value(), "Item and blob deleted");

        Ok(())
    }
}
