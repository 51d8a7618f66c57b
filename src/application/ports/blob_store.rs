use async_trait::async_trait;
use bytes::Bytes;
#[cfg(test)]
use mockall::{automock, predicate::*};
use thiserror::Error;

use crate::domain::value_objects::BlobKey;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Port for blob object storage
///
/// Keys are flat object names inside a single container.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store `data` under `key` and return the durable URL of the object.
    async fn put(&self, key: &BlobKey, data: Bytes) -> Result<String, StorageError>;

    /// Delete the object if present.
    /// Returns `false` when there was nothing to delete.
    async fn delete_if_exists(&self, key: &BlobKey) -> Result<bool, StorageError>;
}
