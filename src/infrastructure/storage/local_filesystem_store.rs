use async_trait::async_trait;
use bytes::Bytes;
use std::path::PathBuf;
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::application::ports::{BlobStore, StorageError};
use crate::domain::value_objects::BlobKey;
use crate::infrastructure::storage::PathBuilder;

/// Local filesystem blob store
///
/// Objects live flat under `{root}/objects/{key}` and are addressed
/// publicly as `{base_url}/{key}`.
pub struct LocalFilesystemStore {
    path_builder: PathBuilder,
    base_url: String,
    durable_writes: bool,
}

impl LocalFilesystemStore {
    pub fn new(root: PathBuf, base_url: impl Into<String>) -> Self {
        Self::with_durability(root, base_url, true)
    }

    pub fn with_durability(root: PathBuf, base_url: impl Into<String>, durable_writes: bool) -> Self {
        Self {
            path_builder: PathBuilder::new(root),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            durable_writes,
        }
    }

    /// Initialize storage directories
    pub async fn init(&self) -> Result<(), StorageError> {
        fs::create_dir_all(self.path_builder.temp_dir()).await?;
        fs::create_dir_all(self.path_builder.objects_dir()).await?;
        info!(root = ?self.path_builder.root(), "Local blob store initialized");
        Ok(())
    }

    fn url_for(&self, key: &BlobKey) -> String {
        format!("{}/{}", self.base_url, key)
    }

    async fn write_temp(&self, temp_path: &PathBuf, data: &Bytes) -> Result<(), std::io::Error> {
        let mut file = File::create(temp_path).await?;
        file.write_all(data).await?;
        file.flush().await?;
        if self.durable_writes {
            file.sync_all().await?;
        }
        Ok(())
    }
}

#[async_trait]
impl BlobStore for LocalFilesystemStore {
    async fn put(&self, key: &BlobKey, data: Bytes) -> Result<String, StorageError> {
        // 1. Write to temp file
        let temp_path = self.path_builder.temp_path(Uuid::new_v4());
        debug!("Writing blob to temp file: {:?}", temp_path);

        if let Err(e) = self.write_temp(&temp_path, &data).await {
            error!(key = %key, error = %e, "Failed to write blob to temp file");
            let _ = fs::remove_file(&temp_path).await;
            return Err(StorageError::UploadFailed(e.to_string()));
        }

        // 2. Move to final location (atomic); an existing object is replaced
        let final_path = self.path_builder.object_path(key);
        if let Err(e) = fs::rename(&temp_path, &final_path).await {
            error!(key = %key, error = %e, "Failed to move blob into place");
            let _ = fs::remove_file(&temp_path).await;
            return Err(StorageError::UploadFailed(e.to_string()));
        }

        // Sync parent directory so the rename survives a crash
        if self.durable_writes {
            if let Some(parent) = final_path.parent() {
                match File::open(parent).await {
                    Ok(parent_file) => {
                        if let Err(e) = parent_file.sync_all().await {
                            warn!("Failed to sync parent directory after rename: {}", e);
                        }
                    }
                    Err(e) => {
                        warn!("Failed to open parent directory for sync: {}", e);
                    }
                }
            }
        }

        info!(key = %key, size_bytes = data.len(), "Blob stored");
        Ok(self.url_for(key))
    }

    async fn delete_if_exists(&self, key: &BlobKey) -> Result<bool, StorageError> {
        let path = self.path_builder.object_path(key);

        match fs::remove_file(&path).await {
            Ok(()) => {
                info!(key = %key, "Blob deleted");
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(key = %key, "Blob not present; nothing to delete");
                Ok(false)
            }
            Err(e) => {
                error!(key = %key, error = %e, "Failed to delete blob");
                Err(StorageError::DeleteFailed(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn store(dir: &TempDir) -> LocalFilesystemStore {
        let store = LocalFilesystemStore::new(dir.path().to_path_buf(), "http://localhost:8080/blobs/");
        store.init().await.unwrap();
        store
    }

    #[tokio::test]
    async fn test_store_init_creates_directories() {
        let dir = TempDir::new().unwrap();
        store(&dir).await;

        assert!(dir.path().join("temp").exists());
        assert!(dir.path().join("objects").exists());
    }

    #[tokio::test]
    async fn test_put_writes_object_and_returns_url() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir).await;
        let key = BlobKey::parse("abc.png").unwrap();

        let url = store
            .put(&key, Bytes::from_static(b"Hello, World!"))
            .await
            .unwrap();

        assert_eq!(url, "http://localhost:8080/blobs/abc.png");
        let written = std::fs::read(dir.path().join("objects").join("abc.png")).unwrap();
        assert_eq!(written, b"Hello, World!");
    }

    #[tokio::test]
    async fn test_put_leaves_no_temp_files() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir).await;
        let key = BlobKey::generate("cat.png");

        store.put(&key, Bytes::from_static(b"data")).await.unwrap();

        let leftovers = std::fs::read_dir(dir.path().join("temp")).unwrap().count();
        assert_eq!(leftovers, 0);
    }

    #[tokio::test]
    async fn test_put_replaces_existing_object() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir).await;
        let key = BlobKey::parse("same.bin").unwrap();

        store.put(&key, Bytes::from_static(b"first")).await.unwrap();
        store.put(&key, Bytes::from_static(b"second")).await.unwrap();

        let written = std::fs::read(dir.path().join("objects").join("same.bin")).unwrap();
        assert_eq!(written, b"second");
    }

    #[tokio::test]
    async fn test_delete_if_exists_twice() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir).await;
        let key = BlobKey::parse("gone.png").unwrap();
        store.put(&key, Bytes::from_static(b"x")).await.unwrap();

        assert!(store.delete_if_exists(&key).await.unwrap());
        assert!(!store.delete_if_exists(&key).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_missing_object() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir).await;
        let key = BlobKey::parse("never-written.png").unwrap();

        assert!(!store.delete_if_exists(&key).await.unwrap());
    }

    #[tokio::test]
    async fn test_put_without_init_fails() {
        let dir = TempDir::new().unwrap();
        let store = LocalFilesystemStore::with_durability(
            dir.path().join("missing"),
            "http://localhost/blobs",
            false,
        );
        let key = BlobKey::parse("a.png").unwrap();

        let result = store.put(&key, Bytes::from_static(b"x")).await;
        assert!(matches!(result, Err(StorageError::UploadFailed(_))));
    }
}
