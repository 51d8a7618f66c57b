use async_trait::async_trait;
use bytes::Bytes;
use object_store::azure::{MicrosoftAzure, MicrosoftAzureBuilder};
use object_store::path::Path;
use object_store::Error as ObjectStoreError;
use object_store::{ObjectStoreExt, PutPayload, Result as ObjectResult};
use std::time::Instant;

use crate::application::ports::{BlobStore, StorageError};
use crate::config::AzureBlobConfig;
use crate::domain::value_objects::BlobKey;

/// Blob service endpoint used by Azurite
const EMULATOR_ENDPOINT: &str = "http://127.0.0.1:10000/devstoreaccount1";

/// Azure Blob Storage backed store
///
/// Every object lives directly in one container; the returned URL is the
/// plain blob URL inside that container.
pub struct AzureBlobStore {
    store: MicrosoftAzure,
    account: String,
    container: String,
    use_emulator: bool,
}

impl AzureBlobStore {
    pub fn new(config: &AzureBlobConfig) -> Result<Self, StorageError> {
        let mut builder = MicrosoftAzureBuilder::new()
            .with_container_name(config.container.clone())
            .with_use_emulator(config.use_emulator);

        if !config.use_emulator {
            builder = builder
                .with_account(config.account.clone())
                .with_access_key(config.access_key.clone());
        }

        let store = builder
            .build()
            .map_err(|e| StorageError::Config(e.to_string()))?;

        tracing::info!(
            account = %config.account,
            container = %config.container,
            emulator = config.use_emulator,
            "Azure blob store initialized"
        );

        Ok(Self {
            store,
            account: config.account.clone(),
            container: config.container.clone(),
            use_emulator: config.use_emulator,
        })
    }

    /// Public URL of the blob stored under `key`
    fn url_for(&self, key: &BlobKey) -> String {
        if self.use_emulator {
            format!("{}/{}/{}", EMULATOR_ENDPOINT, self.container, key)
        } else {
            format!(
                "https://{}.blob.core.windows.net/{}/{}",
                self.account, self.container, key
            )
        }
    }
}

#[async_trait]
impl BlobStore for AzureBlobStore {
    async fn put(&self, key: &BlobKey, data: Bytes) -> Result<String, StorageError> {
        let start = Instant::now();
        let size = data.len();
        let location = Path::from(key.as_str());

        let result: ObjectResult<_> = self.store.put(&location, PutPayload::from(data)).await;

        result.map_err(|e| {
            tracing::error!(
                error = %e,
                container = %self.container,
                key = %key,
                size_bytes = size,
                duration_ms = start.elapsed().as_millis(),
                "Azure upload failed"
            );
            StorageError::UploadFailed(e.to_string())
        })?;

        tracing::info!(
            container = %self.container,
            key = %key,
            size_bytes = size,
            duration_ms = start.elapsed().as_millis(),
            "Azure upload successful"
        );

        Ok(self.url_for(key))
    }

    async fn delete_if_exists(&self, key: &BlobKey) -> Result<bool, StorageError> {
        let start = Instant::now();
        let location = Path::from(key.as_str());

        match self.store.head(&location).await {
            Ok(_) => {}
            Err(ObjectStoreError::NotFound { .. }) => {
                tracing::debug!(container = %self.container, key = %key, "Blob not present");
                return Ok(false);
            }
            Err(e) => {
                tracing::error!(error = %e, key = %key, "Azure head request failed");
                return Err(StorageError::DeleteFailed(e.to_string()));
            }
        }

        let result: ObjectResult<_> = self.store.delete(&location).await;

        match result {
            Ok(()) => {
                tracing::info!(
                    container = %self.container,
                    key = %key,
                    duration_ms = start.elapsed().as_millis(),
                    "Azure delete successful"
                );
                Ok(true)
            }
            // Removed by someone else between head and delete
            Err(ObjectStoreError::NotFound { .. }) => Ok(false),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    container = %self.container,
                    key = %key,
                    duration_ms = start.elapsed().as_millis(),
                    "Azure delete failed"
                );
                Err(StorageError::DeleteFailed(e.to_string()))
            }
        }
    }
}
