use std::sync::Arc;
use tracing::{debug, info};
use validator::Validate;

use crate::application::dto::{ItemDto, ItemPayload};
use crate::application::errors::ItemUseCaseError;
use crate::application::ports::{ItemRepository, RepositoryError};
use crate::domain::value_objects::ItemId;

/// Use case: List every item
pub struct ListItemsUseCase {
    repository: Arc<dyn ItemRepository>,
}

impl ListItemsUseCase {
    pub fn new(repository: Arc<dyn ItemRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<Vec<ItemDto>, ItemUseCaseError> {
        let items = self.repository.list().await?;
        Ok(items.into_iter().map(ItemDto::from).collect())
    }
}

/// Use case: Fetch one item by ID
pub struct GetItemUseCase {
    repository: Arc<dyn ItemRepository>,
}

impl GetItemUseCase {
    pub fn new(repository: Arc<dyn ItemRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: ItemId) -> Result<ItemDto, ItemUseCaseError> {
        self.repository
            .get(id)
            .await?
            .map(ItemDto::from)
            .ok_or_else(|| ItemUseCaseError::NotFound(id.to_string()))
    }
}

/// Use case: Insert a client-supplied record
///
/// The record is stored as given. No blob is involved.
pub struct CreateItemUseCase {
    repository: Arc<dyn ItemRepository>,
}

impl CreateItemUseCase {
    pub fn new(repository: Arc<dyn ItemRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, payload: ItemPayload) -> Result<ItemDto, ItemUseCaseError> {
        payload
            .validate()
            .map_err(|e| ItemUseCaseError::InvalidRequest(e.to_string()))?;

        let item = self.repository.create(payload.into_new_item()).await?;
        info!(item_id = item.id().value(), "Item created");

        Ok(ItemDto::from(item))
    }
}

/// Use case: Replace a record in full
pub struct UpdateItemUseCase {
    repository: Arc<dyn ItemRepository>,
}

impl UpdateItemUseCase {
    pub fn new(repository: Arc<dyn ItemRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: ItemId, payload: ItemPayload) -> Result<(), ItemUseCaseError> {
        if payload.id != Some(id.value()) {
            return Err(ItemUseCaseError::InvalidRequest(format!(
                "ID in path ({}) does not match ID in body",
                id
            )));
        }

        payload
            .validate()
            .map_err(|e| ItemUseCaseError::InvalidRequest(e.to_string()))?;

        let item = payload.into_item(id);
        match self.repository.update(&item).await {
            Ok(()) => {
                info!(item_id = id.value(), "Item replaced");
                Ok(())
            }
            // Zero rows written: either the row is gone or it changed under us
            Err(RepositoryError::Conflict(_)) | Err(RepositoryError::NotFound(_)) => {
                if self.repository.exists_by_id(id).await? {
                    Err(ItemUseCaseError::Conflict(id.to_string()))
                } else {
                    Err(ItemUseCaseError::NotFound(id.to_string()))
                }
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Use case: Delete a row only
///
/// The blob referenced by the row is not touched.
pub struct DeleteItemUseCase {
    repository: Arc<dyn ItemRepository>,
}

impl DeleteItemUseCase {
    pub fn new(repository: Arc<dyn ItemRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: ItemId) -> Result<ItemDto, ItemUseCaseError> {
        let item = self
            .repository
            .get(id)
            .await?
            .ok_or_else(|| ItemUseCaseError::NotFound(id.to_string()))?;

        self.repository.delete(&item).await?;

        if let Some(key) = item.blob_key_hint() {
            debug!(item_id = id.value(), key = %key, "Row deleted; blob left in store");
        }
        info!(item_id = id.value(), "Item deleted");

        Ok(ItemDto::from(item))
    }
}
