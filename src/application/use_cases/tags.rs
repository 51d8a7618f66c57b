use std::sync::Arc;

use crate::application::dto::ItemDto;
use crate::application::errors::ItemUseCaseError;
use crate::application::ports::ItemRepository;

/// Use case: Every distinct tag value currently in use
pub struct ListTagsUseCase {
    repository: Arc<dyn ItemRepository>,
}

impl ListTagsUseCase {
    pub fn new(repository: Arc<dyn ItemRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<Vec<String>, ItemUseCaseError> {
        Ok(self.repository.list_distinct_tags().await?)
    }
}

/// Use case: Items whose tag equals the query, ignoring case
pub struct FindItemsByTagUseCase {
    repository: Arc<dyn ItemRepository>,
}

impl FindItemsByTagUseCase {
    pub fn new(repository: Arc<dyn ItemRepository>) -> Self {
        Self { repository }
    }

    /// A missing tag is treated as the empty string, which matches every item
    pub async fn execute(&self, tag: Option<String>) -> Result<Vec<ItemDto>, ItemUseCaseError> {
        let tag = tag.unwrap_or_default();
        let items = self.repository.find_by_tag(&tag).await?;
        Ok(items.into_iter().map(ItemDto::from).collect())
    }
}
