use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::{Item, NewItem};
use crate::domain::value_objects::ItemId;
#[cfg(test)]
use mockall::{automock, predicate::*};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Item not found: {0}")]
    NotFound(String),

    /// The write matched no row; the caller decides whether that is a
    /// missing record or a concurrent modification.
    #[error("Concurrent modification: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Port for item persistence operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// All items, in ID order
    async fn list(&self) -> Result<Vec<Item>, RepositoryError>;

    async fn get(&self, id: ItemId) -> Result<Option<Item>, RepositoryError>;

    /// Insert and return the record with its assigned ID
    async fn create(&self, item: NewItem) -> Result<Item, RepositoryError>;

    /// Full-record replace keyed by ID
    async fn update(&self, item: &Item) -> Result<(), RepositoryError>;

    async fn delete(&self, item: &Item) -> Result<(), RepositoryError>;

    async fn exists_by_id(&self, id: ItemId) -> Result<bool, RepositoryError>;

    /// Every distinct non-null tag value
    async fn list_distinct_tags(&self) -> Result<Vec<String>, RepositoryError>;

    /// Case-insensitive exact tag match; an empty tag returns every item
    async fn find_by_tag(&self, tag: &str) -> Result<Vec<Item>, RepositoryError>;
}
