mod blob_store;
mod item_repository;

pub use blob_store::{BlobStore, StorageError};
pub use item_repository::{ItemRepository, RepositoryError};

#[cfg(test)]
pub use blob_store::MockBlobStore;
#[cfg(test)]
pub use item_repository::MockItemRepository;
